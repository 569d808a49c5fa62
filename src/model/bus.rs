use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationalStatus {
    OnTime,
    Delayed,
    Overcrowded,
    Breakdown,
}

impl OperationalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OperationalStatus::OnTime => "On Time",
            OperationalStatus::Delayed => "Delayed",
            OperationalStatus::Overcrowded => "Overcrowded",
            OperationalStatus::Breakdown => "Breakdown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PollutionLevel {
    Low,
    Medium,
    High,
}

impl PollutionLevel {
    pub fn label(&self) -> &'static str {
        match self {
            PollutionLevel::Low => "Low",
            PollutionLevel::Medium => "Medium",
            PollutionLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStatus {
    Ok,
    NeedsService,
}

impl MaintenanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MaintenanceStatus::Ok => "OK",
            MaintenanceStatus::NeedsService => "Needs Service",
        }
    }
}

/// Bus as stored in the `buses` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BusRow {
    pub id: String,
    pub number: String,
    pub route_id: String,
    pub current_lat: f64,
    pub current_lng: f64,
    pub status: OperationalStatus,
    #[serde(default)]
    pub next_stop_id: Option<String>,
    pub pollution_level: PollutionLevel,
    pub maintenance_status: MaintenanceStatus,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bus {
    pub id: String,
    /// Registration shown to riders, e.g. `KL-07-101`.
    pub number: String,
    pub route_id: String,
    pub coordinate: Coordinate,
    pub status: OperationalStatus,
    pub next_stop_id: Option<String>,
    pub pollution_level: PollutionLevel,
    pub maintenance_status: MaintenanceStatus,
    pub updated_at: DateTime<Utc>,
}

impl Bus {
    /// High pollution or pending service puts a bus on the admin attention list.
    pub fn needs_attention(&self) -> bool {
        self.pollution_level == PollutionLevel::High
            || self.maintenance_status == MaintenanceStatus::NeedsService
    }
}

impl From<BusRow> for Bus {
    fn from(row: BusRow) -> Self {
        Self {
            id: row.id,
            number: row.number,
            route_id: row.route_id,
            coordinate: Coordinate::new(row.current_lat, row.current_lng),
            status: row.status,
            next_stop_id: row.next_stop_id.filter(|id| !id.is_empty()),
            pollution_level: row.pollution_level,
            maintenance_status: row.maintenance_status,
            updated_at: row.updated_at,
        }
    }
}
