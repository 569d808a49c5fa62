use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Stop as stored in the `stops` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StopRow {
    pub id: String,
    pub route_id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub sequence: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A fixed point on a route. `sequence` orders the stops within their route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    pub id: String,
    pub route_id: String,
    pub name: String,
    pub coordinate: Coordinate,
    pub sequence: u32,
}

impl From<StopRow> for Stop {
    fn from(row: StopRow) -> Self {
        Self {
            id: row.id,
            route_id: row.route_id,
            name: row.name,
            coordinate: Coordinate::new(row.lat, row.lng),
            sequence: row.sequence,
        }
    }
}
