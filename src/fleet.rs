//! Admin view of the fleet and the edits an admin can make to it.
//!
//! Edits live only in this process. They are layered over every snapshot
//! read from the directory and are never written back to the table store.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::directory::Snapshot;
use crate::model::{Bus, MaintenanceStatus, PollutionLevel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FleetFilter {
    #[default]
    All,
    NeedsAttention,
}

#[derive(Debug, Clone, Serialize)]
pub struct FleetEntry {
    pub bus: Bus,
    pub route_name: Option<String>,
    pub has_issues: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FleetTotals {
    pub all: usize,
    pub needs_attention: usize,
    pub maintenance_ok: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FleetOverview {
    pub filter: FleetFilter,
    pub entries: Vec<FleetEntry>,
    pub totals: FleetTotals,
}

pub fn fleet_overview(snapshot: &Snapshot, filter: FleetFilter) -> FleetOverview {
    let totals = FleetTotals {
        all: snapshot.buses.len(),
        needs_attention: snapshot.buses.iter().filter(|b| b.needs_attention()).count(),
        maintenance_ok: snapshot
            .buses
            .iter()
            .filter(|b| b.maintenance_status == MaintenanceStatus::Ok)
            .count(),
    };

    let entries = snapshot
        .buses
        .iter()
        .filter(|bus| match filter {
            FleetFilter::All => true,
            FleetFilter::NeedsAttention => bus.needs_attention(),
        })
        .map(|bus| FleetEntry {
            bus: bus.clone(),
            route_name: snapshot.route_name(&bus.route_id).map(str::to_string),
            has_issues: bus.needs_attention(),
        })
        .collect();

    FleetOverview {
        filter,
        entries,
        totals,
    }
}

/// Admin flags replacing what the table store reports for one bus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlagOverride {
    #[serde(default)]
    pub pollution_level: Option<PollutionLevel>,
    #[serde(default)]
    pub maintenance_status: Option<MaintenanceStatus>,
}

impl FlagOverride {
    fn merge(&mut self, other: FlagOverride) {
        self.pollution_level = other.pollution_level.or(self.pollution_level);
        self.maintenance_status = other.maintenance_status.or(self.maintenance_status);
    }

    pub fn apply(&self, bus: &mut Bus) {
        if let Some(level) = self.pollution_level {
            bus.pollution_level = level;
        }
        if let Some(status) = self.maintenance_status {
            bus.maintenance_status = status;
        }
    }
}

#[derive(Debug, Default)]
struct EditLog {
    added: Vec<Bus>,
    removed: HashSet<String>,
    overrides: HashMap<String, FlagOverride>,
}

/// Shared, in-memory fleet edits.
#[derive(Debug, Clone, Default)]
pub struct FleetEdits {
    log: Arc<RwLock<EditLog>>,
}

impl FleetEdits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a bus, replacing any bus with the same id.
    pub async fn add_bus(&self, bus: Bus) {
        let mut log = self.log.write().await;
        info!(bus_id = %bus.id, number = %bus.number, "adding bus");

        log.removed.remove(&bus.id);
        log.added.retain(|b| b.id != bus.id);
        log.added.push(bus);
    }

    /// Hides a bus from every later snapshot.
    pub async fn remove_bus(&self, bus_id: &str) {
        let mut log = self.log.write().await;
        info!(bus_id, "removing bus");

        log.added.retain(|b| b.id != bus_id);
        log.overrides.remove(bus_id);
        log.removed.insert(bus_id.to_string());
    }

    /// Merges `flags` into the override for `bus_id` and returns the result.
    pub async fn set_override(&self, bus_id: &str, flags: FlagOverride) -> FlagOverride {
        let mut log = self.log.write().await;
        let entry = log.overrides.entry(bus_id.to_string()).or_default();
        entry.merge(flags);
        info!(bus_id, ?entry, "override set");
        *entry
    }

    /// Returns whether there was an override to clear.
    pub async fn clear_override(&self, bus_id: &str) -> bool {
        self.log.write().await.overrides.remove(bus_id).is_some()
    }

    pub async fn apply(&self, snapshot: &mut Snapshot) {
        let log = self.log.read().await;

        snapshot.buses.retain(|bus| {
            !log.removed.contains(&bus.id) && !log.added.iter().any(|added| added.id == bus.id)
        });
        snapshot.buses.extend(log.added.iter().cloned());

        for bus in snapshot.buses.iter_mut() {
            if let Some(flags) = log.overrides.get(&bus.id) {
                flags.apply(bus);
            }
        }

        snapshot.sort_buses();
    }
}
