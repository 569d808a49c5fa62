use chrono::{DateTime, Utc};
use serde::Serialize;

use super::eta::estimate_eta_minutes;
use crate::model::{
    Bus, Coordinate, MaintenanceStatus, OperationalStatus, PollutionLevel, Route, Stop,
};

pub const MAX_RANKED_BUSES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub bus: Bus,
    pub eta_minutes: u32,
}

impl RankedEntry {
    pub fn new(bus: Bus) -> Self {
        let eta_minutes = estimate_eta_minutes(&bus.number);
        Self { bus, eta_minutes }
    }
}

/// Buses serving `stop`'s route, soonest first, at most [`MAX_RANKED_BUSES`].
///
/// Equal estimates keep the order the buses were given in.
pub fn rank_buses(stop: &Stop, buses: &[Bus]) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = buses
        .iter()
        .filter(|bus| bus.route_id == stop.route_id)
        .cloned()
        .map(RankedEntry::new)
        .collect();

    entries.sort_by_key(|entry| entry.eta_minutes);
    entries.truncate(MAX_RANKED_BUSES);
    entries
}

/// Stand-in buses shown when nothing real serves the nearest stop.
///
/// The n-th placeholder is put on the n-th route when there is one.
pub fn placeholder_buses(routes: &[Route], now: DateTime<Utc>) -> Vec<Bus> {
    [
        ("mock-1", "KL-07-101", OperationalStatus::OnTime),
        ("mock-2", "KL-07-202", OperationalStatus::Delayed),
        ("mock-3", "KL-07-303", OperationalStatus::Overcrowded),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (id, number, status))| Bus {
        id: id.to_string(),
        number: number.to_string(),
        route_id: routes
            .get(i)
            .map(|r| r.id.clone())
            .unwrap_or_else(|| "mock-route".to_string()),
        coordinate: Coordinate::new(0.0, 0.0),
        status,
        next_stop_id: None,
        pollution_level: PollutionLevel::Low,
        maintenance_status: MaintenanceStatus::Ok,
        updated_at: now,
    })
    .collect()
}
