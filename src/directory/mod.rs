//! Read access to the route, stop and bus tables.
//!
//! Every request works on a [`Snapshot`]: one read of all three tables that
//! is never mutated afterwards.

pub mod files;
pub mod supabase;

use std::path::PathBuf;

use thiserror::Error;

use crate::model::{Bus, BusRow, Route, Stop, StopRow};

pub use files::CsvDirectory;
pub use supabase::SupabaseDirectory;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("request to the table store failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("table store answered {status} for `{table}`: {body}")]
    Status {
        table: String,
        status: u16,
        body: String,
    },

    #[error("failed to read {}: {source}", file.display())]
    Csv {
        file: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid table store credentials: {0}")]
    InvalidCredentials(String),
}

/// Where rows come from.
#[derive(Debug)]
pub enum Directory {
    Supabase(SupabaseDirectory),
    Files(CsvDirectory),
}

impl Directory {
    pub async fn snapshot(&self) -> Result<Snapshot, DirectoryError> {
        match self {
            Directory::Supabase(store) => store.snapshot().await,
            Directory::Files(files) => files.snapshot(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Directory::Supabase(store) => format!("table store at {}", store.base_url()),
            Directory::Files(files) => format!("csv files in {}", files.dir().display()),
        }
    }
}

/// One consistent read of the directory.
///
/// Stops are ordered by `sequence` and buses by `number`; routes keep store order.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub routes: Vec<Route>,
    pub stops: Vec<Stop>,
    pub buses: Vec<Bus>,
}

impl Snapshot {
    pub fn new(routes: Vec<Route>, stops: Vec<StopRow>, buses: Vec<BusRow>) -> Self {
        let mut stops: Vec<Stop> = stops.into_iter().map(Stop::from).collect();
        stops.sort_by_key(|s| s.sequence);

        let buses = buses.into_iter().map(Bus::from).collect();

        let mut snapshot = Self {
            routes,
            stops,
            buses,
        };
        snapshot.sort_buses();
        snapshot
    }

    pub(crate) fn sort_buses(&mut self) {
        self.buses.sort_by(|a, b| a.number.cmp(&b.number));
    }

    pub fn route(&self, route_id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == route_id)
    }

    pub fn route_name(&self, route_id: &str) -> Option<&str> {
        self.route(route_id).map(|r| r.name.as_str())
    }

    pub fn stop(&self, stop_id: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id == stop_id)
    }

    pub fn bus(&self, bus_id: &str) -> Option<&Bus> {
        self.buses.iter().find(|b| b.id == bus_id)
    }

    /// Stops of one route in sequence order.
    pub fn stops_on_route(&self, route_id: &str) -> Vec<Stop> {
        self.stops
            .iter()
            .filter(|s| s.route_id == route_id)
            .cloned()
            .collect()
    }

    pub fn buses_on_route(&self, route_id: &str) -> Vec<Bus> {
        self.buses
            .iter()
            .filter(|b| b.route_id == route_id)
            .cloned()
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MaintenanceStatus, OperationalStatus, PollutionLevel};

    fn stop_row(id: &str, route_id: &str, sequence: u32) -> StopRow {
        StopRow {
            id: id.into(),
            route_id: route_id.into(),
            name: id.to_uppercase(),
            lat: 9.9,
            lng: 76.2,
            sequence,
            created_at: None,
        }
    }

    fn bus_row(id: &str, number: &str, route_id: &str) -> BusRow {
        BusRow {
            id: id.into(),
            number: number.into(),
            route_id: route_id.into(),
            current_lat: 9.9,
            current_lng: 76.2,
            status: OperationalStatus::Delayed,
            next_stop_id: Some(String::new()),
            pollution_level: PollutionLevel::Medium,
            maintenance_status: MaintenanceStatus::Ok,
            updated_at: chrono::Utc::now(),
            created_at: None,
        }
    }

    #[test]
    fn test_snapshot_ordering() {
        let snapshot = Snapshot::new(
            vec![],
            vec![stop_row("c", "r1", 3), stop_row("a", "r1", 1), stop_row("x", "r2", 1)],
            vec![bus_row("b2", "KL-07-202", "r1"), bus_row("b1", "KL-07-101", "r2")],
        );

        let stop_ids: Vec<&str> = snapshot.stops.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(stop_ids, ["a", "x", "c"]);

        let numbers: Vec<&str> = snapshot.buses.iter().map(|b| b.number.as_str()).collect();
        assert_eq!(numbers, ["KL-07-101", "KL-07-202"]);

        // empty next stop column means no next stop
        assert!(snapshot.buses.iter().all(|b| b.next_stop_id.is_none()));
    }

    #[test]
    fn test_snapshot_lookups() {
        let snapshot = Snapshot::new(
            vec![],
            vec![stop_row("c", "r1", 3), stop_row("a", "r1", 1), stop_row("x", "r2", 1)],
            vec![bus_row("b2", "KL-07-202", "r1"), bus_row("b1", "KL-07-101", "r2")],
        );

        let on_r1: Vec<String> = snapshot.stops_on_route("r1").into_iter().map(|s| s.id).collect();
        assert_eq!(on_r1, ["a", "c"]);
        assert_eq!(snapshot.buses_on_route("r2").len(), 1);
        assert_eq!(snapshot.bus("b2").map(|b| b.number.as_str()), Some("KL-07-202"));
        assert!(snapshot.stop("missing").is_none());
        assert!(snapshot.route("r1").is_none());
    }
}
