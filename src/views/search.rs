use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::directory::Snapshot;
use crate::model::{OperationalStatus, Stop};
use crate::proximity::estimate_eta_minutes;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripQuery {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub bus_number: Option<String>,
    #[serde(default)]
    pub day_offset: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripResult {
    pub bus_id: String,
    pub bus_number: String,
    pub route_id: String,
    pub route_name: String,
    pub origin: String,
    pub destination: String,
    pub stops_between: u32,
    pub status: OperationalStatus,
    pub eta_minutes: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TripSearch {
    pub service_date: NaiveDate,
    pub results: Vec<TripResult>,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// First stop matching `from` and the first stop after it matching `to`.
fn matching_leg<'a>(stops: &'a [Stop], from: &str, to: &str) -> Option<(&'a Stop, &'a Stop)> {
    let origin_index = stops.iter().position(|s| contains_ignore_case(&s.name, from))?;
    let origin = &stops[origin_index];
    let destination = stops[origin_index + 1..]
        .iter()
        .find(|s| s.sequence > origin.sequence && contains_ignore_case(&s.name, to))?;
    Some((origin, destination))
}

/// Buses that can take a rider from `query.from` to `query.to`.
///
/// Returns `None` when the day offset moves the service date out of range.
pub fn search_trips(snapshot: &Snapshot, query: &TripQuery, today: NaiveDate) -> Option<TripSearch> {
    let service_date = TimeDelta::try_days(query.day_offset)
        .and_then(|offset| today.checked_add_signed(offset))?;

    let bus_filter = query
        .bus_number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());

    let mut results = Vec::new();
    for route in &snapshot.routes {
        let stops = snapshot.stops_on_route(&route.id);
        let Some((origin, destination)) = matching_leg(&stops, &query.from, &query.to) else {
            continue;
        };

        for bus in snapshot.buses.iter().filter(|b| b.route_id == route.id) {
            if let Some(number) = bus_filter {
                if !contains_ignore_case(&bus.number, number) {
                    continue;
                }
            }

            results.push(TripResult {
                bus_id: bus.id.clone(),
                bus_number: bus.number.clone(),
                route_id: route.id.clone(),
                route_name: route.name.clone(),
                origin: origin.name.clone(),
                destination: destination.name.clone(),
                stops_between: destination.sequence - origin.sequence,
                status: bus.status,
                eta_minutes: estimate_eta_minutes(&bus.number),
            });
        }
    }

    Some(TripSearch {
        service_date,
        results,
    })
}
