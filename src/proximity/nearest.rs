use serde::Serialize;

use super::distance::haversine_distance;
use crate::model::{Coordinate, Stop};

/// Returns the stop closest to `reference`.
///
/// Scans left to right and only replaces the current best on a strictly
/// smaller distance, so ties go to the stop that comes first in `stops`.
/// `None` when there are no stops.
pub fn nearest_stop(reference: Coordinate, stops: &[Stop]) -> Option<&Stop> {
    let mut best: Option<(&Stop, f64)> = None;

    for stop in stops {
        let distance = haversine_distance(reference, stop.coordinate);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((stop, distance)),
        }
    }

    best.map(|(stop, _)| stop)
}

#[derive(Debug, Clone, Serialize)]
pub struct StopDistance {
    pub stop: Stop,
    pub distance_km: f64,
}

/// Stops ordered by distance from `reference`, closest first, at most `limit` of them.
pub fn stops_by_distance(reference: Coordinate, stops: &[Stop], limit: usize) -> Vec<StopDistance> {
    let mut annotated: Vec<StopDistance> = stops
        .iter()
        .map(|stop| StopDistance {
            stop: stop.clone(),
            distance_km: haversine_distance(reference, stop.coordinate),
        })
        .collect();

    // sort_by is stable, equal distances keep input order
    annotated.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    annotated.truncate(limit);
    annotated
}
