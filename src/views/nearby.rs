use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::directory::Snapshot;
use crate::location::ResolvedLocation;
use crate::model::Stop;
use crate::proximity::{
    nearest_stop, placeholder_buses, rank_buses, stops_by_distance, RankedEntry, StopDistance,
    MAX_RANKED_BUSES,
};

pub const DEFAULT_NEAR_STOPS: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct NearbyBuses {
    pub reference: ResolvedLocation,
    pub nearest_stop: Option<Stop>,
    pub entries: Vec<RankedEntry>,
    /// The entries are stand-ins because nothing real serves the nearest stop.
    pub placeholder: bool,
}

/// Buses arriving at the stop nearest to `reference`.
pub fn nearby_buses(snapshot: &Snapshot, reference: ResolvedLocation, now: DateTime<Utc>) -> NearbyBuses {
    let nearest = nearest_stop(reference.coordinate, &snapshot.stops);
    let ranked = nearest
        .map(|stop| rank_buses(stop, &snapshot.buses))
        .unwrap_or_default();

    let placeholder = ranked.is_empty();
    let entries = if placeholder {
        placeholder_buses(&snapshot.routes, now)
            .into_iter()
            .map(RankedEntry::new)
            .take(MAX_RANKED_BUSES)
            .collect()
    } else {
        ranked
    };

    NearbyBuses {
        reference,
        nearest_stop: nearest.cloned(),
        entries,
        placeholder,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NearYou {
    pub center: ResolvedLocation,
    pub stops: Vec<StopDistance>,
}

pub fn stops_near(snapshot: &Snapshot, center: ResolvedLocation, limit: usize) -> NearYou {
    NearYou {
        center,
        stops: stops_by_distance(center.coordinate, &snapshot.stops, limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fixtures::seed_snapshot;
    use crate::location::resolve_location;

    #[test]
    fn test_nearby_from_fallback_location() {
        let snapshot = seed_snapshot();
        let reference = resolve_location(None, None).unwrap();

        let nearby = nearby_buses(&snapshot, reference, Utc::now());

        assert!(nearby.reference.fallback);
        assert_eq!(nearby.nearest_stop.as_ref().map(|s| s.id.as_str()), Some("stop-c1"));
        assert!(!nearby.placeholder);

        let numbers: Vec<&str> = nearby.entries.iter().map(|e| e.bus.number.as_str()).collect();
        assert_eq!(numbers, ["KL-07-505", "KL-07-202", "KL-07-303"]);
        assert_eq!(
            nearby.entries.iter().map(|e| e.eta_minutes).collect::<Vec<_>>(),
            [5, 14, 16]
        );
    }

    #[test]
    fn test_nearby_uses_placeholders_when_route_has_no_buses() {
        let mut snapshot = seed_snapshot();
        snapshot.buses.retain(|b| b.route_id != "route-c");
        let reference = resolve_location(None, None).unwrap();

        let nearby = nearby_buses(&snapshot, reference, Utc::now());

        assert!(nearby.placeholder);
        let numbers: Vec<&str> = nearby.entries.iter().map(|e| e.bus.number.as_str()).collect();
        assert_eq!(numbers, ["KL-07-101", "KL-07-202", "KL-07-303"]);
        assert_eq!(nearby.entries[2].bus.route_id, "route-c");
    }

    #[test]
    fn test_nearby_without_stops() {
        let snapshot = Snapshot::default();
        let reference = resolve_location(Some(10.0), Some(76.3)).unwrap();

        let nearby = nearby_buses(&snapshot, reference, Utc::now());

        assert!(nearby.nearest_stop.is_none());
        assert!(nearby.placeholder);
        assert_eq!(nearby.entries.len(), 3);
        assert!(nearby.entries.iter().all(|e| e.bus.route_id == "mock-route"));
    }

    #[test]
    fn test_stops_near() {
        let snapshot = seed_snapshot();
        let center = resolve_location(Some(9.9658), Some(76.2421)).unwrap();

        let near = stops_near(&snapshot, center, 3);

        assert_eq!(near.stops.len(), 3);
        assert_eq!(near.stops[0].stop.id, "stop-b1");
        assert!(near.stops.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    }
}
