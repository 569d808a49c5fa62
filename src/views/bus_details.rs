use serde::Serialize;

use crate::directory::Snapshot;
use crate::location::map_center;
use crate::model::{Bus, Coordinate, Route, Stop};
use crate::proximity::estimate_eta_minutes;

#[derive(Debug, Clone, Serialize)]
pub struct BusDetails {
    pub bus: Bus,
    pub route: Option<Route>,
    pub next_stop: Option<Stop>,
    /// Placeholder estimate, only present together with `next_stop`.
    pub next_stop_eta_minutes: Option<u32>,
    pub route_stops: Vec<Stop>,
    pub map_center: Coordinate,
}

pub fn bus_details(snapshot: &Snapshot, bus_id: &str) -> Option<BusDetails> {
    let bus = snapshot.bus(bus_id)?.clone();

    let next_stop = bus
        .next_stop_id
        .as_deref()
        .and_then(|id| snapshot.stop(id))
        .cloned();
    let next_stop_eta_minutes = next_stop
        .as_ref()
        .map(|_| estimate_eta_minutes(&bus.number));
    let route_stops = snapshot.stops_on_route(&bus.route_id);
    let map_center = map_center(None, &route_stops, std::slice::from_ref(&bus));

    Some(BusDetails {
        route: snapshot.route(&bus.route_id).cloned(),
        next_stop,
        next_stop_eta_minutes,
        route_stops,
        map_center,
        bus,
    })
}
