use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::directory::Snapshot;
use crate::location::map_center;
use crate::model::{Bus, Coordinate, Route, Stop};

/// Scheduled gap between consecutive stops.
pub const MINUTES_BETWEEN_STOPS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopMarker {
    Start,
    End,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineStop {
    pub stop: Stop,
    /// 1-based position along the route.
    pub position: usize,
    pub scheduled: DateTime<Utc>,
    pub actual: DateTime<Utc>,
    pub delay_minutes: i64,
    pub marker: Option<StopMarker>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteTimeline {
    pub route: Route,
    pub stops: Vec<TimelineStop>,
    pub active_buses: Vec<Bus>,
    pub map_center: Coordinate,
}

/// Delay shown for the stop at `index`. There is no live data behind it.
fn placeholder_delay_minutes(index: usize) -> i64 {
    let even = if index % 2 == 0 { 2 } else { 0 };
    let after_first = if index == 0 { 0 } else { 1 };
    even + after_first
}

/// The route's stops with scheduled and actual times counted from `base`.
pub fn route_timeline(snapshot: &Snapshot, route_id: &str, base: DateTime<Utc>) -> Option<RouteTimeline> {
    let route = snapshot.route(route_id)?.clone();
    let stops = snapshot.stops_on_route(route_id);
    let last = stops.len().saturating_sub(1);

    let map_center = map_center(None, &stops, &[]);
    let active_buses = snapshot.buses_on_route(route_id);

    let stops = stops
        .into_iter()
        .enumerate()
        .map(|(index, stop)| {
            let scheduled = base + TimeDelta::minutes(index as i64 * MINUTES_BETWEEN_STOPS);
            let delay_minutes = placeholder_delay_minutes(index);
            let marker = if index == 0 {
                Some(StopMarker::Start)
            } else if index == last {
                Some(StopMarker::End)
            } else {
                None
            };

            TimelineStop {
                stop,
                position: index + 1,
                scheduled,
                actual: scheduled + TimeDelta::minutes(delay_minutes),
                delay_minutes,
                marker,
            }
        })
        .collect();

    Some(RouteTimeline {
        route,
        stops,
        active_buses,
        map_center,
    })
}
