//! Ranking of stops and buses around a rider's position.
//!
//! Everything here is pure and synchronous. Callers fetch a directory
//! snapshot and a reference location first, then hand both in; nothing is
//! retained between calls.

pub mod distance;
pub mod eta;
pub mod nearest;
pub mod ranking;

pub use distance::{haversine_distance, EARTH_RADIUS_KM};
pub use eta::estimate_eta_minutes;
pub use nearest::{nearest_stop, stops_by_distance, StopDistance};
pub use ranking::{placeholder_buses, rank_buses, RankedEntry, MAX_RANKED_BUSES};
