use serde::Serialize;
use thiserror::Error;

use crate::model::{Bus, Coordinate, Stop, DEFAULT_MAP_CENTER, FALLBACK_LOCATION};

#[derive(Debug, Error, PartialEq)]
#[error("coordinate out of range: {lat}, {lng}")]
pub struct InvalidCoordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub coordinate: Coordinate,
    /// True when the device location was unavailable and [`FALLBACK_LOCATION`] is used.
    pub fallback: bool,
}

/// Picks the reference point for ranking.
///
/// A device position needs both components; with either missing the fixed
/// fallback is used instead.
pub fn resolve_location(
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<ResolvedLocation, InvalidCoordinate> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => {
            let coordinate = Coordinate::new(lat, lng);
            if !coordinate.is_valid() {
                return Err(InvalidCoordinate { lat, lng });
            }
            Ok(ResolvedLocation {
                coordinate,
                fallback: false,
            })
        }
        _ => Ok(ResolvedLocation {
            coordinate: FALLBACK_LOCATION,
            fallback: true,
        }),
    }
}

/// Center for a map showing `stops` and `buses`.
pub fn map_center(center: Option<Coordinate>, stops: &[Stop], buses: &[Bus]) -> Coordinate {
    center
        .or_else(|| stops.first().map(|s| s.coordinate))
        .or_else(|| buses.first().map(|b| b.coordinate))
        .unwrap_or(DEFAULT_MAP_CENTER)
}
