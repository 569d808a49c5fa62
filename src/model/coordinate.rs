use serde::{Deserialize, Serialize};

/// Reference point used when the rider's device location is unavailable (Kochi).
pub const FALLBACK_LOCATION: Coordinate = Coordinate {
    lat: 9.9312,
    lng: 76.2673,
};

/// Where the map is centered when nothing else is known.
pub const DEFAULT_MAP_CENTER: Coordinate = Coordinate {
    lat: 9.5916,
    lng: 76.5222,
};

/// A point on Earth in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}
