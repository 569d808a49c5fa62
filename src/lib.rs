//! # next_stop
//!
//! Backend for the Next Stop bus tracking app: finds the stop nearest to a
//! rider, ranks the buses coming to it and serves the rider and admin
//! screens over HTTP.
//!
//! ## Example
//!
//! ```
//! use next_stop::model::{Coordinate, Stop};
//! use next_stop::proximity::nearest_stop;
//!
//! let stops = vec![
//!     Stop {
//!         id: "s1".into(),
//!         route_id: "r1".into(),
//!         name: "Ernakulam".into(),
//!         coordinate: Coordinate::new(9.93, 76.27),
//!         sequence: 1,
//!     },
//!     Stop {
//!         id: "s2".into(),
//!         route_id: "r1".into(),
//!         name: "Kaloor".into(),
//!         coordinate: Coordinate::new(10.02, 76.30),
//!         sequence: 2,
//!     },
//! ];
//!
//! let nearest = nearest_stop(Coordinate::new(9.931, 76.268), &stops);
//! assert_eq!(nearest.map(|s| s.id.as_str()), Some("s1"));
//! ```

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod fleet;
pub mod location;
pub mod model;
pub mod navigation;
pub mod proximity;
pub mod state;
pub mod telemetry;
pub mod views;
