//! Read models for the screens of the rider app.
//!
//! Each function takes a snapshot plus whatever the screen was opened with
//! and returns a value ready to serialize.

pub mod bus_details;
pub mod nearby;
pub mod search;
pub mod timeline;

pub use bus_details::*;
pub use nearby::*;
pub use search::*;
pub use timeline::*;
