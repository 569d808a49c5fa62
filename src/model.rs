pub mod bus;
pub mod coordinate;
pub mod route;
pub mod stop;

pub use bus::*;
pub use coordinate::*;
pub use route::*;
pub use stop::*;
