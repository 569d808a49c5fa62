//! HTTP surface consumed by the rider app and the admin screen.

pub mod admin;
pub mod passenger;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(passenger::health))
        .route("/routes", get(passenger::list_routes))
        .route("/routes/{route_id}", get(passenger::get_route))
        .route("/buses", get(passenger::list_buses))
        .route("/buses/{bus_id}", get(passenger::get_bus))
        .route("/nearby", get(passenger::nearby))
        .route("/stops/near", get(passenger::stops_near))
        .route("/search", get(passenger::search))
        .route("/admin/fleet", get(admin::fleet))
        .route("/admin/buses", post(admin::add_bus))
        .route(
            "/admin/buses/{bus_id}",
            delete(admin::remove_bus).patch(admin::set_flags),
        )
        .route(
            "/admin/buses/{bus_id}/override",
            delete(admin::clear_flags),
        )
        .layer(cors)
        .with_state(state)
}
