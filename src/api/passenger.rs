use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;
use crate::location::resolve_location;
use crate::model::{Bus, Route};
use crate::state::AppState;
use crate::views::{
    self, BusDetails, NearYou, NearbyBuses, RouteTimeline, TripQuery, TripSearch,
    DEFAULT_NEAR_STOPS,
};

#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NearQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub limit: Option<usize>,
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn list_routes(State(state): State<AppState>) -> Result<Json<Vec<Route>>, ApiError> {
    let snapshot = state.snapshot().await?;
    Ok(Json(snapshot.routes))
}

pub async fn get_route(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
) -> Result<Json<RouteTimeline>, ApiError> {
    let snapshot = state.snapshot().await?;
    let timeline = views::route_timeline(&snapshot, &route_id, Utc::now())
        .ok_or_else(|| ApiError::NotFound(format!("Route '{route_id}'")))?;
    Ok(Json(timeline))
}

pub async fn list_buses(State(state): State<AppState>) -> Result<Json<Vec<Bus>>, ApiError> {
    let snapshot = state.snapshot().await?;
    Ok(Json(snapshot.buses))
}

pub async fn get_bus(
    State(state): State<AppState>,
    Path(bus_id): Path<String>,
) -> Result<Json<BusDetails>, ApiError> {
    let snapshot = state.snapshot().await?;
    let details = views::bus_details(&snapshot, &bus_id)
        .ok_or_else(|| ApiError::NotFound(format!("Bus '{bus_id}'")))?;
    Ok(Json(details))
}

pub async fn nearby(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<NearbyBuses>, ApiError> {
    let reference = resolve_location(query.lat, query.lng)?;
    let snapshot = state.snapshot().await?;

    let nearby = views::nearby_buses(&snapshot, reference, Utc::now());
    debug!(
        nearest_stop = ?nearby.nearest_stop.as_ref().map(|s| &s.id),
        entries = nearby.entries.len(),
        placeholder = nearby.placeholder,
        "ranked nearby buses"
    );
    Ok(Json(nearby))
}

pub async fn stops_near(
    State(state): State<AppState>,
    Query(query): Query<NearQuery>,
) -> Result<Json<NearYou>, ApiError> {
    let center = resolve_location(query.lat, query.lng)?;
    let snapshot = state.snapshot().await?;

    let limit = query.limit.unwrap_or(DEFAULT_NEAR_STOPS);
    Ok(Json(views::stops_near(&snapshot, center, limit)))
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<TripQuery>,
) -> Result<Json<TripSearch>, ApiError> {
    let snapshot = state.snapshot().await?;
    let today = Utc::now().date_naive();

    let search = views::search_trips(&snapshot, &query, today)
        .ok_or_else(|| ApiError::BadRequest(format!("day offset {} is out of range", query.day_offset)))?;
    Ok(Json(search))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fixtures::seed_dir;
    use crate::directory::{CsvDirectory, Directory};

    fn state() -> AppState {
        AppState::new(Directory::Files(CsvDirectory::new(seed_dir())))
    }

    #[tokio::test]
    async fn test_nearby_with_fallback_location() {
        let Json(nearby) = nearby(State(state()), Query(LocationQuery::default()))
            .await
            .unwrap();

        assert!(nearby.reference.fallback);
        assert_eq!(nearby.nearest_stop.unwrap().id, "stop-c1");
        assert_eq!(nearby.entries[0].bus.number, "KL-07-505");
    }

    #[tokio::test]
    async fn test_nearby_rejects_bad_coordinates() {
        let query = LocationQuery {
            lat: Some(123.0),
            lng: Some(76.0),
        };

        let err = nearby(State(state()), Query(query)).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_stops_near_limit() {
        let query = NearQuery {
            lat: Some(10.1076),
            lng: Some(76.3516),
            limit: Some(2),
        };

        let Json(near) = stops_near(State(state()), Query(query)).await.unwrap();

        assert!(!near.center.fallback);
        assert_eq!(near.stops.len(), 2);
        assert_eq!(near.stops[0].stop.id, "stop-a1");
    }

    #[tokio::test]
    async fn test_get_route_and_bus() {
        let Json(timeline) = get_route(State(state()), Path("route-a".to_string()))
            .await
            .unwrap();
        assert_eq!(timeline.stops.len(), 4);

        let Json(details) = get_bus(State(state()), Path("bus-4".to_string()))
            .await
            .unwrap();
        assert_eq!(details.next_stop.unwrap().name, "Kaloor");

        let err = get_bus(State(state()), Path("bus-404".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_search() {
        let query = TripQuery {
            from: "fort".into(),
            to: "kakkanad".into(),
            ..TripQuery::default()
        };

        let Json(search) = search(State(state()), Query(query)).await.unwrap();

        let numbers: Vec<&str> = search.results.iter().map(|r| r.bus_number.as_str()).collect();
        assert_eq!(numbers, ["KL-07-404", "KL-07-606"]);
    }

    #[tokio::test]
    async fn test_lists() {
        let Json(routes) = list_routes(State(state())).await.unwrap();
        assert_eq!(routes.len(), 3);

        let Json(buses) = list_buses(State(state())).await.unwrap();
        assert_eq!(buses.len(), 6);
        assert_eq!(health().await, "OK");
    }
}
