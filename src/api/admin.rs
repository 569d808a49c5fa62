use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::fleet::{fleet_overview, FlagOverride, FleetFilter, FleetOverview};
use crate::model::{Bus, BusRow};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FleetQuery {
    #[serde(default)]
    pub filter: FleetFilter,
}

pub async fn fleet(
    State(state): State<AppState>,
    Query(query): Query<FleetQuery>,
) -> Result<Json<FleetOverview>, ApiError> {
    let snapshot = state.snapshot().await?;
    Ok(Json(fleet_overview(&snapshot, query.filter)))
}

pub async fn add_bus(
    State(state): State<AppState>,
    Json(row): Json<BusRow>,
) -> Result<(StatusCode, Json<Bus>), ApiError> {
    let bus = Bus::from(row);
    if !bus.coordinate.is_valid() {
        return Err(ApiError::BadRequest(format!(
            "bus '{}' has an invalid position",
            bus.id
        )));
    }

    state.edits.add_bus(bus.clone()).await;
    Ok((StatusCode::CREATED, Json(bus)))
}

pub async fn remove_bus(
    State(state): State<AppState>,
    Path(bus_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let snapshot = state.snapshot().await?;
    if snapshot.bus(&bus_id).is_none() {
        return Err(ApiError::NotFound(format!("Bus '{bus_id}'")));
    }

    state.edits.remove_bus(&bus_id).await;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_flags(
    State(state): State<AppState>,
    Path(bus_id): Path<String>,
    Json(flags): Json<FlagOverride>,
) -> Result<Json<Bus>, ApiError> {
    let snapshot = state.snapshot().await?;
    let mut bus = snapshot
        .bus(&bus_id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Bus '{bus_id}'")))?;

    state.edits.set_override(&bus_id, flags).await.apply(&mut bus);
    Ok(Json(bus))
}

pub async fn clear_flags(
    State(state): State<AppState>,
    Path(bus_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.edits.clear_override(&bus_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("Override for bus '{bus_id}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fixtures::seed_dir;
    use crate::directory::{CsvDirectory, Directory};
    use crate::model::{MaintenanceStatus, PollutionLevel};

    fn state() -> AppState {
        AppState::new(Directory::Files(CsvDirectory::new(seed_dir())))
    }

    async fn overview(state: &AppState, filter: FleetFilter) -> FleetOverview {
        let Json(overview) = fleet(State(state.clone()), Query(FleetQuery { filter }))
            .await
            .unwrap();
        overview
    }

    #[tokio::test]
    async fn test_flag_bus_for_service() {
        let state = state();
        assert_eq!(overview(&state, FleetFilter::NeedsAttention).await.totals.needs_attention, 2);

        let flags = FlagOverride {
            pollution_level: None,
            maintenance_status: Some(MaintenanceStatus::NeedsService),
        };
        let Json(bus) = set_flags(State(state.clone()), Path("bus-1".to_string()), Json(flags))
            .await
            .unwrap();
        assert_eq!(bus.maintenance_status, MaintenanceStatus::NeedsService);
        assert_eq!(bus.pollution_level, PollutionLevel::Low);

        let flagged = overview(&state, FleetFilter::NeedsAttention).await;
        assert_eq!(flagged.totals.needs_attention, 3);
        assert_eq!(flagged.totals.maintenance_ok, 4);

        let status = clear_flags(State(state.clone()), Path("bus-1".to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(overview(&state, FleetFilter::All).await.totals.needs_attention, 2);
    }

    #[tokio::test]
    async fn test_add_and_remove_bus() {
        let state = state();
        let row: BusRow = serde_json::from_value(serde_json::json!({
            "id": "bus-7",
            "number": "KL-07-707",
            "route_id": "route-a",
            "current_lat": 10.03,
            "current_lng": 76.31,
            "status": "on-time",
            "pollution_level": "low",
            "maintenance_status": "ok"
        }))
        .unwrap();

        let (status, Json(bus)) = add_bus(State(state.clone()), Json(row)).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(bus.number, "KL-07-707");
        assert_eq!(overview(&state, FleetFilter::All).await.totals.all, 7);

        let status = remove_bus(State(state.clone()), Path("bus-7".to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(overview(&state, FleetFilter::All).await.totals.all, 6);

        let err = remove_bus(State(state.clone()), Path("bus-7".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_bus_flags() {
        let state = state();

        let err = set_flags(
            State(state.clone()),
            Path("bus-404".to_string()),
            Json(FlagOverride::default()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err = clear_flags(State(state), Path("bus-1".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
