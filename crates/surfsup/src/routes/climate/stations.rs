use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{climate::Error, AppState, StationSummary};

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "All weather stations in storage order", content_type = "application/json", body = Vec<StationSummary>),
        (status = NOT_FOUND, description = "No stations in the dataset", body = crate::climate::ErrorBody),
        (status = SERVICE_UNAVAILABLE, description = "Observation store unreachable", body = crate::climate::ErrorBody)
    ))]
pub async fn stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StationSummary>>, Error> {
    let roster = state.climate.roster().await?;
    Ok(Json(roster))
}
