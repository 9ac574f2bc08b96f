use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{climate::Error, AppState, TemperatureAggregate};

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "First date to include, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "Single-element list with TMIN, TMAX and TAVG; all null when nothing matched", content_type = "application/json", body = Vec<TemperatureAggregate>),
        (status = BAD_REQUEST, description = "Start is not a valid calendar date", body = crate::climate::ErrorBody),
        (status = SERVICE_UNAVAILABLE, description = "Observation store unreachable", body = crate::climate::ErrorBody)
    ))]
pub async fn temperature_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureAggregate>>, Error> {
    let aggregate = state.climate.temperature_from(&start).await?;
    Ok(Json(vec![aggregate]))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "First date to include, YYYY-MM-DD"),
        ("end" = String, Path, description = "Last date to include, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "Single-element list with TMIN, TMAX and TAVG; all null when nothing matched", content_type = "application/json", body = Vec<TemperatureAggregate>),
        (status = BAD_REQUEST, description = "Malformed date or end before start", body = crate::climate::ErrorBody),
        (status = SERVICE_UNAVAILABLE, description = "Observation store unreachable", body = crate::climate::ErrorBody)
    ))]
pub async fn temperature_range(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureAggregate>>, Error> {
    let aggregate = state.climate.temperature_range(&start, &end).await?;
    Ok(Json(vec![aggregate]))
}
