use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{climate::Error, AppState, PrecipitationSeries};

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Precipitation for the year ending at the newest observation, keyed by YYYY-MM-DD; null when not recorded", content_type = "application/json", body = std::collections::BTreeMap<String, f64>),
        (status = SERVICE_UNAVAILABLE, description = "Observation store unreachable", body = crate::climate::ErrorBody)
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PrecipitationSeries>, Error> {
    let series = state.climate.recent_precipitation().await?;
    Ok(Json(series))
}
