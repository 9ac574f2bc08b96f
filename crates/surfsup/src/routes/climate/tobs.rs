use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{climate::Error, AppState, TemperatureObservation};

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observations at the most active station for the year ending at the newest observation, newest first", content_type = "application/json", body = Vec<TemperatureObservation>),
        (status = NOT_FOUND, description = "No measurements in the dataset", body = crate::climate::ErrorBody),
        (status = SERVICE_UNAVAILABLE, description = "Observation store unreachable", body = crate::climate::ErrorBody)
    ))]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureObservation>>, Error> {
    let observations = state
        .climate
        .recent_temperature_at_most_active_station()
        .await?;
    Ok(Json(observations))
}
