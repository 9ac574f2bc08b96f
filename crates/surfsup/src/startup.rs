use crate::{
    climate, index_handler, precipitation, routes, stations, temperature_from, temperature_range,
    tobs, Climate, ClimateData, SqliteStore,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{header::ACCEPT, Method};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub remote_url: String,
    pub climate: Climate,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::climate::precipitation::precipitation,
        routes::climate::stations::stations,
        routes::climate::tobs::tobs,
        routes::climate::temperature::temperature_from,
        routes::climate::temperature::temperature_range,
    ),
    components(
        schemas(
            climate::StationSummary,
            climate::TemperatureObservation,
            climate::TemperatureAggregate,
            climate::ErrorBody,
        )
    ),
    tags(
        (name = "surfsup climate api", description = "a read-only RESTful api over Honolulu station precipitation and temperature observations")
    )
)]
struct ApiDoc;

/// Open the observation database and verify it before serving.
pub async fn open_store(database: &str, max_connections: u32) -> Result<SqliteStore, anyhow::Error> {
    let store = SqliteStore::open(database, max_connections)
        .await
        .map_err(|e| anyhow!("error opening observation database {}: {}", database, e))?;
    store
        .health_check()
        .await
        .map_err(|e| anyhow!("observation database failed health check: {}", e))?;

    Ok(store)
}

pub fn app_state(remote_url: String, store: Arc<dyn ClimateData>) -> AppState {
    AppState {
        remote_url,
        climate: Climate::new(store),
    }
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/{start}", get(temperature_from))
        .route("/api/v1.0/{start}/{end}", get(temperature_range))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let method = request.method().clone();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_default();
    info!(target: "http_request", "new request, {} {}", method.as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, {} {} code: {}, time: {}", method.as_str(), path, response.status().as_str(), response_time);

    response
}
