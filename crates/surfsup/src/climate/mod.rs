pub mod aggregate;
pub mod dates;
mod queries;
pub mod ranking;
pub mod series;

pub use aggregate::TemperatureAggregate;
pub use dates::{Window, RECENT_WINDOW_DAYS};
pub use queries::{Climate, StationSummary, TemperatureObservation};
pub use series::PrecipitationSeries;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde::Serialize;
use time::Date;
use utoipa::ToSchema;

use crate::{db, DateOrder, MeasurementQuery};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No observations available")]
    EmptyDataset,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Observation store unavailable: {0}")]
    StoreUnavailable(#[from] db::Error),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidDate(_) => StatusCode::BAD_REQUEST,
            Error::EmptyDataset => StatusCode::NOT_FOUND,
            Error::StoreUnavailable(e) => {
                error!("observation store failure: {}", e);
                StatusCode::SERVICE_UNAVAILABLE
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Which measurements a query looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Every station, no upper bound
    DateAtOrAfter(Date),
    /// Every station, both ends inclusive
    DateBetween { start: Date, end: Date },
    StationAndDateAtOrAfter { station: String, start: Date },
}

impl Predicate {
    pub fn query(&self) -> MeasurementQuery {
        match self {
            Predicate::DateAtOrAfter(start) => MeasurementQuery::new().start(*start),
            Predicate::DateBetween { start, end } => MeasurementQuery::new().start(*start).end(*end),
            Predicate::StationAndDateAtOrAfter { station, start } => MeasurementQuery::new()
                .station(station.clone())
                .start(*start)
                .order(DateOrder::Descending),
        }
    }
}
