mod sqlite;

pub use sqlite::*;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::ToSchema;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Stored data is malformed: {0}")]
    Corrupt(String),
}

/// Observation Store: read-only access to stations and their daily measurements.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClimateData: Send + Sync {
    /// All stations, in storage order
    async fn stations(&self) -> Result<Vec<Station>, Error>;
    async fn measurements(&self, query: &MeasurementQuery) -> Result<Vec<Measurement>, Error>;
    /// Measurement row counts grouped by station
    async fn station_counts(&self) -> Result<Vec<StationCount>, Error>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Station {
    pub station: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub station: String,
    pub date: Date,
    /// `None` means not recorded, which is different from zero
    pub prcp: Option<f64>,
    pub tobs: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCount {
    pub station: String,
    pub count: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateOrder {
    /// Order rows were loaded into the dataset
    #[default]
    Storage,
    Ascending,
    Descending,
}

/// Filter over measurements, every bound is inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementQuery {
    pub station: Option<String>,
    pub start: Option<Date>,
    pub end: Option<Date>,
    pub order: DateOrder,
    pub limit: Option<u32>,
}

impl MeasurementQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn station(mut self, station: impl Into<String>) -> Self {
        self.station = Some(station.into());
        self
    }

    pub fn start(mut self, start: Date) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: Date) -> Self {
        self.end = Some(end);
        self
    }

    pub fn order(mut self, order: DateOrder) -> Self {
        self.order = order;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

}
