use log::{debug, warn};
use serde::Serialize;
use std::sync::Arc;
use time::Date;
use utoipa::ToSchema;

use super::{
    aggregate::{self, TemperatureAggregate},
    dates::{self, parse_date, serialize_date},
    ranking,
    series::{self, PrecipitationSeries},
    Error, Predicate,
};
use crate::ClimateData;

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StationSummary {
    pub station: String,
    pub name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TemperatureObservation {
    #[serde(serialize_with = "serialize_date")]
    #[schema(value_type = String, format = Date)]
    pub date: Date,
    pub tobs: f64,
}

/// Entry point for every climate query; cheap to clone and share across requests.
#[derive(Clone)]
pub struct Climate {
    store: Arc<dyn ClimateData>,
}

impl Climate {
    pub fn new(store: Arc<dyn ClimateData>) -> Self {
        Self { store }
    }

    /// Every station as (identifier, name), in storage order.
    pub async fn roster(&self) -> Result<Vec<StationSummary>, Error> {
        let stations = self.store.stations().await?;
        if stations.is_empty() {
            return Err(Error::EmptyDataset);
        }

        Ok(stations
            .into_iter()
            .map(|station| StationSummary {
                station: station.station,
                name: station.name,
            })
            .collect())
    }

    /// Precipitation for the trailing year of the dataset, keyed by date.
    pub async fn recent_precipitation(&self) -> Result<PrecipitationSeries, Error> {
        let window = match dates::recent_window(self.store.as_ref()).await {
            Ok(window) => window,
            Err(Error::EmptyDataset) => {
                warn!("no measurements stored, returning an empty precipitation series");
                return Ok(PrecipitationSeries::new());
            }
            Err(e) => return Err(e),
        };

        series::series(
            self.store.as_ref(),
            &Predicate::DateAtOrAfter(window.start),
        )
        .await
    }

    /// Temperature observations of the most active station over the trailing
    /// year, newest first.
    pub async fn recent_temperature_at_most_active_station(
        &self,
    ) -> Result<Vec<TemperatureObservation>, Error> {
        let window = dates::recent_window(self.store.as_ref()).await?;
        let station = ranking::most_active_station(self.store.as_ref()).await?;

        let predicate = Predicate::StationAndDateAtOrAfter {
            station,
            start: window.start,
        };
        let rows = self.store.measurements(&predicate.query()).await?;

        Ok(rows
            .into_iter()
            .map(|m| TemperatureObservation {
                date: m.date,
                tobs: m.tobs,
            })
            .collect())
    }

    pub async fn temperature_from(&self, start: &str) -> Result<TemperatureAggregate, Error> {
        let start = parse_request_date(start)?;
        aggregate::aggregate(self.store.as_ref(), &Predicate::DateAtOrAfter(start)).await
    }

    pub async fn temperature_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureAggregate, Error> {
        let start = parse_request_date(start)?;
        let end = parse_request_date(end)?;
        if end < start {
            return Err(Error::InvalidDate(format!(
                "end {} is before start {}",
                dates::format_date(end),
                dates::format_date(start)
            )));
        }

        aggregate::aggregate(self.store.as_ref(), &Predicate::DateBetween { start, end }).await
    }
}

fn parse_request_date(value: &str) -> Result<Date, Error> {
    parse_date(value).map_err(|e| {
        debug!("rejected date {:?}: {}", value, e);
        Error::InvalidDate(format!("{:?} is not a YYYY-MM-DD calendar date", value))
    })
}
