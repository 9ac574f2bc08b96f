//! Temperature aggregation over a date predicate.

use log::debug;
use serde::Serialize;
use utoipa::ToSchema;

use super::{Error, Predicate};
use crate::ClimateData;

/// Min/max/mean of temperature observations.
///
/// All three fields are `None` when no observation matched, so "no data"
/// never looks like a real reading.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, ToSchema)]
pub struct TemperatureAggregate {
    #[serde(rename = "TMIN")]
    pub min: Option<f64>,
    #[serde(rename = "TMAX")]
    pub max: Option<f64>,
    #[serde(rename = "TAVG")]
    pub avg: Option<f64>,
}

impl TemperatureAggregate {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.avg.is_none()
    }
}

/// Fold temperatures into an aggregate; the mean is the plain arithmetic mean.
pub fn summarize<I>(temperatures: I) -> TemperatureAggregate
where
    I: IntoIterator<Item = f64>,
{
    let mut count: u64 = 0;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for tobs in temperatures {
        count += 1;
        sum += tobs;
        min = min.min(tobs);
        max = max.max(tobs);
    }

    if count == 0 {
        return TemperatureAggregate::default();
    }

    TemperatureAggregate {
        min: Some(min),
        max: Some(max),
        avg: Some(sum / count as f64),
    }
}

pub async fn aggregate(
    store: &dyn ClimateData,
    predicate: &Predicate,
) -> Result<TemperatureAggregate, Error> {
    let rows = store.measurements(&predicate.query()).await?;
    let aggregate = summarize(rows.iter().map(|m| m.tobs));
    if aggregate.is_empty() {
        debug!("no temperature observations match {:?}", predicate);
    } else {
        debug!("aggregated {} temperature observations", rows.len());
    }
    Ok(aggregate)
}
