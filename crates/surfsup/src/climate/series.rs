//! Precipitation series keyed by observation date.
//!
//! Several stations usually report on the same day. The series keeps one
//! value per date: rows are applied in the order the store returns them and
//! the last one wins.

use log::debug;
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::collections::BTreeMap;
use time::Date;

use super::{dates::format_date, Error, Predicate};
use crate::{ClimateData, Measurement};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrecipitationSeries {
    values: BTreeMap<Date, Option<f64>>,
}

impl PrecipitationSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading, replacing any earlier reading for the same date.
    pub fn insert(&mut self, date: Date, prcp: Option<f64>) -> Option<Option<f64>> {
        self.values.insert(date, prcp)
    }

    /// `None` if the date has no row, `Some(None)` if it has a row without a reading.
    pub fn get(&self, date: &Date) -> Option<Option<f64>> {
        self.values.get(date).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a> FromIterator<&'a Measurement> for PrecipitationSeries {
    fn from_iter<T: IntoIterator<Item = &'a Measurement>>(iter: T) -> Self {
        let mut series = PrecipitationSeries::new();
        for measurement in iter {
            series.insert(measurement.date, measurement.prcp);
        }
        series
    }
}

impl Serialize for PrecipitationSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (date, prcp) in &self.values {
            map.serialize_entry(&format_date(*date), prcp)?;
        }
        map.end()
    }
}

pub async fn series(
    store: &dyn ClimateData,
    predicate: &Predicate,
) -> Result<PrecipitationSeries, Error> {
    let rows = store.measurements(&predicate.query()).await?;
    let series: PrecipitationSeries = rows.iter().collect();
    debug!(
        "precipitation series: {} rows collapsed into {} dates",
        rows.len(),
        series.len()
    );
    Ok(series)
}
