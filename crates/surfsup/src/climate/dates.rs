//! Date window resolution.
//!
//! Windows are anchored on the newest observation in the dataset, never on
//! the wall clock, so the same dataset always yields the same answers.

use log::debug;
use serde::Serializer;
use time::{macros::format_description, Date, Duration};

use super::Error;
use crate::{ClimateData, DateOrder, MeasurementQuery};

/// Length of the trailing window used by the "recent" queries
pub const RECENT_WINDOW_DAYS: i64 = 365;

/// Inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: Date,
    pub end: Date,
}

/// `[date - days, date]`, computed on the calendar so leap days count as days.
pub fn window_ending_at(date: Date, days: i64) -> Window {
    Window {
        start: date.saturating_sub(Duration::days(days)),
        end: date,
    }
}

/// Newest observation date present in the store.
pub async fn latest_date(store: &dyn ClimateData) -> Result<Date, Error> {
    let newest = store
        .measurements(
            &MeasurementQuery::new()
                .order(DateOrder::Descending)
                .limit(1),
        )
        .await?;

    let date = newest.first().map(|m| m.date).ok_or(Error::EmptyDataset)?;
    debug!("latest observation date: {}", format_date(date));
    Ok(date)
}

/// Trailing [`RECENT_WINDOW_DAYS`] window ending at the newest observation.
pub async fn recent_window(store: &dyn ClimateData) -> Result<Window, Error> {
    let latest = latest_date(store).await?;
    let window = window_ending_at(latest, RECENT_WINDOW_DAYS);
    debug!(
        "recent window: {} to {}",
        format_date(window.start),
        format_date(window.end)
    );
    Ok(window)
}

#[derive(thiserror::Error, Debug)]
pub enum DateError {
    #[error("expected exactly YYYY-MM-DD")]
    Shape,
    #[error("{0}")]
    Parse(#[from] time::error::Parse),
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// `[year]` on its own accepts a leading sign, so the digit layout is
/// checked before handing the text to `time`.
pub fn parse_date(value: &str) -> Result<Date, DateError> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(DateError::Shape);
    }

    Ok(Date::parse(value, format_description!("[year]-[month]-[day]"))?)
}

pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

pub fn serialize_date<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_date(*date))
}
