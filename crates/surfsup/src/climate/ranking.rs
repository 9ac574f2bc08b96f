//! Station activity ranking.
//!
//! The most active station is the one with the most measurement rows. When
//! several stations share the highest count, the lexicographically greatest
//! station identifier wins.

use log::debug;

use super::Error;
use crate::{ClimateData, StationCount};

/// Pick the busiest station from grouped row counts.
pub fn pick_most_active(counts: &[StationCount]) -> Option<&StationCount> {
    counts.iter().max_by(|a, b| {
        a.count
            .cmp(&b.count)
            .then_with(|| a.station.cmp(&b.station))
    })
}

pub async fn most_active_station(store: &dyn ClimateData) -> Result<String, Error> {
    let counts = store.station_counts().await?;
    let busiest = pick_most_active(&counts).ok_or(Error::EmptyDataset)?;
    debug!(
        "most active station: {} ({} observations across {} stations)",
        busiest.station,
        busiest.count,
        counts.len()
    );
    Ok(busiest.station.clone())
}
