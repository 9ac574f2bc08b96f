use async_trait::async_trait;
use log::{info, trace};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow},
    QueryBuilder, Row, Sqlite,
};
use std::time::Duration;

use super::{ClimateData, DateOrder, Error, Measurement, MeasurementQuery, Station, StationCount};
use crate::climate::dates::{format_date, parse_date};

/// Observation store backed by the pre-populated SQLite dataset.
///
/// The database is opened read-only; every call borrows a pooled connection
/// for the duration of a single statement.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn open(path: &str, max_connections: u32) -> Result<Self, Error> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(false)
            .read_only(true)
            .pragma("busy_timeout", "5000")
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "MEMORY");

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        info!("SQLite observation store opened at: {}", path);
        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Check database connectivity and integrity.
    pub async fn health_check(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;

        let result: String = sqlx::query_scalar("PRAGMA quick_check;")
            .fetch_one(&self.pool)
            .await?;
        if result != "ok" {
            return Err(Error::Corrupt(format!("integrity check failed: {}", result)));
        }

        Ok(())
    }

    /// Wait for in-flight queries and release every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("SQLite observation store closed");
    }
}

fn build_measurement_query(query: &MeasurementQuery) -> QueryBuilder<'_, Sqlite> {
    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT station, date, prcp, tobs FROM measurement WHERE 1 = 1");

    if let Some(station) = &query.station {
        builder.push(" AND station = ").push_bind(station.as_str());
    }
    // ISO dates compare correctly as text
    if let Some(start) = query.start {
        builder.push(" AND date >= ").push_bind(format_date(start));
    }
    if let Some(end) = query.end {
        builder.push(" AND date <= ").push_bind(format_date(end));
    }

    builder.push(match query.order {
        DateOrder::Storage => " ORDER BY rowid ASC",
        DateOrder::Ascending => " ORDER BY date ASC, rowid ASC",
        DateOrder::Descending => " ORDER BY date DESC, rowid DESC",
    });

    if let Some(limit) = query.limit {
        builder.push(" LIMIT ").push_bind(i64::from(limit));
    }

    builder
}

fn measurement_from_row(row: &SqliteRow) -> Result<Measurement, Error> {
    let date_text: String = row.try_get("date")?;
    let date = parse_date(&date_text)
        .map_err(|e| Error::Corrupt(format!("measurement date {:?}: {}", date_text, e)))?;

    Ok(Measurement {
        station: row.try_get("station")?,
        date,
        prcp: row.try_get("prcp")?,
        tobs: row.try_get("tobs")?,
    })
}

#[async_trait]
impl ClimateData for SqliteStore {
    async fn stations(&self) -> Result<Vec<Station>, Error> {
        let rows = sqlx::query(
            "SELECT station, name, latitude, longitude, elevation FROM station ORDER BY rowid ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let stations = rows
            .iter()
            .map(|row| -> Result<Station, Error> {
                Ok(Station {
                    station: row.try_get("station")?,
                    name: row.try_get("name")?,
                    latitude: row.try_get("latitude")?,
                    longitude: row.try_get("longitude")?,
                    elevation: row.try_get("elevation")?,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        trace!("loaded {} stations", stations.len());
        Ok(stations)
    }

    async fn measurements(&self, query: &MeasurementQuery) -> Result<Vec<Measurement>, Error> {
        let mut builder = build_measurement_query(query);
        trace!("measurement query: {}", builder.sql());

        let rows = builder.build().fetch_all(&self.pool).await?;
        let measurements = rows
            .iter()
            .map(measurement_from_row)
            .collect::<Result<Vec<_>, Error>>()?;

        trace!("loaded {} measurements", measurements.len());
        Ok(measurements)
    }

    async fn station_counts(&self) -> Result<Vec<StationCount>, Error> {
        let rows = sqlx::query(
            "SELECT station, COUNT(*) AS count FROM measurement GROUP BY station",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<StationCount, Error> {
                Ok(StationCount {
                    station: row.try_get("station")?,
                    count: row.try_get("count")?,
                })
            })
            .collect()
    }
}
