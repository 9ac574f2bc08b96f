pub mod climate;
pub mod db;
pub mod routes;
pub mod startup;
pub mod templates;
mod utils;

pub use climate::{
    Climate, PrecipitationSeries, StationSummary, TemperatureAggregate, TemperatureObservation,
};
pub use db::{
    ClimateData, DateOrder, Measurement, MeasurementQuery, SqliteStore, Station, StationCount,
};
pub use routes::{
    index_handler, precipitation, stations, temperature_from, temperature_range, tobs,
};
pub use startup::*;
pub use utils::*;
