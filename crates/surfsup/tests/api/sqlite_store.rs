use crate::helpers::{seed, seed_station, seeded_store, spawn_app, two_station_store};
use axum::http::StatusCode;
use std::sync::Arc;
use surfsup::{
    climate::{dates, ranking},
    ClimateData, DateOrder, MeasurementQuery, SqliteStore,
};
use time::macros::date;

#[tokio::test]
async fn missing_database_file_fails_to_open() {
    let result = SqliteStore::open("/nonexistent/surfsup/hawaii.sqlite", 1).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn seeded_store_passes_health_check() {
    let store = two_station_store().await;
    store.health_check().await.unwrap();
}

#[tokio::test]
async fn stations_come_back_in_storage_order() {
    let store = seeded_store(
        &[
            seed_station("USC00519397", "WAIKIKI 717.2, HI US"),
            seed_station("USC00513117", "KANEOHE 838.1, HI US"),
            seed_station("USC00514830", "KUALOA RANCH HEADQUARTERS 886.9, HI US"),
        ],
        &[],
    )
    .await;

    let stations = store.stations().await.unwrap();
    let ids: Vec<&str> = stations.iter().map(|s| s.station.as_str()).collect();
    assert_eq!(ids, vec!["USC00519397", "USC00513117", "USC00514830"]);
    assert_eq!(stations[0].latitude, Some(21.3));
}

#[tokio::test]
async fn measurement_query_filters_and_orders() {
    let store = seeded_store(
        &[seed_station("A", "A"), seed_station("B", "B")],
        &[
            seed("A", "2017-08-19", None, 71.0),
            seed("B", "2017-08-22", Some(0.1), 75.0),
            seed("A", "2017-08-23", Some(0.0), 81.0),
            seed("A", "2017-08-21", Some(0.3), 76.0),
        ],
    )
    .await;

    let rows = store
        .measurements(
            &MeasurementQuery::new()
                .station("A")
                .start(date!(2017 - 08 - 20))
                .order(DateOrder::Descending),
        )
        .await
        .unwrap();
    let dates: Vec<_> = rows.iter().map(|m| m.date).collect();
    assert_eq!(dates, vec![date!(2017 - 08 - 23), date!(2017 - 08 - 21)]);

    let rows = store
        .measurements(
            &MeasurementQuery::new()
                .start(date!(2017 - 08 - 19))
                .end(date!(2017 - 08 - 22))
                .order(DateOrder::Ascending),
        )
        .await
        .unwrap();
    let dates: Vec<_> = rows.iter().map(|m| m.date).collect();
    assert_eq!(
        dates,
        vec![
            date!(2017 - 08 - 19),
            date!(2017 - 08 - 21),
            date!(2017 - 08 - 22)
        ]
    );
    assert_eq!(rows[0].prcp, None);
}

#[tokio::test]
async fn latest_date_is_the_maximum_date() {
    let store = seeded_store(
        &[seed_station("A", "A")],
        &[
            seed("A", "2016-02-29", None, 65.0),
            seed("A", "2017-08-23", None, 81.0),
            seed("A", "2017-01-05", None, 62.0),
        ],
    )
    .await;

    let latest = dates::latest_date(&store).await.unwrap();
    assert_eq!(latest, date!(2017 - 08 - 23));
}

#[tokio::test]
async fn latest_date_on_empty_dataset_is_an_error() {
    let store = seeded_store(&[seed_station("A", "A")], &[]).await;
    let result = dates::latest_date(&store).await;
    assert!(matches!(result, Err(surfsup::climate::Error::EmptyDataset)));
}

#[tokio::test]
async fn tied_stations_resolve_to_greatest_identifier() {
    let store = two_station_store().await;
    let station = ranking::most_active_station(&store).await.unwrap();
    assert_eq!(station, "B");
}

#[tokio::test]
async fn range_aggregate_counts_duplicate_rows() {
    let test_app = spawn_app(Arc::new(two_station_store().await)).await;

    let (status, json) = test_app.get_json("/api/v1.0/2017-08-20/2017-08-21").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([{"TMIN": 60.0, "TMAX": 80.0, "TAVG": 67.5}])
    );
}

#[tokio::test]
async fn single_day_range_includes_both_ends() {
    let test_app = spawn_app(Arc::new(two_station_store().await)).await;

    let (status, json) = test_app.get_json("/api/v1.0/2017-08-20/2017-08-20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([{"TMIN": 70.0, "TMAX": 70.0, "TAVG": 70.0}])
    );
}

#[tokio::test]
async fn start_after_every_date_is_no_data() {
    let test_app = spawn_app(Arc::new(two_station_store().await)).await;

    let (status, json) = test_app.get_json("/api/v1.0/2018-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([{"TMIN": null, "TMAX": null, "TAVG": null}])
    );
}

#[tokio::test]
async fn precipitation_keeps_last_row_per_date_and_nulls() {
    let test_app = spawn_app(Arc::new(two_station_store().await)).await;

    let (status, json) = test_app.get_json("/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({"2017-08-20": 0.0, "2017-08-21": 0.56})
    );
}

#[tokio::test]
async fn precipitation_window_is_one_year_before_latest_date() {
    let store = seeded_store(
        &[seed_station("A", "A")],
        &[
            seed("A", "2016-08-22", Some(1.5), 77.0),
            seed("A", "2016-08-23", Some(0.7), 78.0),
            seed("A", "2017-08-23", None, 81.0),
        ],
    )
    .await;
    let test_app = spawn_app(Arc::new(store)).await;

    let (status, json) = test_app.get_json("/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({"2016-08-23": 0.7, "2017-08-23": null})
    );
}

#[tokio::test]
async fn tobs_lists_most_active_station_newest_first() {
    let store = seeded_store(
        &[seed_station("A", "A"), seed_station("B", "B")],
        &[
            seed("B", "2016-08-01", None, 70.0),
            seed("B", "2016-08-24", None, 77.0),
            seed("A", "2017-08-23", None, 81.0),
            seed("B", "2017-08-20", None, 79.0),
            seed("B", "2017-01-10", None, 68.0),
        ],
    )
    .await;
    let test_app = spawn_app(Arc::new(store)).await;

    let (status, json) = test_app.get_json("/api/v1.0/tobs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([
            {"date": "2017-08-20", "tobs": 79.0},
            {"date": "2017-01-10", "tobs": 68.0},
            {"date": "2016-08-24", "tobs": 77.0}
        ])
    );
}

#[tokio::test]
async fn unreadable_date_is_service_unavailable() {
    let store = seeded_store(
        &[seed_station("A", "A")],
        &[seed("A", "08/23/2017", None, 81.0)],
    )
    .await;
    let test_app = spawn_app(Arc::new(store)).await;

    let (status, _) = test_app.get_json("/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn closed_store_is_service_unavailable() {
    let store = two_station_store().await;
    let test_app = spawn_app(Arc::new(store.clone())).await;

    store.close().await;
    assert!(store.stations().await.is_err());

    let (status, _) = test_app.get_json("/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
