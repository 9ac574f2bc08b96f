use crate::helpers::{spawn_app, MockClimateAccess};
use axum::http::StatusCode;
use std::sync::Arc;
use surfsup::{db::Error, Measurement, Station, StationCount};
use time::macros::date;

fn waikiki() -> Station {
    Station {
        station: String::from("USC00519397"),
        name: String::from("WAIKIKI 717.2, HI US"),
        latitude: Some(21.2716),
        longitude: Some(-157.8168),
        elevation: Some(3.0),
    }
}

/// The welcome page lists every route
#[tokio::test]
async fn welcome_page_lists_routes() {
    let test_app = spawn_app(Arc::new(MockClimateAccess::new())).await;

    let (status, body) = test_app.get("/").await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("/api/v1.0/precipitation"));
    assert!(html.contains("/api/v1.0/stations"));
    assert!(html.contains("/api/v1.0/tobs"));
    assert!(html.contains("/api/v1.0/{start}/{end}"));
}

#[tokio::test]
async fn stations_returns_id_and_name_only() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_stations()
        .times(1)
        .returning(|| Ok(vec![waikiki()]));

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, json) = test_app.get_json("/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([{"station": "USC00519397", "name": "WAIKIKI 717.2, HI US"}])
    );
}

#[tokio::test]
async fn empty_roster_is_not_found() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_stations()
        .times(1)
        .returning(|| Ok(vec![]));

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, json) = test_app.get_json("/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn store_failure_is_service_unavailable() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_stations()
        .times(1)
        .returning(|| Err(Error::Corrupt(String::from("disk gone"))));

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, json) = test_app.get_json("/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(json["error"].as_str().unwrap().contains("disk gone"));
}

/// Malformed dates are rejected before the store is touched
#[tokio::test]
async fn malformed_start_is_bad_request() {
    let test_app = spawn_app(Arc::new(MockClimateAccess::new())).await;

    let (status, json) = test_app.get_json("/api/v1.0/2017-13-40").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("2017-13-40"));

    let (status, _) = test_app.get_json("/api/v1.0/2017-13-40/2017-08-23").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = test_app.get_json("/api/v1.0/2017-08-01/not-a-date").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Signed years are not YYYY-MM-DD even though they name a real date
#[tokio::test]
async fn signed_year_is_bad_request() {
    let test_app = spawn_app(Arc::new(MockClimateAccess::new())).await;

    let (status, json) = test_app.get_json("/api/v1.0/+2017-08-23").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("+2017-08-23"));

    let (status, _) = test_app.get_json("/api/v1.0/-2017-08-23").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = test_app.get_json("/api/v1.0/2017-08-01/+2017-08-23").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn inverted_range_is_bad_request() {
    let test_app = spawn_app(Arc::new(MockClimateAccess::new())).await;

    let (status, json) = test_app.get_json("/api/v1.0/2017-08-23/2017-08-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("before start"));
}

#[tokio::test]
async fn start_query_is_open_ended() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_measurements()
        .withf(|query| query.start == Some(date!(2017 - 08 - 01)) && query.end.is_none())
        .times(1)
        .returning(|_| {
            Ok(vec![Measurement {
                station: String::from("USC00519397"),
                date: date!(2017 - 08 - 23),
                prcp: Some(0.0),
                tobs: 81.0,
            }])
        });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, json) = test_app.get_json("/api/v1.0/2017-08-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([{"TMIN": 81.0, "TMAX": 81.0, "TAVG": 81.0}])
    );
}

#[tokio::test]
async fn tobs_without_measurements_is_not_found() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_measurements()
        .times(1)
        .returning(|_| Ok(vec![]));
    climate_data.expect_station_counts().times(0);

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, _) = test_app.get_json("/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn tobs_ranks_with_grouped_counts() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_measurements()
        .withf(|query| query.limit == Some(1))
        .times(1)
        .returning(|_| {
            Ok(vec![Measurement {
                station: String::from("USC00519397"),
                date: date!(2017 - 08 - 23),
                prcp: None,
                tobs: 81.0,
            }])
        });
    climate_data.expect_station_counts().times(1).returning(|| {
        Ok(vec![
            StationCount {
                station: String::from("USC00519397"),
                count: 2724,
            },
            StationCount {
                station: String::from("USC00519281"),
                count: 2772,
            },
        ])
    });
    climate_data
        .expect_measurements()
        .withf(|query| query.station.as_deref() == Some("USC00519281"))
        .times(1)
        .returning(|_| {
            Ok(vec![Measurement {
                station: String::from("USC00519281"),
                date: date!(2017 - 08 - 18),
                prcp: Some(0.06),
                tobs: 79.0,
            }])
        });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, json) = test_app.get_json("/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([{"date": "2017-08-18", "tobs": 79.0}]));
}
