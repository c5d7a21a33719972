//! End-to-end action flows against mock geocoding and forecast endpoints.

use skycast_core::{App, ForecastClient, GeocodeClient, StatusKind, UnitMode};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(server: &MockServer, unit: UnitMode) -> App {
    App::with_clients(
        GeocodeClient::with_base_url(format!("{}/search", server.uri()))
            .expect("geocode client must build"),
        ForecastClient::with_base_url(format!("{}/v1/forecast", server.uri()))
            .expect("forecast client must build"),
        unit,
    )
}

fn paris_candidates() -> serde_json::Value {
    serde_json::json!([
        {
            "lat": "48.8566",
            "lon": "2.3522",
            "display_name": "Paris, Île-de-France, France"
        }
    ])
}

/// 24 hours of data with the observation anchored at noon, plus 8 days:
/// enough to fill both strips completely.
fn forecast_body(temperature: f64) -> serde_json::Value {
    let times: Vec<String> = (0..24).map(|h| format!("2026-03-01T{h:02}:00")).collect();
    let days: Vec<String> = (1..=8).map(|d| format!("2026-03-{d:02}")).collect();
    serde_json::json!({
        "current": {
            "time": "2026-03-01T12:00",
            "temperature_2m": temperature,
            "relative_humidity_2m": 47.0,
            "weather_code": 2,
            "wind_speed_10m": 12.4
        },
        "hourly": {
            "time": times,
            "temperature_2m": vec![temperature; 24],
            "weather_code": vec![2; 24],
            "relative_humidity_2m": vec![50.0; 24],
            "wind_speed_10m": vec![10.0; 24]
        },
        "daily": {
            "time": days,
            "weather_code": vec![3; 8],
            "temperature_2m_max": vec![21.0; 8],
            "temperature_2m_min": vec![11.5; 8]
        }
    })
}

#[tokio::test]
async fn searching_a_city_renders_place_and_full_strips() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_candidates()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("temperature_unit", "celsius"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(18.6)))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server, UnitMode::Metric);
    app.search("Paris").await;

    assert_eq!(app.status().kind, StatusKind::Success);
    assert_eq!(app.status().message, "Done.");

    let view = app.view().expect("a successful search must render");
    assert_eq!(view.current.place, "Paris, Île-de-France, France");
    assert_eq!(view.current.temperature, "19°C");
    assert_eq!(view.hourly.len(), 12);
    assert_eq!(view.hourly[0].label, "12:00");
    assert_eq!(view.daily.len(), 7);

    assert_eq!(app.last_place().unwrap().label, "Paris, Île-de-France, France");
}

#[tokio::test]
async fn unit_toggle_replays_last_query_without_a_second_geocoding_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_candidates()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("temperature_unit", "celsius"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(18.6)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("temperature_unit", "fahrenheit"))
        .and(query_param("wind_speed_unit", "mph"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(65.5)))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server, UnitMode::Metric);
    app.search("Paris").await;
    assert_eq!(app.view().unwrap().current.temperature, "19°C");

    app.change_units(UnitMode::Imperial).await;

    assert_eq!(app.status().kind, StatusKind::Success);
    let view = app.view().unwrap();
    assert_eq!(view.current.temperature, "66°F");
    assert_eq!(view.current.place, "Paris, Île-de-France, France");
    assert_eq!(app.unit(), UnitMode::Imperial);
}

#[tokio::test]
async fn failed_refresh_keeps_last_query_and_previous_view() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_candidates()))
        .mount(&server)
        .await;
    // Only the metric fetch is mocked; the imperial replay falls through to
    // the mock server's 404.
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("temperature_unit", "celsius"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(18.6)))
        .mount(&server)
        .await;

    let mut app = app_for(&server, UnitMode::Metric);
    app.search("Paris").await;
    assert_eq!(app.status().kind, StatusKind::Success);

    app.change_units(UnitMode::Imperial).await;

    assert_eq!(app.status().kind, StatusKind::Error);
    assert!(app.status().message.starts_with("Weather request failed"));
    assert_eq!(app.last_place().unwrap().label, "Paris, Île-de-France, France");
    assert_eq!(app.view().unwrap().current.temperature, "19°C");
}

#[tokio::test]
async fn geocoding_miss_reports_not_found_and_fetches_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(18.6)))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server, UnitMode::Metric);
    app.search("Atlantis").await;

    assert_eq!(app.status().kind, StatusKind::Error);
    assert_eq!(app.status().message, "City not found");
    assert!(app.last_place().is_none());
}

#[tokio::test]
async fn blank_query_never_reaches_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server, UnitMode::Metric);
    app.search("   ").await;

    assert_eq!(app.status().kind, StatusKind::Error);
    assert_eq!(app.status().message, "Type a city name first.");
}
