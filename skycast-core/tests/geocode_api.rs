//! Geocoding client behavior against a mock HTTP server.

use skycast_core::{GeocodeClient, WeatherError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeocodeClient {
    GeocodeClient::with_base_url(format!("{}/search", server.uri()))
        .expect("client must build")
}

#[tokio::test]
async fn first_candidate_wins() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "1"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "lat": "48.8566",
                "lon": "2.3522",
                "display_name": "Paris, Île-de-France, France"
            },
            {
                "lat": "33.6609",
                "lon": "-95.5555",
                "display_name": "Paris, Lamar County, Texas, United States"
            }
        ])))
        .mount(&server)
        .await;

    let place = client_for(&server).resolve_place("Paris").await.unwrap();

    assert_eq!(place.label, "Paris, Île-de-France, France");
    assert!((place.coordinate.latitude - 48.8566).abs() < 1e-9);
    assert!((place.coordinate.longitude - 2.3522).abs() < 1e-9);
}

#[tokio::test]
async fn multi_word_queries_survive_url_encoding() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "lat": "40.7128", "lon": "-74.0060", "display_name": "New York, United States" }
        ])))
        .mount(&server)
        .await;

    let place = client_for(&server).resolve_place("New York").await.unwrap();
    assert_eq!(place.label, "New York, United States");
}

#[tokio::test]
async fn zero_candidates_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let err = client_for(&server).resolve_place("Nowhereville").await.unwrap_err();
    assert!(matches!(err, WeatherError::NotFound));
}

#[tokio::test]
async fn non_success_status_is_lookup_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).resolve_place("Paris").await.unwrap_err();
    assert!(matches!(err, WeatherError::LookupFailed(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn unparseable_coordinates_are_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "lat": "north-ish", "lon": "2.3522", "display_name": "Paris" }
        ])))
        .mount(&server)
        .await;

    let err = client_for(&server).resolve_place("Paris").await.unwrap_err();
    assert!(matches!(err, WeatherError::Parse(_)));
    assert!(err.to_string().contains("latitude"));
}
