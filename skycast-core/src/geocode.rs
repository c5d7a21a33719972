//! Forward geocoding: resolve a free-text place query to coordinates and a
//! display label via Nominatim (OpenStreetMap).

use reqwest::{Client, header};
use serde::Deserialize;

use crate::{
    error::WeatherError,
    model::{Coordinate, Place},
};

const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

// Nominatim's usage policy requires an identifying User-Agent.
const USER_AGENT: &str = concat!("skycast/", env!("CARGO_PKG_VERSION"));

/// Client for the geocoding search endpoint. At most one candidate is
/// requested; the first result wins unconditionally.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    lat: String,
    lon: String,
    display_name: String,
}

impl GeocodeClient {
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_base_url(NOMINATIM_SEARCH_URL)
    }

    /// Point the client at a different search endpoint (tests, self-hosted
    /// mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, WeatherError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url: base_url.into() })
    }

    /// Resolve `query` to its best-match place.
    ///
    /// The caller is expected to have trimmed the query and rejected empty
    /// input already.
    pub async fn resolve_place(&self, query: &str) -> Result<Place, WeatherError> {
        tracing::debug!(%query, "resolving place");

        let res = self
            .http
            .get(&self.base_url)
            .header(header::ACCEPT, "application/json")
            .query(&[("format", "json"), ("limit", "1"), ("q", query)])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(%status, "geocoding request rejected");
            return Err(WeatherError::LookupFailed(status));
        }

        let body = res.text().await?;
        let mut candidates: Vec<Candidate> = serde_json::from_str(&body)
            .map_err(|e| WeatherError::Parse(format!("geocoding response: {e}")))?;

        if candidates.is_empty() {
            return Err(WeatherError::NotFound);
        }
        let first = candidates.remove(0);

        let latitude = parse_degrees("latitude", &first.lat)?;
        let longitude = parse_degrees("longitude", &first.lon)?;

        tracing::debug!(latitude, longitude, label = %first.display_name, "place resolved");
        Ok(Place::new(Coordinate { latitude, longitude }, first.display_name))
    }
}

// Nominatim serializes coordinates as decimal strings.
fn parse_degrees(field: &str, raw: &str) -> Result<f64, WeatherError> {
    raw.parse()
        .map_err(|_| WeatherError::Parse(format!("{field} '{raw}' is not a number")))
}
