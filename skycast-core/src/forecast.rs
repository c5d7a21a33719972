//! Forecast retrieval from the Open-Meteo API.

use reqwest::Client;

use crate::{
    error::WeatherError,
    model::{Coordinate, ForecastSnapshot, UnitMode},
};

const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

// Fixed field lists; the renderer knows exactly this shape.
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code,relative_humidity_2m,wind_speed_10m";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

/// Client for the forecast endpoint. `timezone=auto` is always requested so
/// returned timestamps are in the location's local time and need no
/// conversion here.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_base_url(OPEN_METEO_FORECAST_URL)
    }

    /// Point the client at a different forecast endpoint (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, WeatherError> {
        let http = Client::builder().build()?;
        Ok(Self { http, base_url: base_url.into() })
    }

    /// Fetch current, hourly and daily forecast data for `coordinate`,
    /// with measurement units selected by `unit`.
    pub async fn fetch(
        &self,
        coordinate: Coordinate,
        unit: UnitMode,
    ) -> Result<ForecastSnapshot, WeatherError> {
        tracing::debug!(
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            unit = %unit,
            "fetching forecast"
        );

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", coordinate.latitude.to_string()),
                ("longitude", coordinate.longitude.to_string()),
                ("temperature_unit", unit.temperature_param().to_string()),
                ("wind_speed_unit", unit.wind_param().to_string()),
                ("timezone", "auto".to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(%status, "forecast request rejected");
            return Err(WeatherError::RequestFailed(status));
        }

        let body = res.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| WeatherError::Parse(format!("forecast response: {e}")))
    }
}
