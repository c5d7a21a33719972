use reqwest::StatusCode;
use thiserror::Error;

/// Failures from the location capability.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("No location source is configured")]
    Unavailable,
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

/// Everything that can go wrong during a lookup. Display strings double as
/// the user-visible status messages, so they are written for people.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Type a city name first.")]
    EmptyQuery,

    #[error("City not found")]
    NotFound,

    #[error("Geocoding failed with status {0}")]
    LookupFailed(StatusCode),

    #[error("Weather request failed with status {0}")]
    RequestFailed(StatusCode),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Parse(String),

    #[error(transparent)]
    Location(#[from] LocationError),
}
