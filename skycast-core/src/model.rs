use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees. No normalization is applied;
/// values are passed through to the forecast API as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Label used for places resolved from a location source rather than a
/// free-text search.
pub const MY_LOCATION_LABEL: &str = "My location";

/// A resolved location: coordinates plus the label shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub coordinate: Coordinate,
    pub label: String,
}

impl Place {
    pub fn new(coordinate: Coordinate, label: impl Into<String>) -> Self {
        Self { coordinate, label: label.into() }
    }

    pub fn my_location(coordinate: Coordinate) -> Self {
        Self::new(coordinate, MY_LOCATION_LABEL)
    }
}

/// Measurement convention. One toggle governs both the temperature unit
/// (°C/°F) and the wind-speed unit (km/h/mph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitMode {
    #[default]
    Metric,
    Imperial,
}

impl UnitMode {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitMode::Metric => "metric",
            UnitMode::Imperial => "imperial",
        }
    }

    /// Value of the forecast API's `temperature_unit` parameter.
    pub fn temperature_param(self) -> &'static str {
        match self {
            UnitMode::Metric => "celsius",
            UnitMode::Imperial => "fahrenheit",
        }
    }

    /// Value of the forecast API's `wind_speed_unit` parameter.
    pub fn wind_param(self) -> &'static str {
        match self {
            UnitMode::Metric => "kmh",
            UnitMode::Imperial => "mph",
        }
    }

    pub fn temperature_suffix(self) -> &'static str {
        match self {
            UnitMode::Metric => "°C",
            UnitMode::Imperial => "°F",
        }
    }

    pub fn wind_suffix(self) -> &'static str {
        match self {
            UnitMode::Metric => "km/h",
            UnitMode::Imperial => "mph",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            UnitMode::Metric => UnitMode::Imperial,
            UnitMode::Imperial => UnitMode::Metric,
        }
    }
}

impl std::fmt::Display for UnitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitMode {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "metric" => Ok(UnitMode::Metric),
            "imperial" => Ok(UnitMode::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown unit mode '{value}'. Supported modes: metric, imperial."
            )),
        }
    }
}

/// One forecast API response. The structure is the provider's own; field
/// names are kept so the sections stay recognizably opaque.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSnapshot {
    pub current: CurrentConditions,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

/// The single timestamped observation in a snapshot. `time` is already in
/// the location's local time.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub time: String,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub weather_code: i32,
    pub wind_speed_10m: f64,
}

/// Parallel hourly sequences; index `i` in one corresponds to index `i` in
/// the siblings.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub weather_code: Vec<i32>,
}

/// Parallel daily sequences, same positional correspondence as hourly.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weather_code: Vec<i32>,
}
