//! Pure computation of the rendered forecast.
//!
//! Everything the terminal adapter prints is assembled here from a snapshot,
//! so the selection and formatting logic is testable without any I/O.

use crate::{
    codes, format,
    model::{ForecastSnapshot, UnitMode},
};

/// Number of entries in the hourly strip.
pub const HOURLY_WINDOW: usize = 12;
/// Number of entries in the daily strip.
pub const DAILY_WINDOW: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPanel {
    pub place: String,
    pub temperature: String,
    pub summary: String,
    pub wind: String,
    pub humidity: String,
    pub updated: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourCard {
    pub label: String,
    pub temperature: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCard {
    pub weekday: String,
    pub date: String,
    pub temperatures: String,
    pub summary: String,
}

/// The complete visible state of the widget. Rebuilt wholesale on every
/// render; nothing is ever appended to a previous view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastView {
    pub current: CurrentPanel,
    pub hourly: Vec<HourCard>,
    pub daily: Vec<DayCard>,
}

pub fn build(label: &str, snapshot: &ForecastSnapshot, unit: UnitMode) -> ForecastView {
    let current = &snapshot.current;
    let panel = CurrentPanel {
        place: label.to_string(),
        temperature: format::temperature(current.temperature_2m, unit),
        summary: codes::describe(current.weather_code).into_owned(),
        wind: format!("Wind: {}", format::wind_speed(current.wind_speed_10m, unit)),
        humidity: format!("Humidity: {}%", current.relative_humidity_2m.round()),
        updated: format!("Updated: {}", format::timestamp_label(&current.time)),
    };

    ForecastView {
        current: panel,
        hourly: hourly_cards(snapshot, unit),
        daily: daily_cards(snapshot, unit),
    }
}

/// First hourly index at or after the observation time. "Now" is anchored
/// to the snapshot's own current time, not the wall clock. Entries that do
/// not parse never match; an all-past series falls back to the start.
fn start_index(snapshot: &ForecastSnapshot) -> usize {
    let Some(now) = format::parse_timestamp(&snapshot.current.time) else {
        return 0;
    };
    snapshot
        .hourly
        .time
        .iter()
        .position(|t| format::parse_timestamp(t).is_some_and(|parsed| parsed >= now))
        .unwrap_or(0)
}

fn hourly_cards(snapshot: &ForecastSnapshot, unit: UnitMode) -> Vec<HourCard> {
    let hourly = &snapshot.hourly;
    let start = start_index(snapshot);
    let end = hourly.time.len().min(start + HOURLY_WINDOW);

    (start..end)
        .filter_map(|i| {
            let time = hourly.time.get(i)?;
            let temperature = hourly.temperature_2m.get(i)?;
            let code = hourly.weather_code.get(i)?;
            Some(HourCard {
                label: format::hour_label(time),
                temperature: format::temperature(*temperature, unit),
                summary: codes::describe(*code).into_owned(),
            })
        })
        .collect()
}

fn daily_cards(snapshot: &ForecastSnapshot, unit: UnitMode) -> Vec<DayCard> {
    let daily = &snapshot.daily;
    let end = daily.time.len().min(DAILY_WINDOW);

    (0..end)
        .filter_map(|i| {
            let date = daily.time.get(i)?;
            let max = daily.temperature_2m_max.get(i)?;
            let min = daily.temperature_2m_min.get(i)?;
            let code = daily.weather_code.get(i)?;
            Some(DayCard {
                weekday: format::day_label(date),
                date: date.clone(),
                temperatures: format!(
                    "{} / {}",
                    format::temperature(*max, unit),
                    format::temperature(*min, unit)
                ),
                summary: codes::describe(*code).into_owned(),
            })
        })
        .collect()
}
