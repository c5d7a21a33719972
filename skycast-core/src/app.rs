//! The action state machine behind a lookup session.
//!
//! One [`App`] owns the two HTTP clients, the selected unit mode, the last
//! successfully rendered place, the single status slot and the request
//! sequence counter. Every user action funnels through here; failures
//! become status messages and are never propagated further.

use std::sync::Arc;

use crate::{
    error::WeatherError,
    forecast::ForecastClient,
    geocode::GeocodeClient,
    location::{self, LocationSource},
    model::{ForecastSnapshot, Place, UnitMode},
    view::{self, ForecastView},
};

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Neutral,
    Success,
    Error,
}

/// The single status slot. Replaced wholesale on every transition, never
/// accumulated or queued.
#[derive(Debug, Clone, Default)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    fn neutral(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: StatusKind::Neutral }
    }

    fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: StatusKind::Success }
    }

    fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: StatusKind::Error }
    }
}

const NO_LOCATION_SOURCE: &str =
    "Location lookup is not available.\nHint: run `skycast configure` to store a home location.";
const LOCATION_GUIDANCE: &str = "Couldn't get your location. Search for a city instead.";

pub struct App {
    geocode: GeocodeClient,
    forecast: ForecastClient,
    location: Option<Arc<dyn LocationSource>>,
    unit: UnitMode,
    status: Status,
    last: Option<Place>,
    view: Option<ForecastView>,
    seq: u64,
}

impl App {
    pub fn new(unit: UnitMode) -> Result<Self, WeatherError> {
        Ok(Self::with_clients(GeocodeClient::new()?, ForecastClient::new()?, unit))
    }

    pub fn with_clients(geocode: GeocodeClient, forecast: ForecastClient, unit: UnitMode) -> Self {
        Self {
            geocode,
            forecast,
            location: None,
            unit,
            status: Status::default(),
            last: None,
            view: None,
            seq: 0,
        }
    }

    pub fn set_location_source(&mut self, source: Arc<dyn LocationSource>) {
        self.location = Some(source);
    }

    pub fn unit(&self) -> UnitMode {
        self.unit
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn view(&self) -> Option<&ForecastView> {
        self.view.as_ref()
    }

    /// The most recent successfully rendered place, if any.
    pub fn last_place(&self) -> Option<&Place> {
        self.last.as_ref()
    }

    /// Search action: resolve a free-text query, then load its forecast.
    pub async fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.status = Status::error(WeatherError::EmptyQuery.to_string());
            return;
        }

        let ticket = self.begin_request();
        self.status = Status::neutral("Searching…");
        match self.geocode.resolve_place(query).await {
            Ok(place) => self.load(ticket, place).await,
            Err(err) => self.fail(ticket, &err.to_string()),
        }
    }

    /// Use-my-location action: ask the wired location source, then load.
    pub async fn use_my_location(&mut self) {
        let Some(source) = self.location.clone() else {
            self.status = Status::error(NO_LOCATION_SOURCE);
            return;
        };

        let ticket = self.begin_request();
        self.status = Status::neutral("Detecting your location…");
        match location::resolve_position(source.as_ref(), location::POSITION_WAIT).await {
            Ok(coordinate) => self.load(ticket, Place::my_location(coordinate)).await,
            Err(err) => {
                tracing::debug!(error = %err, "position request failed");
                self.fail(ticket, LOCATION_GUIDANCE);
            }
        }
    }

    /// Switch units and replay the last successful lookup under the new
    /// mode. With nothing to replay the choice is remembered and that's it.
    pub async fn change_units(&mut self, unit: UnitMode) {
        self.unit = unit;
        if let Some(place) = self.last.clone() {
            let ticket = self.begin_request();
            self.load(ticket, place).await;
        }
    }

    /// Shared loading stage for all actions that end in a render.
    async fn load(&mut self, ticket: u64, place: Place) {
        if !self.is_current(ticket) {
            return;
        }
        self.status = Status::neutral("Loading weather…");
        match self.forecast.fetch(place.coordinate, self.unit).await {
            Ok(snapshot) => self.apply_forecast(ticket, place, &snapshot),
            Err(err) => self.fail(ticket, &err.to_string()),
        }
    }

    /// Publish a completed lookup, unless a newer action superseded it.
    fn apply_forecast(&mut self, ticket: u64, place: Place, snapshot: &ForecastSnapshot) {
        if !self.is_current(ticket) {
            tracing::debug!(ticket, latest = self.seq, "discarding superseded forecast");
            return;
        }
        tracing::info!(place = %place.label, unit = %self.unit, "forecast rendered");
        self.view = Some(view::build(&place.label, snapshot, self.unit));
        self.status = Status::success("Done.");
        self.last = Some(place);
    }

    fn fail(&mut self, ticket: u64, message: &str) {
        if !self.is_current(ticket) {
            tracing::debug!(ticket, latest = self.seq, "discarding superseded failure");
            return;
        }
        self.status = Status::error(message);
    }

    /// Each triggered action takes the next ticket; only the holder of the
    /// highest ticket may publish its completion.
    fn begin_request(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn is_current(&self, ticket: u64) -> bool {
        ticket == self.seq
    }
}
