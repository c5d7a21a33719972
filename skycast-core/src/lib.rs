//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Geocoding and forecast HTTP clients
//! - Shared domain models (places, unit modes, forecast snapshots)
//! - The pure render pipeline and the action state machine driving it
//! - Configuration handling
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod app;
pub mod codes;
pub mod config;
pub mod error;
pub mod forecast;
pub mod format;
pub mod geocode;
pub mod location;
pub mod model;
pub mod view;

pub use app::{App, Status, StatusKind};
pub use config::{Config, HomeLocation};
pub use error::{LocationError, WeatherError};
pub use forecast::ForecastClient;
pub use geocode::GeocodeClient;
pub use location::{LocationSource, StoredLocation};
pub use model::{Coordinate, ForecastSnapshot, Place, UnitMode};
pub use view::ForecastView;
