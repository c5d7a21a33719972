//! Abstraction over whatever can answer "where am I right now?".
//!
//! The CLI wires in coordinates stored by `skycast configure`; tests use
//! in-process fakes. Either way the wait is bounded so a stuck source
//! cannot hang an action.

use std::time::Duration;

use async_trait::async_trait;

use crate::{config::HomeLocation, error::LocationError, model::Coordinate};

/// How long a position request may take before it is abandoned.
pub const POSITION_WAIT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// Coordinates previously stored in the configuration file.
#[derive(Debug, Clone, Copy)]
pub struct StoredLocation {
    coordinate: Coordinate,
}

impl StoredLocation {
    pub fn new(home: HomeLocation) -> Self {
        Self {
            coordinate: Coordinate { latitude: home.latitude, longitude: home.longitude },
        }
    }
}

#[async_trait]
impl LocationSource for StoredLocation {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Ok(self.coordinate)
    }
}

/// Ask `source` for the current position, giving up after `wait`.
pub async fn resolve_position(
    source: &dyn LocationSource,
    wait: Duration,
) -> Result<Coordinate, LocationError> {
    tokio::time::timeout(wait, source.current_position())
        .await
        .map_err(|_| LocationError::Timeout)?
}
