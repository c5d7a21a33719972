//! Interactive lookup session: one long-lived controller driven by menu
//! picks, so a unit toggle can replay the last successful query.

use std::fmt;

use anyhow::Result;
use inquire::{InquireError, Select, Text};

use skycast_core::{App, UnitMode};

use crate::render;

enum MenuAction {
    Search,
    UseMyLocation,
    SwitchUnits(UnitMode),
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Search => f.write_str("Search for a city"),
            MenuAction::UseMyLocation => f.write_str("Use my location"),
            MenuAction::SwitchUnits(unit) => write!(
                f,
                "Switch to {} ({}, {})",
                unit,
                unit.temperature_suffix(),
                unit.wind_suffix()
            ),
            MenuAction::Quit => f.write_str("Quit"),
        }
    }
}

pub async fn run(mut app: App) -> Result<()> {
    loop {
        let actions = vec![
            MenuAction::Search,
            MenuAction::UseMyLocation,
            MenuAction::SwitchUnits(app.unit().toggled()),
            MenuAction::Quit,
        ];

        let action = match Select::new("What would you like to do?", actions).prompt() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        match action {
            MenuAction::Search => {
                let query = match Text::new("City:").prompt() {
                    Ok(query) => query,
                    Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                };
                app.search(&query).await;
            }
            MenuAction::UseMyLocation => app.use_my_location().await,
            MenuAction::SwitchUnits(unit) => app.change_units(unit).await,
            MenuAction::Quit => return Ok(()),
        }

        render::report(&app);
    }
}
