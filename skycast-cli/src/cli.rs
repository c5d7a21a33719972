use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{Confirm, CustomType, Select};

use skycast_core::{App, Config, HomeLocation, StatusKind, StoredLocation, UnitMode};

use crate::{render, session};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather lookup for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a place once and print its forecast.
    Show {
        /// City or place name, e.g. "Paris".
        query: String,

        /// Measurement units: "metric" or "imperial".
        #[arg(long)]
        units: Option<String>,
    },

    /// Print the forecast for the stored home location.
    Here {
        /// Measurement units: "metric" or "imperial".
        #[arg(long)]
        units: Option<String>,
    },

    /// Choose default units and optionally store a home location.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;
        tracing::debug!(
            units = %config.unit_mode(),
            has_home = config.home.is_some(),
            "configuration loaded"
        );

        match self.command {
            Some(Command::Show { query, units }) => {
                let mut app = build_app(&config, units.as_deref())?;
                app.search(&query).await;
                finish(app)
            }
            Some(Command::Here { units }) => {
                let mut app = build_app(&config, units.as_deref())?;
                app.use_my_location().await;
                finish(app)
            }
            Some(Command::Configure) => configure(config),
            None => session::run(build_app(&config, None)?).await,
        }
    }
}

fn build_app(config: &Config, units: Option<&str>) -> Result<App> {
    let unit = match units {
        Some(raw) => UnitMode::try_from(raw)?,
        None => config.unit_mode(),
    };

    let mut app = App::new(unit)?;
    if let Some(home) = config.home {
        app.set_location_source(Arc::new(StoredLocation::new(home)));
    }
    Ok(app)
}

/// One-shot commands report through the status line and exit nonzero when
/// the action ended in an error.
fn finish(app: App) -> Result<()> {
    if app.status().kind == StatusKind::Error {
        anyhow::bail!("{}", app.status().message);
    }
    render::report(&app);
    Ok(())
}

fn configure(mut config: Config) -> Result<()> {
    let units = Select::new("Default units:", vec![UnitMode::Metric, UnitMode::Imperial])
        .prompt()?;
    config.set_units(units);

    let store_home = Confirm::new("Store a home location for `skycast here`?")
        .with_default(config.home.is_some())
        .prompt()?;
    if store_home {
        let latitude = CustomType::<f64>::new("Latitude (decimal degrees):")
            .with_error_message("Enter a number like 48.8566")
            .prompt()?;
        let longitude = CustomType::<f64>::new("Longitude (decimal degrees):")
            .with_error_message("Enter a number like 2.3522")
            .prompt()?;
        config.set_home(HomeLocation { latitude, longitude });
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
