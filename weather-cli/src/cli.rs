use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::info;
use weather_core::{Client, Config, format_url};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather from OpenWeatherMap")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and an optional default location.
    Configure,

    /// Print the request URL for a location.
    Url {
        /// Location name; falls back to the configured default.
        location: Option<String>,
    },

    /// Show current weather for a location.
    Show {
        /// Location name; falls back to the configured default.
        location: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Url { location } => {
                let cfg = Config::load()?;
                let location = cfg.resolve_location(location.as_deref())?;

                println!("{}", format_url(location, &cfg.api_key()?));
                Ok(())
            }
            Command::Show { location } => {
                let cfg = Config::load()?;
                let location = cfg.resolve_location(location.as_deref())?;
                let client = Client::new(cfg.api_key()?);

                let conditions = client
                    .current(location)
                    .await
                    .with_context(|| format!("Failed to get weather for '{location}'"))?;

                println!("{location}: {conditions}");
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeatherMap API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let mut location_prompt =
        Text::new("Default location (leave empty for none):").with_help_message("e.g. London");
    if let Some(current) = cfg.default_location.as_deref() {
        location_prompt = location_prompt.with_default(current);
    }
    let location = location_prompt.prompt().context("Failed to read default location")?;

    cfg.api_key = Some(api_key.trim().to_string()).filter(|k| !k.is_empty());
    cfg.default_location = Some(location.trim().to_string()).filter(|l| !l.is_empty());

    let path = cfg.save()?;
    info!(path = %path.display(), "configuration saved");
    println!("Configuration saved to {}", path.display());

    Ok(())
}
