use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use chrono::{Local, Timelike};
use clap::{ArgAction, Parser};
use tracing::info;
use weather_core::{Config, Units, WeatherRequest, provider_from_config};

use crate::{ansi::RESET, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Weather CLI - Display weather information in a terminal"
)]
pub struct Cli {
    /// Location (city name, ZIP code, coordinates).
    pub location: String,

    /// Display temperature in Celsius and wind in kph.
    #[arg(short, long)]
    pub celsius: bool,

    /// `KEY=VALUE` file holding WEATHER_API_KEY; defaults to ./.env.
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// More log output on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn units(&self, config: &Config) -> Units {
        if self.celsius || config.celsius { Units::Metric } else { Units::Imperial }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        if let Some(path) = &self.env_file {
            config.env_file = path.clone();
        }
        let units = self.units(&config);

        let provider = provider_from_config(&config)?;

        let now = Local::now();
        let request = WeatherRequest { location: self.location, date: now.date_naive() };
        info!(location = %request.location, date = %request.date, ?units, "fetching weather");

        let snapshot = provider.get_snapshot(&request).await?;

        let mut out = io::stdout().lock();
        for line in render::render(&snapshot, units, now.hour()) {
            writeln!(out, "{line}{RESET}").context("Failed to write report to stdout")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn location_is_required() {
        assert!(Cli::try_parse_from(["weather"]).is_err());
    }

    #[test]
    fn parses_location_and_flags() {
        let cli = Cli::try_parse_from(["weather", "New York", "-c", "--env-file", "/tmp/x.env", "-vv"])
            .expect("arguments must parse");

        assert_eq!(cli.location, "New York");
        assert!(cli.celsius);
        assert_eq!(cli.env_file, Some(PathBuf::from("/tmp/x.env")));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.units(&Config::default()), Units::Metric);
    }

    #[test]
    fn imperial_unless_flag_or_config_says_otherwise() {
        let cli = Cli::try_parse_from(["weather", "90210"]).expect("arguments must parse");
        assert_eq!(cli.units(&Config::default()), Units::Imperial);

        let metric_config = Config { celsius: true, ..Config::default() };
        assert_eq!(cli.units(&metric_config), Units::Metric);
    }

    #[test]
    fn help_is_reported_as_display_help() {
        let err = Cli::try_parse_from(["weather", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
