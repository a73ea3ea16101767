//! Command line interface configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use campaign_pragmatic::core::prelude::{Environment, InfoLogger};
use campaign_pragmatic::format::dashboard::DEFAULT_MAX_VISIBLE;
use campaign_pragmatic::parse_utc_offset;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;
use time::UtcOffset;

/// A command line interface configuration. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies how times are displayed.
    pub display: Option<DisplayConfig>,
    /// Specifies dashboard action list.
    pub dashboard: Option<DashboardConfig>,
    /// Specifies whether days are grouped in parallel. Default is true.
    pub parallelism: Option<bool>,
}

/// A display configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    /// A display offset in `+HH:MM` form. Default is UTC.
    pub utc_offset: Option<String>,
}

/// A dashboard configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Max amount of visible actions, zero shows all of them. Default is 4.
    pub max_visible: Option<usize>,
}

impl Config {
    /// Returns display offset.
    pub fn get_utc_offset(&self) -> Result<UtcOffset, String> {
        self.display
            .as_ref()
            .and_then(|display| display.utc_offset.as_deref())
            .map_or(Ok(UtcOffset::UTC), |offset| parse_utc_offset(offset).map_err(|err| err.to_string()))
    }

    /// Returns max amount of visible dashboard actions.
    pub fn get_max_visible(&self) -> usize {
        self.dashboard.as_ref().and_then(|dashboard| dashboard.max_visible).unwrap_or(DEFAULT_MAX_VISIBLE)
    }

    /// Creates an environment which uses given logger. Nothing is logged when logger is not set.
    pub fn create_environment(&self, logger: Option<InfoLogger>) -> Environment {
        let logger = logger.unwrap_or_else(|| Arc::new(|_: &str| {}));

        Environment::new(logger, self.parallelism.unwrap_or(true))
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}
