use crate::error::{FantasyError, Result};
use serde::Deserialize;

pub const DEFAULT_SEASON_ID: &str = "2015";
pub const DEFAULT_BASE_URL: &str = "http://games.espn.go.com/ffl";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which league to look at and where to find it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub league_id: String,
    #[serde(default = "default_season_id")]
    pub season_id: String,
    /// Everything before the endpoint path. Point this elsewhere to serve fixtures.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_season_id() -> String {
    DEFAULT_SEASON_ID.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    pub fn new(league_id: &str) -> Result<Self> {
        Config {
            league_id: league_id.to_string(),
            season_id: default_season_id(),
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
        .validated()
    }

    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FantasyError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| FantasyError::Config(format!("Failed to parse config: {}", e)))?;
        config.validated()
    }

    /// FANTASY_LEAGUE_ID is required, the rest fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        let league_id = std::env::var("FANTASY_LEAGUE_ID")
            .map_err(|_| FantasyError::Config("FANTASY_LEAGUE_ID is not set".to_string()))?;
        let timeout_secs = match std::env::var("FANTASY_TIMEOUT_SECS") {
            Ok(secs) => secs.parse::<u64>().map_err(|_| {
                FantasyError::Config("FANTASY_TIMEOUT_SECS must be a number of seconds".to_string())
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Config {
            league_id,
            season_id: std::env::var("FANTASY_SEASON_ID").unwrap_or_else(|_| default_season_id()),
            base_url: std::env::var("FANTASY_BASE_URL").unwrap_or_else(|_| default_base_url()),
            timeout_secs,
        }
        .validated()
    }

    fn validated(mut self) -> Result<Self> {
        if self.league_id.trim().is_empty() {
            return Err(FantasyError::Config("league_id is required".to_string()));
        }
        if self.season_id.trim().is_empty() {
            self.season_id = default_season_id();
        }
        // Urls are built as base + "/" + path
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        Ok(self)
    }
}
