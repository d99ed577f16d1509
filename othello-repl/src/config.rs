use derive_more::{Display, Error};
use othello_rules::SessionConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// Errors that can occur when loading configuration.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("failed to read config file {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[display("failed to parse TOML: {}", source)]
    Parse { source: toml::de::Error },

    #[display("config validation error: {}", reason)]
    Validation { reason: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(source: toml::de::Error) -> Self {
        ConfigError::Parse { source }
    }
}

/// Names registered for each color when the REPL starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultPlayers {
    pub black: Option<String>,
    pub white: Option<String>,
}

/// Top-level REPL configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    pub session: SessionConfig,
    pub players: DefaultPlayers,
    /// Default log filter, used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Print the board after every accepted move.
    pub show_board: bool,
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            session: SessionConfig::default(),
            players: DefaultPlayers::default(),
            log_level: "warn".to_string(),
            show_board: true,
            prompt: "> ".to_string(),
        }
    }
}

impl ReplConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ReplConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prompt.is_empty() {
            return Err(invalid("prompt must not be empty"));
        }
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(invalid(format!(
                "log_level must be one of off, error, warn, info, debug, trace (got {:?})",
                self.log_level
            )));
        }

        let names = [&self.players.black, &self.players.white];
        if names.iter().any(|name| matches!(name, Some(n) if n.trim().is_empty())) {
            return Err(invalid("player names must not be blank"));
        }
        if let (Some(black), Some(white)) = (&self.players.black, &self.players.white) {
            if black == white {
                return Err(invalid("black and white players need different names"));
            }
        }

        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        reason: reason.into(),
    }
}
