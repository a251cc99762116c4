//! Configuration file loading for the arena.
//!
//! Engine defaults can be set once in `checkers-arena.toml` and
//! overridden per run with command line flags.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Default engine tunables, each overridable from the command line.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct EngineDefaults {
    /// Minimax search depth.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// MCTS iterations per decision.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// MCTS exploitation weight.
    #[serde(default = "default_exploitation")]
    pub exploitation: f64,
    /// Safe-piece evaluation weight.
    #[serde(default = "default_safe_weight")]
    pub safe_weight: f32,
    /// Plies per game before the arena declares a draw.
    #[serde(default = "default_max_moves")]
    pub max_moves: u32,
}

fn default_depth() -> u32 {
    3
}

fn default_iterations() -> u32 {
    15
}

fn default_exploitation() -> f64 {
    1.0
}

fn default_safe_weight() -> f32 {
    1.0
}

fn default_max_moves() -> u32 {
    200
}

impl Default for EngineDefaults {
    fn default() -> Self {
        EngineDefaults {
            depth: default_depth(),
            iterations: default_iterations(),
            exploitation: default_exploitation(),
            safe_weight: default_safe_weight(),
            max_moves: default_max_moves(),
        }
    }
}

/// Main arena configuration structure.
///
/// Loaded from `checkers-arena.toml` in the current directory; a missing
/// file yields the defaults.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ArenaConfig {
    /// Engine tunable defaults.
    #[serde(default)]
    pub engine: EngineDefaults,
}

impl ArenaConfig {
    /// Loads the arena configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot
    /// be read, or [`ConfigError::ParseError`] on invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("checkers-arena.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: ArenaConfig = toml::from_str("").unwrap();
        assert_eq!(config.engine.depth, 3);
        assert_eq!(config.engine.iterations, 15);
        assert_eq!(config.engine.max_moves, 200);
    }

    #[test]
    fn partial_engine_table_is_filled_in() {
        let config: ArenaConfig = toml::from_str(
            r#"
            [engine]
            depth = 5
            exploitation = 0.4
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.depth, 5);
        assert!((config.engine.exploitation - 0.4).abs() < 1e-9);
        assert_eq!(config.engine.iterations, 15);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let result: Result<ArenaConfig, _> = toml::from_str("[engine\ndepth = 5");
        assert!(result.is_err());
    }
}
