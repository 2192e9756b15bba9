//! Runtime configuration for `counters`.
//!
//! [`Config`] holds every runtime option regardless of where it came from.
//! Values are layered: built-in defaults, then an optional TOML file, then
//! command-line flags and their environment variables.
//!
//! # Examples
//!
//! ```rust
//! use counters::{Config, Variant};
//!
//! let config: Config = toml::from_str("variant = \"hook\"\nfps = 30").unwrap();
//! assert_eq!(config.variant, Variant::Hook);
//! assert_eq!(config.fps, 30);
//! assert!(config.show_help);
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Cli;

/// Lowest accepted frame rate.
pub const MIN_FPS: u32 = 1;
/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 120;

/// Which counters to mount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Only the class-style counter.
    Class,
    /// Only the hook-style counter.
    Hook,
    /// Both counters, class-style first.
    #[default]
    Both,
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    // ========================================================================
    // Display Settings
    // ========================================================================
    /// Which counters to mount.
    pub variant: Variant,

    /// Whether to emit ANSI styling.
    pub color: bool,

    /// Whether to show the key help footer.
    pub show_help: bool,

    // ========================================================================
    // Terminal Settings
    // ========================================================================
    /// Whether to use the alternate screen buffer.
    pub alt_screen: bool,

    /// Whether mouse clicks can activate buttons.
    pub mouse: bool,

    /// Event loop frame rate.
    pub fps: u32,

    // ========================================================================
    // Logging
    // ========================================================================
    /// File to write logs to. No logs are written when unset.
    pub log_file: Option<PathBuf>,

    /// Log verbosity level (0=warn, 1=info, 2=debug, 3+=trace).
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::Both,
            color: true,
            show_help: true,
            alt_screen: true,
            mouse: true,
            fps: 60,
            log_file: None,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Load a config file, filling unset keys with defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Resolve the final configuration for a parsed command line.
    ///
    /// Reads `--config` when given, applies the flags on top and validates
    /// the result.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = base.with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides. Flags that were not given leave the
    /// current value alone.
    #[must_use]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(variant) = cli.variant {
            self.variant = variant;
        }
        if cli.no_alt_screen {
            self.alt_screen = false;
        }
        if cli.no_mouse {
            self.mouse = false;
        }
        if cli.no_color {
            self.color = false;
        }
        if cli.no_help {
            self.show_help = false;
        }
        if let Some(fps) = cli.fps {
            self.fps = fps;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
        if cli.verbose > 0 {
            self.verbosity = cli.verbose;
        }
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FPS..=MAX_FPS).contains(&self.fps) {
            return Err(ConfigError::InvalidFps(self.fps));
        }
        Ok(())
    }
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`].
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The frame rate is outside the accepted range.
    #[error("fps must be between {MIN_FPS} and {MAX_FPS}, got {0}")]
    InvalidFps(u32),
}
