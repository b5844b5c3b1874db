//! Configuration loading for fibseq.
//!
//! Settings live in `~/.fibseq/config.toml`. The file is optional and every
//! section in it is optional; the accessors on [`FibConfig`] fill in defaults
//! that reproduce the standard ten-term run.
//!
//! ```toml
//! [sequence]
//! terms = 10
//! previous = 0
//! current = 1
//!
//! [log]
//! filter = "warn"
//! ```

use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use toml::de;

use fibseq_types::Seed;

/// Number of terms printed when the config does not say otherwise.
pub const DEFAULT_TERMS: u64 = 10;

/// Log filter directive used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FibConfig {
    pub sequence: Option<SequenceConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SequenceConfig {
    /// How many values the driver prints.
    pub terms: Option<u64>,
    /// `previous` and `current` keys; either may be omitted.
    #[serde(flatten)]
    pub seed: Seed,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"fibseq=debug"`.
    pub filter: Option<String>,
}

impl FibConfig {
    /// Load the user config, if one exists.
    ///
    /// Returns `Ok(None)` when there is no home directory or no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        Self::load_from(&path).map(Some)
    }

    /// Load and parse the config at `path`.
    ///
    /// Errors are returned rather than logged; callers decide how to report them.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn terms(&self) -> u64 {
        self.sequence
            .as_ref()
            .and_then(|seq| seq.terms)
            .unwrap_or(DEFAULT_TERMS)
    }

    /// Seed for the generator; each half falls back to the standard `(0, 1)`.
    #[must_use]
    pub fn seed(&self) -> Seed {
        self.sequence
            .as_ref()
            .map(|seq| seq.seed)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log
            .as_ref()
            .and_then(|log| log.filter.as_deref())
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".fibseq").join("config.toml"))
}
