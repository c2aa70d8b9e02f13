//! Configuration loader for credbroker
//!
//! Finds the configuration file, parses it, and applies environment
//! overrides. Lookup order:
//!
//! 1. a path given with [`ConfigLoader::path`]
//! 2. the `CREDBROKER_CONFIG` environment variable
//! 3. `$XDG_CONFIG_HOME/credbroker/config.yaml`, if it exists
//! 4. built-in defaults
//!
//! An explicitly named file that does not exist is an error; a missing
//! default file is not.

use crate::Config;
use credbroker_core::{Error, Result, CREDBROKER_CONFIG_VAR, CREDBROKER_LOG_VAR};
use credbroker_utils::XdgPaths;
use std::env;
use std::path::PathBuf;

/// Configuration loader that handles all startup configuration
pub struct ConfigLoader {
    /// Explicit configuration file
    path: Option<PathBuf>,
    /// Whether `CREDBROKER_*` environment variables are consulted
    use_environment: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            path: None,
            use_environment: true,
        }
    }

    /// Load from this file instead of searching
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Ignore `CREDBROKER_CONFIG` and `CREDBROKER_LOG`
    pub fn ignore_environment(mut self) -> Self {
        self.use_environment = false;
        self
    }

    /// Load the configuration
    pub fn load(self) -> Result<Config> {
        let mut config = match self.locate()? {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading configuration");
                Config::from_path(&path)?
            }
            None => {
                tracing::debug!("No configuration file found, using defaults");
                Config::default()
            }
        };

        if self.use_environment {
            if let Some(level) = env_value(CREDBROKER_LOG_VAR) {
                config.log.level = level;
            }
        }

        Ok(config)
    }

    fn locate(&self) -> Result<Option<PathBuf>> {
        let explicit = self.path.clone().or_else(|| {
            self.use_environment
                .then(|| env_value(CREDBROKER_CONFIG_VAR).map(PathBuf::from))
                .flatten()
        });

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(Error::configuration(format!(
                    "configuration file '{}' does not exist",
                    path.display()
                )));
            }
            return Ok(Some(path));
        }

        let default_path = XdgPaths::config_file();
        Ok(default_path.is_file().then_some(default_path))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
