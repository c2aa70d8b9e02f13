use credbroker_core::{CONFIG_DIR_NAME, DEFAULT_CONFIG_FILENAME};
use std::env;
use std::path::PathBuf;

/// XDG Base Directory paths for credbroker
pub struct XdgPaths;

impl XdgPaths {
    /// Get XDG_CONFIG_HOME/credbroker or fallback
    pub fn config_dir() -> PathBuf {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|home| home.join(".config"))
                    .unwrap_or_else(|| PathBuf::from(".config"))
            })
            .join(CONFIG_DIR_NAME)
    }

    /// Default location of the configuration file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(DEFAULT_CONFIG_FILENAME)
    }
}
