//! Parsed configuration
//!
//! `Config` is immutable after parsing and is what the rest of the workspace
//! consumes. Use `Config::registry` to build the provider registry it
//! describes.

use crate::raw::{RawConfig, RawCredential, RawLookup};
use credbroker_core::{
    CredentialSpec, Error, Result, ResultExt, SecretValue, DEFAULT_LOG_LEVEL, LITERAL_PROVIDER,
};
use credbroker_providers::{ProviderRegistry, ProviderSettings};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file extension. YAML is a superset of JSON,
    /// so anything that is not `.json` is read as YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive handed to the tracing subscriber, e.g. `debug`
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Immutable configuration loaded at startup
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Logging settings
    pub log: LogSettings,

    /// Settings for the built-in providers
    pub providers: ProviderSettings,

    /// Named credentials, sorted by name
    pub credentials: Vec<CredentialSpec>,

    /// File this configuration was read from, if any
    pub source: Option<PathBuf>,
}

impl Config {
    /// Parse configuration text
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self> {
        let raw: RawConfig = match format {
            ConfigFormat::Json => serde_json::from_str(contents)?,
            ConfigFormat::Yaml => {
                // An empty YAML document deserializes to unit, not a map
                if contents.trim().is_empty() {
                    RawConfig::default()
                } else {
                    serde_yaml::from_str(contents)?
                }
            }
        };
        Self::from_raw(raw)
    }

    /// Read and parse a configuration file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| Error::file_system(path, "read", e))?;

        let mut config = Self::parse(&contents, ConfigFormat::from_path(path))
            .with_context(|| format!("invalid configuration file '{}'", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Build the registry of built-in providers these settings describe
    pub fn registry(&self) -> Result<ProviderRegistry> {
        ProviderRegistry::builtin(&self.providers)
    }

    /// Look up a declared credential by name
    #[must_use]
    pub fn credential(&self, name: &str) -> Option<&CredentialSpec> {
        self.credentials.iter().find(|cred| cred.name == name)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let mut literals: IndexMap<String, SecretValue> = raw
            .literals
            .into_iter()
            .map(|(key, value)| (key, SecretValue::from(value)))
            .collect();

        let mut credentials = Vec::with_capacity(raw.credentials.len());
        for (name, entry) in raw.credentials {
            let credential = match entry {
                RawCredential::Value(value) => {
                    let value = SecretValue::from(value);
                    match literals.entry(name.clone()) {
                        Entry::Occupied(existing) => {
                            if *existing.get() != value {
                                return Err(Error::configuration(format!(
                                    "credential '{name}' conflicts with the literal of the same name"
                                )));
                            }
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(value);
                        }
                    }
                    CredentialSpec::new(name.clone(), LITERAL_PROVIDER, name)
                }
                RawCredential::Lookup(RawLookup { from, get }) => {
                    if from.trim().is_empty() {
                        return Err(Error::configuration(format!(
                            "credential '{name}' is missing 'from'"
                        )));
                    }
                    if get.is_empty() {
                        return Err(Error::configuration(format!(
                            "credential '{name}' is missing 'get'"
                        )));
                    }
                    CredentialSpec::new(name, from, get)
                }
            };
            credentials.push(credential);
        }
        credentials.sort_by(|a, b| a.name.cmp(&b.name));

        let log = LogSettings {
            level: raw
                .log
                .level
                .filter(|level| !level.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        };

        Ok(Self {
            log,
            providers: ProviderSettings {
                literals,
                file_base_dir: raw.file.base_dir,
            },
            credentials,
            source: None,
        })
    }
}
