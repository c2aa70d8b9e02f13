//! Name-keyed provider registry
//!
//! The registry is assembled once at startup and is read-only afterwards.
//! Callers hold it behind an `Arc` and pass it to whatever needs to resolve.

use crate::{EnvProvider, FileProvider, LiteralProvider, Provider};
use credbroker_core::{Error, Result, SecretValue};
use indexmap::IndexMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Settings for the built-in providers
#[derive(Debug, Clone, Default)]
pub struct ProviderSettings {
    /// Table served by the `literal` provider
    pub literals: IndexMap<String, SecretValue>,
    /// Base directory for relative `file` provider keys
    pub file_base_dir: Option<PathBuf>,
}

/// Immutable mapping from provider name to provider instance
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: IndexMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    #[must_use]
    pub fn builder() -> ProviderRegistryBuilder {
        ProviderRegistryBuilder::default()
    }

    /// Registry holding the `literal`, `env` and `file` providers
    pub fn builtin(settings: &ProviderSettings) -> Result<Self> {
        let mut file = FileProvider::new();
        if let Some(dir) = &settings.file_base_dir {
            file = file.with_base_dir(dir);
        }

        Ok(Self::builder()
            .register(LiteralProvider::new(settings.literals.clone()))?
            .register(EnvProvider::new())?
            .register(file)?
            .build())
    }

    /// Look up a provider by name
    pub fn get(&self, name: &str) -> Result<&dyn Provider> {
        self.providers
            .get(name)
            .map(|provider| provider.as_ref())
            .ok_or_else(|| Error::unknown_provider(name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder collecting providers before the registry is frozen
#[derive(Default)]
pub struct ProviderRegistryBuilder {
    providers: IndexMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistryBuilder {
    /// Register a provider under its own name
    pub fn register<P>(self, provider: P) -> Result<Self>
    where
        P: Provider + 'static,
    {
        self.register_shared(Arc::new(provider))
    }

    /// Register a provider that is already shared elsewhere
    pub fn register_shared(mut self, provider: Arc<dyn Provider>) -> Result<Self> {
        let name = provider.name().to_string();
        if name.trim().is_empty() {
            return Err(Error::configuration("provider name must not be empty"));
        }
        if self.providers.contains_key(&name) {
            return Err(Error::configuration(format!(
                "provider '{name}' is already registered"
            )));
        }

        tracing::debug!(provider = %name, "Registering provider");
        self.providers.insert(name, provider);
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> ProviderRegistry {
        ProviderRegistry {
            providers: self.providers,
        }
    }
}
