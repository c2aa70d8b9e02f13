//! Descriptor dispatch
//!
//! Single lookups go straight to the named provider. Batches are checked in
//! full before any provider is read, grouped per provider, and either succeed
//! completely or report every failure at once.

use crate::ResolutionObserver;
use credbroker_core::{
    CredentialSpec, Descriptor, Error, ResolvedCredentials, Result, SecretValue, StoredSecret,
};
use credbroker_providers::ProviderRegistry;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Resolves descriptors against a fixed provider registry
#[derive(Clone)]
pub struct Resolver {
    registry: Arc<ProviderRegistry>,
    observers: Vec<Arc<dyn ResolutionObserver>>,
}

impl Resolver {
    /// Create a resolver with no observers
    #[must_use]
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self {
            registry,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn builder(registry: Arc<ProviderRegistry>) -> ResolverBuilder {
        ResolverBuilder {
            registry,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Resolve one descriptor
    ///
    /// # Returns
    /// * `Ok(value)` - The provider holds a value for the key
    /// * `Err(Error::InvalidDescriptor)` - The provider or key field is empty
    /// * `Err(Error::UnknownProvider)` - No provider is registered under that name
    /// * `Err(Error::NotFound)` - The provider has no value for the key
    pub fn resolve<D: Descriptor>(&self, descriptor: &D) -> Result<SecretValue> {
        descriptor.validate()?;
        let provider = self.registry.get(descriptor.provider())?;

        let value = provider.get_value(descriptor.key()).map_err(|e| {
            tracing::debug!(
                provider = %provider.name(),
                label = %descriptor.label(),
                error = %e,
                "Failed to resolve credential"
            );
            e
        })?;

        tracing::debug!(
            provider = %provider.name(),
            label = %descriptor.label(),
            "Resolved credential"
        );
        self.notify(provider.name(), descriptor.label(), &value);
        Ok(value)
    }

    /// Resolve a stored secret: `secret.name` is looked up in `secret.provider`
    pub fn get_secret(&self, secret: &StoredSecret) -> Result<SecretValue> {
        self.resolve(secret)
    }

    /// Resolve a credential: `credential.get` is looked up in `credential.from`
    pub fn get_credential(&self, credential: &CredentialSpec) -> Result<SecretValue> {
        self.resolve(credential)
    }

    /// Resolve a batch of descriptors, all or nothing.
    ///
    /// Every descriptor is validated and every provider name checked before
    /// any provider is read, so an unknown provider fails the batch without
    /// side effects. Lookup failures from all providers are collected; if
    /// there is exactly one it is returned as is, otherwise they are returned
    /// together as `Error::Aggregate` sorted by message.
    pub fn resolve_all<D: Descriptor>(&self, descriptors: &[D]) -> Result<ResolvedCredentials> {
        if descriptors.is_empty() {
            return Err(Error::configuration("no credentials requested"));
        }

        let mut labels = HashSet::with_capacity(descriptors.len());
        for descriptor in descriptors {
            descriptor.validate()?;
            if descriptor.label().is_empty() {
                return Err(Error::invalid_descriptor(
                    "<unnamed>",
                    "a batch entry needs a non-empty id or name",
                ));
            }
            if !labels.insert(descriptor.label()) {
                return Err(Error::invalid_descriptor(
                    descriptor.label(),
                    "requested more than once in the same batch",
                ));
            }
        }

        // Group by provider in first-seen order. Unknown names fail here.
        let mut groups: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (index, descriptor) in descriptors.iter().enumerate() {
            let name = descriptor.provider();
            if !groups.contains_key(name) {
                self.registry.get(name)?;
            }
            groups.entry(name).or_default().push(index);
        }

        let mut values: Vec<Option<SecretValue>> = vec![None; descriptors.len()];
        let mut failures = Vec::new();

        for (name, indices) in &groups {
            let provider = self.registry.get(name)?;
            let keys: Vec<&str> = indices.iter().map(|&i| descriptors[i].key()).collect();
            let results = provider.get_values(&keys);

            if results.len() != keys.len() {
                failures.push(Error::configuration(format!(
                    "provider '{}' returned {} results for {} keys",
                    provider.name(),
                    results.len(),
                    keys.len()
                )));
                continue;
            }

            for (&index, result) in indices.iter().zip(results) {
                match result {
                    Ok(value) => values[index] = Some(value),
                    Err(e) => failures.push(e),
                }
            }
        }

        if !failures.is_empty() {
            let error = if failures.len() == 1 {
                failures.remove(0)
            } else {
                Error::aggregate(failures)
            };
            tracing::warn!(error = %error, "Resolving credentials failed");
            return Err(error);
        }

        let mut resolved = ResolvedCredentials::new();
        for (descriptor, value) in descriptors.iter().zip(values) {
            if let Some(value) = value {
                resolved.insert(descriptor.label(), value);
            }
        }

        for descriptor in descriptors {
            if let Some(value) = resolved.get(descriptor.label()) {
                self.notify(descriptor.provider(), descriptor.label(), value);
            }
        }

        tracing::debug!(
            count = resolved.len(),
            providers = groups.len(),
            "Resolved credential batch"
        );
        Ok(resolved)
    }

    fn notify(&self, provider: &str, label: &str, value: &SecretValue) {
        for observer in &self.observers {
            observer.credential_resolved(provider, label, value);
        }
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("registry", &self.registry)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Builder for a resolver with observers
pub struct ResolverBuilder {
    registry: Arc<ProviderRegistry>,
    observers: Vec<Arc<dyn ResolutionObserver>>,
}

impl ResolverBuilder {
    /// Add an observer notified after every successful resolution
    #[must_use]
    pub fn observer<O>(mut self, observer: O) -> Self
    where
        O: ResolutionObserver + 'static,
    {
        self.observers.push(Arc::new(observer));
        self
    }

    /// Add an observer that is already shared elsewhere
    #[must_use]
    pub fn shared_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    #[must_use]
    pub fn build(self) -> Resolver {
        Resolver {
            registry: self.registry,
            observers: self.observers,
        }
    }
}
