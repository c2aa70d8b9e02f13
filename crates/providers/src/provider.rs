use credbroker_core::{Result, SecretValue};

/// Trait for resolving lookup keys against one backing store
pub trait Provider: Send + Sync {
    /// The name this provider was registered under
    fn name(&self) -> &str;

    /// Resolve a single key
    ///
    /// # Returns
    /// * `Ok(value)` - The key exists in the backing store
    /// * `Err(Error::NotFound)` - The key is absent
    /// * `Err(_)` - The backing store could not be read
    fn get_value(&self, key: &str) -> Result<SecretValue>;

    /// Resolve several keys, one result per key in the same order.
    ///
    /// The default calls `get_value` for each key in turn. Providers with a
    /// native batch read should override it.
    fn get_values(&self, keys: &[&str]) -> Vec<Result<SecretValue>> {
        keys.iter().map(|key| self.get_value(key)).collect()
    }
}
