use credbroker_core::SecretValue;

/// Callback notified after every successful resolution.
///
/// Observers are fixed when the resolver is built. In a batch they are only
/// notified once the whole batch has succeeded, once per descriptor.
pub trait ResolutionObserver: Send + Sync {
    /// `provider` is the provider's registered name and `label` the
    /// descriptor's id or credential name
    fn credential_resolved(&self, provider: &str, label: &str, value: &SecretValue);
}

impl<F> ResolutionObserver for F
where
    F: Fn(&str, &str, &SecretValue) + Send + Sync,
{
    fn credential_resolved(&self, provider: &str, label: &str, value: &SecretValue) {
        self(provider, label, value)
    }
}
