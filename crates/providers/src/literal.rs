use crate::Provider;
use credbroker_core::{Error, Result, SecretValue, LITERAL_PROVIDER};
use indexmap::IndexMap;

/// Provider serving values from a fixed table supplied at construction
#[derive(Debug, Clone)]
pub struct LiteralProvider {
    name: String,
    values: IndexMap<String, SecretValue>,
}

impl LiteralProvider {
    #[must_use]
    pub fn new(values: IndexMap<String, SecretValue>) -> Self {
        Self {
            name: LITERAL_PROVIDER.to_string(),
            values,
        }
    }

    /// Register under a name other than `literal`
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LiteralProvider
where
    K: Into<String>,
    V: Into<SecretValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl Provider for LiteralProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_value(&self, key: &str) -> Result<SecretValue> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| Error::not_found(&self.name, "key", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_configured_value() {
        let provider: LiteralProvider = [("db-password", "s3cr3t")].into_iter().collect();
        assert_eq!(provider.name(), "literal");
        assert_eq!(provider.get_value("db-password").unwrap(), "s3cr3t");
    }

    #[test]
    fn test_absent_key_is_not_found() {
        let provider: LiteralProvider = [("db-password", "s3cr3t")].into_iter().collect();
        let err = provider.get_value("api-key").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "literal cannot find key 'api-key'");
    }

    #[test]
    fn test_renamed_provider_reports_its_name() {
        let provider = LiteralProvider::new(IndexMap::new()).with_name("static");
        assert_eq!(provider.name(), "static");
        assert!(provider.is_empty());
        assert_eq!(
            provider.get_value("x").unwrap_err().to_string(),
            "static cannot find key 'x'"
        );
    }

    #[test]
    fn test_get_values_preserves_order_and_errors() {
        let provider: LiteralProvider = [("a", "1"), ("b", "2")].into_iter().collect();
        let results = provider.get_values(&["b", "missing", "a"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap(), "2");
        assert!(results[1].as_ref().unwrap_err().is_not_found());
        assert_eq!(results[2].as_ref().unwrap(), "1");
    }
}
