//! Resolved secret values

use indexmap::IndexMap;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A resolved secret. The backing memory is wiped on drop and the value
/// never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretValue(String);

impl SecretValue {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the plaintext
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretValue(***)")
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SecretValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Values produced by a batch resolution, keyed by descriptor label in
/// request order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedCredentials(IndexMap<String, SecretValue>);

impl ResolvedCredentials {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert a value, returning the previous one if the label was present
    pub fn insert(&mut self, label: impl Into<String>, value: SecretValue) -> Option<SecretValue> {
        self.0.insert(label.into(), value)
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&SecretValue> {
        self.0.get(label)
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels in request order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, SecretValue> {
        self.0.iter()
    }
}

impl IntoIterator for ResolvedCredentials {
    type Item = (String, SecretValue);
    type IntoIter = indexmap::map::IntoIter<String, SecretValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
