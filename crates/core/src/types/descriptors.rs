//! Request shapes handed to the resolver

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Common view over the descriptor shapes.
///
/// `provider` selects the registered provider, `key` is what that provider
/// looks up, and `label` is the name a batch result is returned under.
pub trait Descriptor {
    fn provider(&self) -> &str;
    fn key(&self) -> &str;
    fn label(&self) -> &str;

    /// Reject descriptors with an empty provider or key
    fn validate(&self) -> Result<()> {
        let descriptor = if self.label().is_empty() {
            "<unnamed>"
        } else {
            self.label()
        };
        if self.provider().trim().is_empty() {
            return Err(Error::invalid_descriptor(
                descriptor,
                "provider name must not be empty",
            ));
        }
        if self.key().is_empty() {
            return Err(Error::invalid_descriptor(
                descriptor,
                "lookup key must not be empty",
            ));
        }
        Ok(())
    }
}

/// A secret stored in a provider, addressed by provider name and lookup key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoredSecret {
    /// Unique key the caller refers to this secret by
    pub id: String,
    /// Name of the provider holding the secret
    pub provider: String,
    /// Lookup key passed to the provider
    pub name: String,
}

impl StoredSecret {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        provider: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            provider: provider.into(),
            name: name.into(),
        }
    }
}

impl Descriptor for StoredSecret {
    fn provider(&self) -> &str {
        &self.provider
    }

    fn key(&self) -> &str {
        &self.name
    }

    fn label(&self) -> &str {
        &self.id
    }
}

/// A named credential: `get` this key `from` that provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredentialSpec {
    /// Logical credential name
    pub name: String,
    /// Lookup key passed to the provider
    pub get: String,
    /// Name of the provider holding the credential
    pub from: String,
}

impl CredentialSpec {
    /// Argument order follows how the credential reads: `name` comes `from`
    /// a provider, which will `get` a key.
    #[must_use]
    pub fn new(name: impl Into<String>, from: impl Into<String>, get: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            get: get.into(),
            from: from.into(),
        }
    }
}

impl Descriptor for CredentialSpec {
    fn provider(&self) -> &str {
        &self.from
    }

    fn key(&self) -> &str {
        &self.get
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl<D: Descriptor + ?Sized> Descriptor for &D {
    fn provider(&self) -> &str {
        (**self).provider()
    }

    fn key(&self) -> &str {
        (**self).key()
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_secret_maps_name_to_key() {
        let secret = StoredSecret::new("db", "literal", "db-password");
        assert_eq!(secret.provider(), "literal");
        assert_eq!(secret.key(), "db-password");
        assert_eq!(secret.label(), "db");
        assert!(secret.validate().is_ok());
    }

    #[test]
    fn test_credential_spec_maps_get_and_from() {
        let cred = CredentialSpec::new("home", "env", "HOME");
        assert_eq!(cred.provider(), "env");
        assert_eq!(cred.key(), "HOME");
        assert_eq!(cred.label(), "home");
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let err = CredentialSpec::new("token", "", "x").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid descriptor 'token': provider name must not be empty"
        );

        let err = StoredSecret::new("", "env", "").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid descriptor '<unnamed>': lookup key must not be empty"
        );
    }

    #[test]
    fn test_credential_spec_deserializes_from_json() {
        let cred: CredentialSpec =
            serde_json::from_str(r#"{"name":"pw","get":"PGPASSWORD","from":"env"}"#).unwrap();
        assert_eq!(cred, CredentialSpec::new("pw", "env", "PGPASSWORD"));
    }
}
