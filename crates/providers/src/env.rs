use crate::Provider;
use credbroker_core::{Error, Result, SecretValue, ENV_PROVIDER};
use std::env::{self, VarError};

/// Provider reading values from the process environment.
/// Any environment variable name is a valid key.
#[derive(Debug, Clone)]
pub struct EnvProvider {
    name: String,
}

impl EnvProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: ENV_PROVIDER.to_string(),
        }
    }

    /// Register under a name other than `env`
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for EnvProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for EnvProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_value(&self, key: &str) -> Result<SecretValue> {
        // Names the platform can never hold are reported as absent
        if key.is_empty() || key.contains(|c: char| c == '=' || c == '\0') {
            return Err(Error::not_found(&self.name, "environment variable", key));
        }

        match env::var(key) {
            Ok(value) => {
                tracing::debug!(provider = %self.name, variable = %key, "Read environment variable");
                Ok(SecretValue::from(value))
            }
            Err(VarError::NotPresent) => {
                Err(Error::not_found(&self.name, "environment variable", key))
            }
            Err(VarError::NotUnicode(_)) => Err(Error::environment(
                key,
                "value is not valid unicode",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_reads_set_variable() {
        env::set_var("CREDBROKER_TEST_ENV_VAR", "test_env_val");
        let provider = EnvProvider::new();
        assert_eq!(provider.name(), "env");
        assert_eq!(
            provider.get_value("CREDBROKER_TEST_ENV_VAR").unwrap(),
            "test_env_val"
        );
        env::remove_var("CREDBROKER_TEST_ENV_VAR");
    }

    #[test]
    #[serial]
    fn test_unset_variable_is_not_found() {
        env::remove_var("CREDBROKER_TEST_ENV_VAR_NOT_FOUND");
        let err = EnvProvider::new()
            .get_value("CREDBROKER_TEST_ENV_VAR_NOT_FOUND")
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "env cannot find environment variable 'CREDBROKER_TEST_ENV_VAR_NOT_FOUND'"
        );
    }

    #[test]
    #[serial]
    fn test_empty_value_is_returned_as_is() {
        env::set_var("CREDBROKER_TEST_EMPTY", "");
        let value = EnvProvider::new().get_value("CREDBROKER_TEST_EMPTY").unwrap();
        assert!(value.is_empty());
        env::remove_var("CREDBROKER_TEST_EMPTY");
    }

    #[test]
    fn test_malformed_names_are_not_found() {
        let provider = EnvProvider::new();
        assert!(provider.get_value("A=B").unwrap_err().is_not_found());
        assert!(provider.get_value("").unwrap_err().is_not_found());
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_non_unicode_value_is_environment_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var("CREDBROKER_TEST_BAD_UTF8", OsStr::from_bytes(&[0x66, 0x6f, 0x80]));
        let err = EnvProvider::new()
            .get_value("CREDBROKER_TEST_BAD_UTF8")
            .unwrap_err();
        assert!(matches!(err, Error::Environment { .. }));
        env::remove_var("CREDBROKER_TEST_BAD_UTF8");
    }
}
