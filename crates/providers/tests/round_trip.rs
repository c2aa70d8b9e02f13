//! Whatever goes into a provider's backing store comes back out unchanged

use credbroker_core::SecretValue;
use credbroker_providers::{EnvProvider, FileProvider, LiteralProvider, Provider};
use proptest::prelude::*;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 !#%&*+,./:;<>?@^_~-]{0,64}"
}

proptest! {
    #[test]
    fn literal_returns_inserted_value(
        key in "[a-z][a-z0-9-]{0,24}",
        value in value_strategy(),
    ) {
        let provider: LiteralProvider = [(key.clone(), SecretValue::from(value.clone()))]
            .into_iter()
            .collect();
        let resolved = provider.get_value(&key).unwrap();
        prop_assert_eq!(resolved.as_str(), value.as_str());
    }

    #[test]
    #[serial]
    fn env_returns_inserted_value(
        suffix in "[A-Z0-9_]{1,16}",
        value in value_strategy(),
    ) {
        let key = format!("CREDBROKER_PROP_{suffix}");
        std::env::set_var(&key, &value);
        let resolved = EnvProvider::new().get_value(&key);
        std::env::remove_var(&key);
        let resolved = resolved.unwrap();
        prop_assert_eq!(resolved.as_str(), value.as_str());
    }

    #[test]
    fn file_returns_inserted_value(
        file_name in "[a-z][a-z0-9_]{0,24}",
        value in value_strategy(),
    ) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(&file_name), &value).unwrap();
        let provider = FileProvider::new().with_base_dir(dir.path());
        let resolved = provider.get_value(&file_name).unwrap();
        prop_assert_eq!(resolved.as_str(), value.as_str());
    }
}
