//! End-to-end resolution against the built-in providers

use credbroker_config::{Config, ConfigFormat};
use credbroker_core::{CredentialSpec, Error, SecretValue, StoredSecret};
use credbroker_providers::{ProviderRegistry, ProviderSettings};
use credbroker_resolver::Resolver;
use serial_test::serial;
use std::env;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn builtin_resolver(settings: ProviderSettings) -> Resolver {
    Resolver::new(Arc::new(ProviderRegistry::builtin(&settings).unwrap()))
}

fn literal_settings(entries: &[(&str, &str)]) -> ProviderSettings {
    ProviderSettings {
        literals: entries
            .iter()
            .map(|(k, v)| (k.to_string(), SecretValue::from(*v)))
            .collect(),
        file_base_dir: None,
    }
}

#[test]
fn resolves_literal_secret() {
    let resolver = builtin_resolver(literal_settings(&[("db-password", "s3cr3t")]));
    let secret = StoredSecret::new("db", "literal", "db-password");

    assert_eq!(resolver.get_secret(&secret).unwrap(), "s3cr3t");
}

#[test]
#[serial]
fn resolves_environment_credential() {
    env::set_var("db_password", "hunter2");
    let resolver = builtin_resolver(ProviderSettings::default());
    let credential = CredentialSpec::new("db", "env", "db_password");

    assert_eq!(resolver.get_credential(&credential).unwrap(), "hunter2");
    env::remove_var("db_password");
}

#[test]
fn unknown_provider_is_reported_by_name() {
    let resolver = builtin_resolver(ProviderSettings::default());
    let err = resolver
        .get_secret(&StoredSecret::new("db", "vault", "db-password"))
        .unwrap_err();

    assert!(matches!(err, Error::UnknownProvider { ref provider } if provider == "vault"));
    assert_eq!(err.to_string(), "provider 'vault' cannot be found");
}

#[test]
fn missing_literal_key_is_not_found() {
    let resolver = builtin_resolver(ProviderSettings::default());
    let err = resolver
        .get_secret(&StoredSecret::new("db", "literal", "absent"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
#[serial]
fn batch_across_env_and_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("api-token"), "t0ken\n").unwrap();
    env::set_var("CREDBROKER_IT_USER", "admin");

    let resolver = builtin_resolver(ProviderSettings {
        file_base_dir: Some(dir.path().to_path_buf()),
        ..ProviderSettings::default()
    });
    let resolved = resolver
        .resolve_all(&[
            CredentialSpec::new("user", "env", "CREDBROKER_IT_USER"),
            CredentialSpec::new("token", "file", "api-token"),
        ])
        .unwrap();

    assert_eq!(resolved.labels().collect::<Vec<_>>(), vec!["user", "token"]);
    assert_eq!(resolved.get("user").unwrap(), "admin");
    // File contents are returned as stored
    assert_eq!(resolved.get("token").unwrap(), "t0ken\n");

    env::remove_var("CREDBROKER_IT_USER");
}

#[test]
#[serial]
fn batch_reports_every_missing_key() {
    env::remove_var("CREDBROKER_IT_MISSING");
    let dir = TempDir::new().unwrap();

    let resolver = builtin_resolver(ProviderSettings {
        file_base_dir: Some(dir.path().to_path_buf()),
        ..ProviderSettings::default()
    });
    let err = resolver
        .resolve_all(&[
            CredentialSpec::new("user", "env", "CREDBROKER_IT_MISSING"),
            CredentialSpec::new("token", "file", "absent-token"),
        ])
        .unwrap_err();

    match &err {
        Error::Aggregate { errors } => assert_eq!(errors.len(), 2),
        other => panic!("expected aggregate error, got {other:?}"),
    }
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "env cannot find environment variable 'CREDBROKER_IT_MISSING'\n\
         file cannot find file 'absent-token'"
    );
}

#[test]
#[serial]
fn resolves_credentials_declared_in_config() {
    env::set_var("CREDBROKER_IT_PG", "pg-secret");
    let yaml = r#"
literals:
  db-password: s3cr3t
credentials:
  pg:
    from: env
    get: CREDBROKER_IT_PG
  db:
    from: literal
    get: db-password
  api-token: t0ken
"#;
    let config = Config::parse(yaml, ConfigFormat::Yaml).unwrap();
    let resolver = Resolver::new(Arc::new(config.registry().unwrap()));

    let resolved = resolver.resolve_all(&config.credentials).unwrap();
    assert_eq!(
        resolved.labels().collect::<Vec<_>>(),
        vec!["api-token", "db", "pg"]
    );
    assert_eq!(resolved.get("api-token").unwrap(), "t0ken");
    assert_eq!(resolved.get("db").unwrap(), "s3cr3t");
    assert_eq!(resolved.get("pg").unwrap(), "pg-secret");

    env::remove_var("CREDBROKER_IT_PG");
}
