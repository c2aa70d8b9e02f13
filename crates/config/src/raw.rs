//! On-disk shape of the configuration file

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawConfig {
    #[serde(default)]
    pub log: RawLog,
    #[serde(default)]
    pub file: RawFile,
    #[serde(default)]
    pub literals: IndexMap<String, String>,
    #[serde(default)]
    pub credentials: IndexMap<String, RawCredential>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawLog {
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawFile {
    pub base_dir: Option<PathBuf>,
}

/// A credential entry is either a bare scalar (served by the literal
/// provider) or a `from`/`get` mapping
#[derive(Debug)]
pub(crate) enum RawCredential {
    Value(String),
    Lookup(RawLookup),
}

/// Missing fields are left empty so the loader can name the credential
/// in its error
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawLookup {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub get: String,
}

impl<'de> Deserialize<'de> for RawCredential {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CredentialVisitor;

        impl<'de> Visitor<'de> for CredentialVisitor {
            type Value = RawCredential;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or a from/get mapping")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(RawCredential::Value(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(RawCredential::Value(value))
            }

            // Scalars such as `pin: 1234` are taken as their textual form
            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(RawCredential::Value(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(RawCredential::Value(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                Ok(RawCredential::Value(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(RawCredential::Value(value.to_string()))
            }

            fn visit_map<M>(self, map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                RawLookup::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(RawCredential::Lookup)
            }
        }

        deserializer.deserialize_any(CredentialVisitor)
    }
}
