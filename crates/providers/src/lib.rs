//! Secret providers for credbroker
//!
//! A provider resolves a lookup key to a value from one backing store. This
//! crate defines the `Provider` trait, the built-in `literal`, `env` and
//! `file` providers, and the read-only `ProviderRegistry` the resolver
//! dispatches through.

mod env;
mod file;
mod literal;
mod provider;
mod registry;

pub use env::EnvProvider;
pub use file::FileProvider;
pub use literal::LiteralProvider;
pub use provider::Provider;
pub use registry::{ProviderRegistry, ProviderRegistryBuilder, ProviderSettings};
