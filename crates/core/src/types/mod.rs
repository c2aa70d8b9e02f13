//! Core domain types for `credbroker`.
//!
//! - **`descriptors`**: `StoredSecret`, `CredentialSpec` and the `Descriptor`
//!   trait the resolver dispatches on
//! - **`secret`**: `SecretValue` and the batch result map

pub mod descriptors;
pub mod secret;

pub use descriptors::*;
pub use secret::*;
