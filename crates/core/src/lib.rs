//! Core domain types, errors, and constants for `credbroker`.
//!
//! ## Key Components
//!
//! - **`errors`**: the primary `Error` enum and `Result` alias. Every failure a
//!   provider or the resolver can report is a variant here.
//! - **`types`**: the two descriptor shapes callers hand to the resolver, the
//!   zeroizing `SecretValue`, and the batch result container.
//! - **`constants`**: built-in provider names and environment variable names.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    types::*,
};
