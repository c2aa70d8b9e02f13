//! Shared utilities for credbroker
//!
//! Logging setup and well-known filesystem locations used by the other
//! workspace crates.

pub mod logging;
pub mod xdg;

pub use xdg::XdgPaths;
