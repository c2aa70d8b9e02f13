//! Configuration parsing and loading for credbroker
//!
//! A configuration file declares the literal provider's table, file provider
//! settings, the log level, and a set of named credentials. `ConfigLoader`
//! finds and parses it; `Config` turns it into a provider registry.

mod config;
mod loader;
mod raw;


pub use config::{Config, ConfigFormat, LogSettings};
pub use loader::ConfigLoader;
