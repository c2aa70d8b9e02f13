//! Secret and credential resolution
//!
//! The `Resolver` takes a descriptor, picks the provider it names out of a
//! `ProviderRegistry`, and returns the provider's value or a typed error.
//! Resolution is synchronous and the resolver holds no mutable state, so one
//! instance can be shared across threads.

mod observer;
mod resolver;


pub use observer::ResolutionObserver;
pub use resolver::{Resolver, ResolverBuilder};
