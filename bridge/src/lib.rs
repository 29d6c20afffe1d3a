//! # Steambind
//! Facade translating method calls and callback events between a host
//! engine's scripting layer and a Steam-style matchmaking/identity/P2P
//! SDK. The SDK itself is reached only through the capability traits in
//! [`api`]; any accessor may report a subsystem as unavailable, in which
//! case the affected operation degrades to its documented sentinel.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod api;

mod binding;
mod callbacks;
mod config;
mod error;
mod pending;

pub use binding::{P2pPacket, SteamBinding};
pub use config::BindingConfig;
pub use error::DispatchError;

pub use steambind_shared::{Signal, SignalQueue, SignalSink, SteamId, Value};
