//! Core components of the `sleeper-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`SleeperClient`] and its builder.
//! - The primary [`SleeperError`] type.
//! - Lenient serde helpers shared by the endpoint models.
//! - Internal networking (rate-limited dispatch, status classification).

/// The main client (`SleeperClient`), builder, and configuration.
pub mod client;
/// The primary error type (`SleeperError`) for the crate.
pub mod error;
/// Service traits for abstracting the data the correlation helpers need.
pub mod services;
/// Lenient deserializers and the `Opaque` / `StatLine` types.
pub mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::SleeperClient`
pub use client::{ClientOptions, SleeperClient, SleeperClientBuilder};
pub use error::SleeperError;
pub use services::{FantasyDataSource, SourceFuture};
pub use wire::{Opaque, StatLine};
