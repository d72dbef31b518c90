//! Core components of the `esg-signal-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`EsgClient`] and its builder.
//! - The primary [`EsgError`] type.
//! - Request sequencing used to discard stale responses.
//! - Internal networking and lenient wire decoding.

/// The main client (`EsgClient`), builder, and configuration.
pub mod client;
/// The primary error type (`EsgError`) for the crate.
pub mod error;
/// Monotonic request tokens and in-flight tracking.
pub mod sequence;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::EsgClient`
pub use client::{EsgClient, EsgClientBuilder};
pub use error::EsgError;
pub use sequence::{InFlight, InFlightGuard, RequestSequencer, RequestToken};
