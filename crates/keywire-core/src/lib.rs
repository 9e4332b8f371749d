//! keywire core: wire codecs for end-to-end-encryption event payloads.
//!
//! This crate defines the JSON contracts for the encryption-related event
//! contents exchanged in a federated chat system: Olm (one-to-one) and
//! Megolm (group) ciphertext, session-key distribution, session-key
//! requests, and device-verification requests. It intentionally carries no
//! transport, crypto, or runtime dependencies so the surrounding envelope
//! and session layers can reuse it in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `KeywireError`/`Result` so event
//! pipelines can skip a malformed payload instead of crashing on it.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod events;

/// Shared result type.
pub use error::{KeywireError, Result};
