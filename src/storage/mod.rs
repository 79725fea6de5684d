//! # Storage Layer
//!
//! This module defines the persistence abstraction for marquee. The
//! [`KeyValueStore`] trait models the single persistent surface the core
//! touches: a string-keyed, string-valued store, of which exactly one key is
//! used (the serialized favorite set).
//!
//! ## Design Rationale
//!
//! Persistence is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **other backends** (browser localStorage bridge, platform
//!   preferences API) without changing store logic
//! - Keep the favorites invariants **decoupled** from where bytes land
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One file per key: `<root>/<key>.json`
//!   - Default root resolved from the platform data directory
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Failure Semantics
//!
//! `read` distinguishes "key absent" (`Ok(None)`) from "surface broken"
//! (`Err`). Callers that need fail-soft behavior (favorites startup) collapse
//! both into the empty state; `write` errors are propagated so the caller can
//! surface the non-fatal persistence failure.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for the persistent key-value surface.
///
/// Implementations must return the exact string previously written for a key,
/// or `None` if the key has never been written.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}
