//! # Marquee Architecture
//!
//! Marquee is a **UI-agnostic catalog-browser core**. It is not an application
//! that happens to expose some library code—it is a library that expects some
//! UI (desktop shell, web view, TUI) to render its state and forward user
//! intents into it.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Rendering layer (NOT in this crate)                        │
//! │  - Draws the filtered grid, the heart icons, the modal      │
//! │  - Forwards search input, favorite toggles, selections      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session facade (session.rs)                                │
//! │  - Single entry point combining both stores                 │
//! │  - Read accessors + write intents, nothing else             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Stores (catalog.rs, favorites.rs)                          │
//! │  - CatalogStore: seeded movie list + derived filtered view  │
//! │  - FavoritesStore: favorite set with write-through persist  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage layer (storage/)                                   │
//! │  - Abstract KeyValueStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From [`session::Session`] inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** assumes a terminal, a browser, or an event loop
//!
//! The only external side effect in the whole crate is the favorites
//! write-through inside [`favorites::FavoritesStore::toggle`], and even that
//! goes through the injected [`storage::KeyValueStore`].
//!
//! ## Module Overview
//!
//! - [`session`]: The facade—entry point for all operations
//! - [`catalog`]: Catalog state and the derived filtered view
//! - [`favorites`]: Favorite set with synchronous write-through persistence
//! - [`storage`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Movie`, `MovieId`)
//! - [`seed`]: The built-in sample catalog
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod model;
pub mod seed;
pub mod session;
pub mod storage;
