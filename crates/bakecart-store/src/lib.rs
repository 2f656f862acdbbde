//! Durable key-value storage for the bakery cart.
//!
//! The cart persists its whole state under a single named slot, the way a
//! storefront page uses browser-scoped storage. This crate provides that slot
//! abstraction and its backends.
//!
//! # Storage Backends
//!
//! All backends implement the [`KvStore`] trait:
//!
//! - [`InMemoryKvStore`] -- `HashMap`-based store for tests and embedding
//! - [`FileKvStore`] -- single JSON file, rewritten atomically on every change
//!
//! # Design Rules
//!
//! 1. Values are opaque strings; the store never interprets them.
//! 2. Every write replaces the whole value for its key.
//! 3. All I/O errors are propagated to the caller.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileKvStore;
pub use memory::InMemoryKvStore;
pub use traits::KvStore;
