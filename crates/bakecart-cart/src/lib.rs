//! Cart state management for the bakery storefront.
//!
//! [`CartStore`] owns the ordered list of [`LineItem`]s the shopper selected,
//! applies the merge and quantity rules, computes totals, and persists the
//! whole list to a [`KvStore`] slot after every mutation.
//!
//! # Architecture
//!
//! - The cart is an explicitly constructed value. Views receive it by
//!   reference; there is no process-wide instance.
//! - Views learn about changes through a registered [`CartObserver`]. Having
//!   no observer is a normal configuration.
//! - Two line items with the same `(product id, flavor, notes)` never
//!   coexist: adding an existing combination increases its quantity.
//! - Persisted state that is missing or unreadable loads as an empty cart.
//!
//! # Modules
//!
//! - [`error`] — [`CartError`] and [`CartResult`]
//! - [`config`] — [`CartConfig`]
//! - [`observer`] — The [`CartObserver`] listener interface
//! - [`store`] — [`CartStore`] itself
//! - [`wire`] — Persisted JSON format
//! - [`view`] — Plain-text rendering helpers for views

pub mod config;
pub mod error;
pub mod observer;
pub mod store;
pub mod view;
pub mod wire;

pub use config::CartConfig;
pub use error::{CartError, CartResult};
pub use observer::{added_message, CartObserver, NoOpObserver};
pub use store::{AddOutcome, CartStore};

// Re-export key types
pub use bakecart_store::{FileKvStore, InMemoryKvStore, KvStore, StoreError};
pub use bakecart_types::{Catalog, LineItem, Price, Product, ProductId};
