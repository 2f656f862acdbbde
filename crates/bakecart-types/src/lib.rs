//! Foundation types for the bakery cart.
//!
//! This crate holds the reference data and value types shared by the cart
//! crates. Every other `bakecart` crate depends on `bakecart-types`.
//!
//! # Key Types
//!
//! - [`ProductId`] — Catalog key, first component of a line item's identity
//! - [`Price`] — Exact money amount in centavos
//! - [`Product`] — Read-only catalog entry
//! - [`LineItem`] — Snapshot of a product in the cart, with quantity, flavor and notes
//! - [`Catalog`] — Static product lookup table

pub mod catalog;
pub mod error;
pub mod flavors;
pub mod item;
pub mod price;
pub mod product;

pub use catalog::Catalog;
pub use error::{TypeError, TypeResult};
pub use flavors::parse_flavors;
pub use item::{ItemKey, LineItem};
pub use price::Price;
pub use product::{Product, ProductId};
