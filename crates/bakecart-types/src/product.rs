//! Catalog products.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flavors;
use crate::price::Price;

/// Unique catalog key for a product (e.g. `"bolo-classico"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Read-only reference data for one product.
///
/// Field names on the wire follow the storefront's persisted format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Price per kilogram.
    #[serde(rename = "preco")]
    pub unit_price: Price,
    #[serde(rename = "imagem")]
    pub image_ref: String,
    #[serde(rename = "sabores", with = "flavors::delimited", default)]
    pub flavor_options: Vec<String>,
}

impl Product {
    /// Build a product, parsing a comma-delimited flavor list.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Price,
        image_ref: impl Into<String>,
        flavors: &str,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
            flavor_options: flavors::parse_flavors(flavors),
        }
    }
}
