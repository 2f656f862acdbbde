//! Cart line items.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::flavors;
use crate::price::Price;
use crate::product::{Product, ProductId};

/// One entry in the cart: a product snapshot plus quantity, flavor and notes.
///
/// Name, price, image and flavor options are copied from the [`Product`] when
/// the item is created and are never re-synced with the catalog. The quantity
/// is always at least one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub unit_price: Price,
    #[serde(rename = "imagem")]
    pub image_ref: String,
    #[serde(rename = "quantidade")]
    pub quantity: NonZeroU32,
    #[serde(rename = "sabor", default)]
    pub selected_flavor: String,
    #[serde(rename = "observacoes", default)]
    pub notes: String,
    #[serde(rename = "sabores", with = "flavors::delimited", default)]
    pub flavor_options: Vec<String>,
}

/// Merge identity of a line item: `(product id, flavor, notes)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemKey<'a> {
    pub product_id: &'a str,
    pub flavor: &'a str,
    pub notes: &'a str,
}

impl LineItem {
    /// Snapshot a product into a new line item.
    pub fn snapshot(
        product: &Product,
        quantity: NonZeroU32,
        flavor: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.unit_price,
            image_ref: product.image_ref.clone(),
            quantity,
            selected_flavor: flavor.into(),
            notes: notes.into(),
            flavor_options: product.flavor_options.clone(),
        }
    }

    pub fn key(&self) -> ItemKey<'_> {
        ItemKey {
            product_id: self.product_id.as_str(),
            flavor: &self.selected_flavor,
            notes: &self.notes,
        }
    }

    /// Exact comparison against a composite key.
    pub fn matches(&self, key: &ItemKey<'_>) -> bool {
        self.key() == *key
    }

    /// `unit_price × quantity`, or `None` on overflow.
    pub fn subtotal(&self) -> Option<Price> {
        self.unit_price.checked_mul(self.quantity.get())
    }
}
