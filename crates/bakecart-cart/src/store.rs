use std::num::NonZeroU32;

use tracing::{debug, warn};

use bakecart_store::KvStore;
use bakecart_types::{Catalog, ItemKey, LineItem, Price};

use crate::config::CartConfig;
use crate::error::{CartError, CartResult};
use crate::observer::CartObserver;
use crate::wire;

/// What an [`CartStore::add_item`] call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended at `index`.
    Appended { index: usize },
    /// An existing line at `index` now holds `quantity`.
    Merged { index: usize, quantity: u32 },
}

impl AddOutcome {
    /// Position of the affected line.
    pub fn index(&self) -> usize {
        match self {
            AddOutcome::Appended { index } | AddOutcome::Merged { index, .. } => *index,
        }
    }
}

/// The shopper's cart: an ordered sequence of line items backed by a
/// [`KvStore`] slot.
///
/// Every mutating operation rewrites the whole persisted sequence before it
/// returns and then notifies the registered observer, if any. If the store
/// write fails the in-memory change stands and the error is returned.
///
/// Lines are addressed by their 0-based position, which shifts when an
/// earlier line is removed.
pub struct CartStore<S> {
    catalog: Catalog,
    store: S,
    config: CartConfig,
    items: Vec<LineItem>,
    observer: Option<Box<dyn CartObserver>>,
}

impl<S: KvStore> CartStore<S> {
    /// Open the cart persisted in `store`, or an empty cart if there is none.
    pub fn open(catalog: Catalog, store: S, config: CartConfig) -> Self {
        let mut cart = Self {
            catalog,
            store,
            config,
            items: Vec::new(),
            observer: None,
        };
        cart.items = cart.load();
        debug!(
            key = %cart.config.storage_key,
            lines = cart.items.len(),
            "cart opened"
        );
        cart
    }

    /// Read the persisted item sequence.
    ///
    /// Absent, unreadable, or malformed state yields an empty sequence; the
    /// problem is logged and never surfaced.
    pub fn load(&self) -> Vec<LineItem> {
        let key = &self.config.storage_key;
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "cart storage unreadable, starting empty");
                return Vec::new();
            }
        };
        match wire::decode_items(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key = %key, error = %e, "persisted cart is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Replace the in-memory items with what is currently persisted.
    pub fn reload(&mut self) {
        self.items = self.load();
        self.notify_changed();
    }

    /// Persist the current sequence and refresh the counter.
    pub fn save(&self) -> CartResult<()> {
        let raw = wire::encode_items(&self.items)?;
        self.store.set(&self.config.storage_key, &raw)?;
        let count = self.item_count();
        debug!(lines = self.items.len(), item_count = count, "cart saved");
        if let Some(observer) = &self.observer {
            observer.counter_changed(count);
        }
        Ok(())
    }

    /// Add `quantity` of a product with the given notes and flavor.
    ///
    /// If a line with the same product, flavor and notes exists its quantity
    /// grows; otherwise a new line is appended with a snapshot of the product.
    /// Unknown products and non-positive quantities leave the cart untouched.
    pub fn add_item(
        &mut self,
        product_id: &str,
        quantity: i64,
        notes: &str,
        flavor: &str,
    ) -> CartResult<AddOutcome> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| CartError::UnknownProduct(product_id.to_string()))?;
        let quantity = positive_quantity(quantity)?;

        let key = ItemKey {
            product_id,
            flavor,
            notes,
        };
        let outcome = match self.items.iter().position(|item| item.matches(&key)) {
            Some(index) => {
                let line = &mut self.items[index];
                let merged = line
                    .quantity
                    .checked_add(quantity.get())
                    .ok_or_else(|| CartError::QuantityOverflow {
                        product_id: line.product_id.clone(),
                    })?;
                line.quantity = merged;
                AddOutcome::Merged {
                    index,
                    quantity: merged.get(),
                }
            }
            None => {
                self.items
                    .push(LineItem::snapshot(product, quantity, flavor, notes));
                AddOutcome::Appended {
                    index: self.items.len() - 1,
                }
            }
        };
        debug!(product = product_id, flavor, ?outcome, "item added");

        self.save()?;
        if let Some(observer) = &self.observer {
            observer.item_added(&self.items[outcome.index()], &outcome);
        }
        Ok(outcome)
    }

    /// Add one unit with no notes and no flavor.
    pub fn add_one(&mut self, product_id: &str) -> CartResult<AddOutcome> {
        self.add_item(product_id, 1, "", "")
    }

    /// Remove and return the line at `index`. Later lines shift down by one.
    pub fn remove_item(&mut self, index: usize) -> CartResult<LineItem> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        debug!(index, product = %removed.product_id, "item removed");
        self.save()?;
        self.notify_changed();
        Ok(removed)
    }

    /// Set the quantity of the line at `index`.
    ///
    /// A quantity of zero or less removes the line instead. No merging takes
    /// place.
    pub fn update_quantity(&mut self, index: usize, new_quantity: i64) -> CartResult<()> {
        self.check_index(index)?;
        if new_quantity <= 0 {
            self.remove_item(index)?;
            return Ok(());
        }
        let quantity = positive_quantity(new_quantity)?;
        self.items[index].quantity = quantity;
        debug!(index, quantity = quantity.get(), "quantity updated");
        self.save()?;
        self.notify_changed();
        Ok(())
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> CartResult<()> {
        self.items.clear();
        debug!("cart cleared");
        self.save()?;
        self.notify_changed();
        Ok(())
    }

    /// Sum of `unit_price × quantity` over all lines.
    pub fn total(&self) -> CartResult<Price> {
        self.items.iter().try_fold(Price::ZERO, |acc, item| {
            item.subtotal()
                .and_then(|sub| acc.checked_add(sub))
                .ok_or(CartError::PriceOverflow)
        })
    }

    /// `unit_price × quantity` for the line at `index`.
    pub fn subtotal(&self, index: usize) -> CartResult<Price> {
        self.check_index(index)?;
        self.items[index].subtotal().ok_or(CartError::PriceOverflow)
    }

    /// Sum of quantities across all lines (the badge value).
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Number of lines (not units).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register the listener that receives change notifications, replacing
    /// any previous one.
    pub fn set_observer(&mut self, observer: impl CartObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    fn check_index(&self, index: usize) -> CartResult<()> {
        if index >= self.items.len() {
            return Err(CartError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    fn notify_changed(&self) {
        if let Some(observer) = &self.observer {
            observer.cart_changed(&self.items);
        }
    }
}

impl<S> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("storage_key", &self.config.storage_key)
            .field("lines", &self.items.len())
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

fn positive_quantity(quantity: i64) -> CartResult<NonZeroU32> {
    u32::try_from(quantity)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(CartError::InvalidQuantity(quantity))
}
