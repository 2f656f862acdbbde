//! Listener interface for views that present cart state.

use bakecart_types::LineItem;

use crate::store::AddOutcome;

/// Receives notifications after the cart changes.
///
/// All methods default to doing nothing, so a view implements only what it
/// presents. Notifications are delivered synchronously, after the change has
/// been persisted.
pub trait CartObserver: Send + Sync {
    /// The persisted cart changed; `item_count` is the new badge value.
    fn counter_changed(&self, _item_count: u64) {}

    /// A line was appended or merged by an add.
    fn item_added(&self, _item: &LineItem, _outcome: &AddOutcome) {}

    /// A line was removed or re-quantified, or the cart was cleared.
    fn cart_changed(&self, _items: &[LineItem]) {}
}

/// Observer that ignores every notification.
pub struct NoOpObserver;

impl CartObserver for NoOpObserver {}

/// Text of the transient notification shown after an add.
pub fn added_message(product_name: &str) -> String {
    format!("{product_name} adicionado ao carrinho!")
}
