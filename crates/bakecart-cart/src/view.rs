//! Plain-text presentation of cart state.
//!
//! These helpers are the read side a view needs: the cart listing with
//! subtotals and total, the badge value, and the flavor choices offered when
//! adding a product.

use std::fmt;

use bakecart_store::KvStore;
use bakecart_types::{LineItem, Price, Product};

use crate::error::CartResult;
use crate::store::CartStore;

/// Heading shown for an empty cart.
pub const EMPTY_TITLE: &str = "Seu carrinho está vazio";
/// Hint shown under [`EMPTY_TITLE`].
pub const EMPTY_HINT: &str = "Adicione bolos deliciosos ao seu carrinho!";
/// Label of the placeholder flavor choice.
pub const NO_FLAVOR_LABEL: &str = "Selecione um sabor";

/// One selectable flavor. An empty `value` means no flavor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlavorChoice {
    pub value: String,
    pub label: String,
}

/// Cart listing with precomputed subtotals, ready to display.
#[derive(Clone, Debug)]
pub struct CartListing<'a> {
    lines: Vec<(&'a LineItem, Price)>,
    total: Price,
}

impl<'a> CartListing<'a> {
    /// Compute subtotals and total for every line of `cart`.
    pub fn new<S: KvStore>(cart: &'a CartStore<S>) -> CartResult<Self> {
        let lines = cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| Ok((item, cart.subtotal(index)?)))
            .collect::<CartResult<Vec<_>>>()?;
        Ok(Self {
            lines,
            total: cart.total()?,
        })
    }

    pub fn total(&self) -> Price {
        self.total
    }
}

impl fmt::Display for CartListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            writeln!(f, "{EMPTY_TITLE}")?;
            writeln!(f, "{EMPTY_HINT}")?;
        }
        for (index, (item, subtotal)) in self.lines.iter().enumerate() {
            writeln!(f, "[{index}] {}", item.name)?;
            if !item.selected_flavor.is_empty() {
                writeln!(f, "    Sabor: {}", item.selected_flavor)?;
            }
            if !item.notes.is_empty() {
                writeln!(f, "    Observações: {}", item.notes)?;
            }
            writeln!(
                f,
                "    {}/kg x {} = {}",
                item.unit_price, item.quantity, subtotal
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total: {}", self.total)
    }
}

/// Render the cart listing followed by the total.
pub fn render_cart<S: KvStore>(cart: &CartStore<S>) -> CartResult<String> {
    Ok(CartListing::new(cart)?.to_string())
}

/// Badge text for `item_count`; hidden (`None`) when the cart is empty.
pub fn counter_badge(item_count: u64) -> Option<String> {
    (item_count > 0).then(|| item_count.to_string())
}

/// Flavor choices for a product, led by the "no flavor" placeholder.
pub fn flavor_choices(product: &Product) -> Vec<FlavorChoice> {
    std::iter::once(FlavorChoice {
        value: String::new(),
        label: NO_FLAVOR_LABEL.to_string(),
    })
    .chain(product.flavor_options.iter().map(|f| FlavorChoice {
        value: f.clone(),
        label: f.clone(),
    }))
    .collect()
}
