use thiserror::Error;

use bakecart_types::ProductId;

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product id does not resolve in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(String),

    /// Quantities passed to `add_item` must be positive and fit in a `u32`.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Merging into an existing line would exceed the maximum quantity.
    #[error("quantity overflow for {product_id}")]
    QuantityOverflow { product_id: ProductId },

    /// A line index outside the current item sequence.
    #[error("index {index} out of bounds for cart of {len} items")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A subtotal or total exceeded the representable amount.
    #[error("price overflow computing cart total")]
    PriceOverflow,

    /// The cart could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("store error: {0}")]
    Store(#[from] bakecart_store::StoreError),
}

/// Result alias for cart operations.
pub type CartResult<T> = Result<T, CartError>;
