use thiserror::Error;

use crate::product::ProductId;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    #[error("duplicate product in catalog: {0}")]
    DuplicateProduct(ProductId),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for type operations.
pub type TypeResult<T> = Result<T, TypeError>;
