//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, contract violations). Transport concerns live in the catalog
/// crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A malformed product was handed to the cart (e.g. empty identifier).
    #[error("invalid product: {0}")]
    InvalidProduct(String),

    /// A decrement targeted a product with no line in the cart. This is a
    /// contract violation on the caller's side, not a user-visible state.
    #[error("no cart line for product {0}")]
    LineNotFound(ProductId),

    /// An identifier was invalid (empty or malformed).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A session invariant was violated (e.g. confirming an empty cart).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn invalid_product(msg: impl Into<String>) -> Self {
        Self::InvalidProduct(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
