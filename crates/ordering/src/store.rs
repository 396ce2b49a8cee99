//! Session-level cart store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use tableside_catalog::Product;
use tableside_core::{DomainError, OrderId, ProductId, TableId};

use crate::cart::{Cart, CartLine};

/// Result of an add: the fresh cart snapshot plus the table-selection
/// signal.
///
/// When no table is bound yet the mutation still proceeds and
/// `table_prompt` tells the caller to open the table picker; add-then-pick
/// keeps the flow friction-free.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub cart: Cart,
    pub table_prompt: bool,
}

/// Snapshot of a confirmed order, captured before the session resets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTicket {
    pub order_id: OrderId,
    pub table: TableId,
    pub lines: Vec<CartLine>,
    pub total: f64,
    pub confirmed_at: DateTime<Utc>,
}

/// Owns the cart and table binding for the active session.
///
/// State machine: `NoTable → TableSelected → (mutations)* → NoTable` on
/// reset. Mutations are allowed in `NoTable`; they signal for a table
/// instead of blocking. Cart contents and session identity are independent
/// pieces of state, composed here rather than coupled inside the cart.
#[derive(Debug, Default)]
pub struct CartStore {
    table: Option<TableId>,
    cart: Cart,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn table(&self) -> Option<&TableId> {
        self.table.as_ref()
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    /// Bind the session to a physical table.
    pub fn select_table(&mut self, table: TableId) {
        self.table = Some(table);
    }

    /// Add one unit of `product` to the cart.
    pub fn add_item(&mut self, product: Product) -> Result<AddOutcome, DomainError> {
        let cart = self.cart.with_added(product)?;
        self.cart = cart.clone();
        Ok(AddOutcome {
            cart,
            table_prompt: self.table.is_none(),
        })
    }

    /// Remove one unit of the product behind `product_id`.
    pub fn decrement_item(&mut self, product_id: &ProductId) -> Result<Cart, DomainError> {
        let cart = self.cart.with_decremented(product_id)?;
        self.cart = cart.clone();
        Ok(cart)
    }

    /// Confirm the current cart as an order, then reset the session.
    ///
    /// Requires a bound table and a non-empty cart; the returned ticket is
    /// the only surviving record of what was ordered.
    pub fn confirm_order(&mut self) -> Result<OrderTicket, DomainError> {
        let table = self
            .table
            .clone()
            .ok_or_else(|| DomainError::invariant("cannot confirm an order without a table"))?;

        if self.cart.is_empty() {
            return Err(DomainError::invariant(
                "cannot confirm an order with an empty cart",
            ));
        }

        let ticket = OrderTicket {
            order_id: OrderId::new(),
            table,
            lines: self.cart.lines().to_vec(),
            total: self.cart.total(),
            confirmed_at: Utc::now(),
        };

        info!(
            order_id = %ticket.order_id,
            table = %ticket.table,
            total = ticket.total,
            "order confirmed"
        );

        self.reset_session();
        Ok(ticket)
    }

    /// Clear the table binding and empty the cart, unconditionally.
    ///
    /// Idempotent; also the cancel path for an in-progress order.
    pub fn reset_session(&mut self) {
        self.table = None;
        self.cart = Cart::new();
    }
}
