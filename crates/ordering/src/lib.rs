//! `tableside-ordering` — cart aggregation for one table session.
//!
//! The cart is an immutable value: every mutation returns a fresh snapshot,
//! so the presentation layer can rely on reference distinctness for change
//! detection. [`CartStore`] owns the current snapshot plus the table
//! binding and enforces the session state machine.

pub mod cart;
pub mod store;

pub use cart::{Cart, CartLine};
pub use store::{AddOutcome, CartStore, OrderTicket};
