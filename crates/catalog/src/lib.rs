//! `tableside-catalog` — the menu catalog collaborator.
//!
//! Wire types for the upstream catalog API, the async [`Catalog`] fetch
//! interface with HTTP and in-memory implementations, and [`MenuState`],
//! the product list the menu screen renders from.

pub mod client;
pub mod menu;
pub mod product;

pub use client::{Catalog, CatalogError, HttpCatalog, InMemoryCatalog};
pub use menu::{FetchTag, MenuState};
pub use product::{Category, Product};
