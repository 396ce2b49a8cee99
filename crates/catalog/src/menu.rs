//! Product list state with a stale-response guard.
//!
//! Category switches race: two in-flight fetches can complete out of order
//! and leave the screen showing products from a category the user already
//! left. Every selection bumps a monotonic epoch and hands the caller a
//! [`FetchTag`]; a completion presenting an older tag is discarded, so the
//! displayed list always reflects the most recent selection. Results apply
//! atomically; there is no partial-update visibility.

use tracing::{debug, warn};

use tableside_core::CategoryId;

use crate::client::{Catalog, CatalogError};
use crate::product::{Category, Product};

/// Ties an in-flight fetch to the selection that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTag {
    epoch: u64,
}

/// The product list the menu screen renders from.
#[derive(Debug, Default)]
pub struct MenuState {
    categories: Vec<Category>,
    selection: Option<CategoryId>,
    products: Vec<Product>,
    epoch: u64,
    loading: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Currently selected category; `None` means the full menu.
    pub fn selection(&self) -> Option<&CategoryId> {
        self.selection.as_ref()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record a new selection (`None` = all products) and hand out the tag
    /// the eventual completion must present.
    pub fn select(&mut self, category: Option<CategoryId>) -> FetchTag {
        self.epoch += 1;
        self.selection = category;
        self.loading = true;
        FetchTag { epoch: self.epoch }
    }

    /// Apply a completed fetch. Returns `false` when the tag is stale and
    /// the result was discarded.
    ///
    /// A failed fetch renders as an empty product list; there is no retry
    /// at this layer.
    pub fn complete(
        &mut self,
        tag: FetchTag,
        outcome: Result<Vec<Product>, CatalogError>,
    ) -> bool {
        if tag.epoch != self.epoch {
            warn!(
                tag = tag.epoch,
                current = self.epoch,
                "discarding stale catalog response"
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(products) => {
                debug!(count = products.len(), "menu updated");
                self.products = products;
            }
            Err(err) => {
                warn!(%err, "catalog fetch failed; showing empty menu");
                self.products = Vec::new();
            }
        }
        true
    }

    /// Select a category and fetch it in one step.
    ///
    /// Convenience for callers that await each fetch before starting the
    /// next; racing callers should drive `select`/`complete` from their own
    /// tasks.
    pub async fn refresh<C>(&mut self, catalog: &C, category: Option<CategoryId>) -> bool
    where
        C: Catalog + ?Sized,
    {
        let tag = self.select(category);
        let outcome = match self.selection.clone() {
            Some(id) => catalog.list_by_category(&id).await,
            None => catalog.list_all().await,
        };
        self.complete(tag, outcome)
    }
}
