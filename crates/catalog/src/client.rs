//! Catalog fetch interface and implementations.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use tableside_core::CategoryId;

use crate::product::{Category, Product};

/// Errors from the catalog collaborator.
///
/// All of these are recoverable at the UI boundary: the menu renders an
/// empty state and the user can switch categories to fetch again. No retry
/// or backoff at this layer.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network-level failure (connect, timeout, send).
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("api error {0}: {1}")]
    Api(u16, String),

    /// The response body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Source of products and categories.
///
/// Stateless fetch interface: no caching, results are whatever the source
/// currently holds.
#[async_trait]
pub trait Catalog {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError>;

    async fn list_all(&self) -> Result<Vec<Product>, CatalogError>;

    async fn list_by_category(
        &self,
        category: &CategoryId,
    ) -> Result<Vec<Product>, CatalogError>;
}

/// HTTP catalog client.
pub struct HttpCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Base URL from `TABLESIDE_API_URL`, falling back to the dev default.
    pub fn from_env() -> Self {
        let base_url = std::env::var("TABLESIDE_API_URL").unwrap_or_else(|_| {
            tracing::warn!("TABLESIDE_API_URL not set; using http://localhost:3001");
            "http://localhost:3001".to_string()
        });
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, CatalogError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "catalog fetch");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CatalogError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        resp.json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.get_json("/categories").await
    }

    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json("/products").await
    }

    async fn list_by_category(
        &self,
        category: &CategoryId,
    ) -> Result<Vec<Product>, CatalogError> {
        self.get_json(&format!("/categories/{}/products", category))
            .await
    }
}

/// Fixed product list, for tests and offline development.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    categories: Vec<Category>,
    products: Vec<(CategoryId, Product)>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_product(mut self, category: CategoryId, product: Product) -> Self {
        self.products.push((category, product));
        self
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.clone())
    }

    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.iter().map(|(_, p)| p.clone()).collect())
    }

    async fn list_by_category(
        &self,
        category: &CategoryId,
    ) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .filter(|(c, _)| c == category)
            .map(|(_, p)| p.clone())
            .collect())
    }
}
