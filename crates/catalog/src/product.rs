//! Wire types served by the catalog API.

use serde::{Deserialize, Serialize};

use tableside_core::{CategoryId, Entity, ProductId};

/// A menu category (`GET /categories` element).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub name: String,
}

/// A menu product as served by the catalog API.
///
/// Immutable from the cart's perspective; the catalog owns it. `price` is a
/// currency-agnostic numeric unit; rounding and formatting are the
/// presentation layer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "imagePath")]
    pub image_path: String,
}

impl Product {
    /// Resolve the relative image path against the API base URL.
    ///
    /// Images are served from the API's upload directory; this layer never
    /// fetches them itself.
    pub fn image_url(&self, base_url: &str) -> String {
        format!(
            "{}/uploads/{}",
            base_url.trim_end_matches('/'),
            self.image_path
        )
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_deserializes_from_api_shape() {
        let product: Product = serde_json::from_value(json!({
            "_id": "6372e05b1f2a7a3b9c5d8e01",
            "name": "Quatro queijos",
            "description": "Pizza de quatro queijos com borda tradicional",
            "price": 40.0,
            "imagePath": "quatro-queijos.png",
        }))
        .unwrap();

        assert_eq!(product.id.as_str(), "6372e05b1f2a7a3b9c5d8e01");
        assert_eq!(product.price, 40.0);
        assert_eq!(product.image_path, "quatro-queijos.png");
    }

    #[test]
    fn image_url_resolves_against_base() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p1",
            "name": "Coca cola",
            "description": "Lata gelada",
            "price": 7.0,
            "imagePath": "coca-cola.png",
        }))
        .unwrap();

        assert_eq!(
            product.image_url("http://localhost:3001/"),
            "http://localhost:3001/uploads/coca-cola.png"
        );
    }
}
