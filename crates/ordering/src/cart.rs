//! The cart value and its line-aggregation rules.

use serde::{Deserialize, Serialize};

use tableside_catalog::Product;
use tableside_core::{DomainError, ProductId, ValueObject};

/// One product and its quantity within a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Always ≥ 1; a line that would drop to zero is removed instead.
    pub quantity: u32,
}

impl ValueObject for CartLine {}

/// Ordered collection of cart lines for one table session.
///
/// Insertion order is render order: the first add of a product appends its
/// line at the end, and later increments or decrements never move a line.
/// At most one line exists per distinct product identifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl ValueObject for Cart {}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Quantity currently in the cart for a product; 0 when absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.lines
            .iter()
            .find(|line| &line.product.id == product_id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Add one unit of `product`.
    ///
    /// A product not yet in the cart gets a fresh line at the end; a
    /// product already present has its quantity bumped in place. Products
    /// arriving off the wire with an empty `_id` are rejected rather than
    /// aggregated under a shared blank key.
    pub fn with_added(&self, product: Product) -> Result<Cart, DomainError> {
        if product.id.is_empty() {
            return Err(DomainError::invalid_product("product id must not be empty"));
        }

        let mut lines = self.lines.clone();
        match lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => lines.push(CartLine {
                product,
                quantity: 1,
            }),
        }
        Ok(Cart { lines })
    }

    /// Remove one unit of the product behind `product_id`.
    ///
    /// Dropping from quantity 1 removes the line; the remaining lines keep
    /// their order. Decrementing a product with no line is a caller
    /// contract violation and fails with [`DomainError::LineNotFound`].
    pub fn with_decremented(&self, product_id: &ProductId) -> Result<Cart, DomainError> {
        let index = self
            .lines
            .iter()
            .position(|line| &line.product.id == product_id)
            .ok_or_else(|| DomainError::LineNotFound(product_id.clone()))?;

        let mut lines = self.lines.clone();
        if lines[index].quantity == 1 {
            lines.remove(index);
        } else {
            lines[index].quantity -= 1;
        }
        Ok(Cart { lines })
    }

    /// Sum of quantity × price across all lines; 0 for an empty cart.
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| f64::from(line.quantity) * line.product.price)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.parse().unwrap(),
            name: id.to_string(),
            description: String::new(),
            price,
            image_path: format!("{id}.png"),
        }
    }

    fn pid(id: &str) -> ProductId {
        id.parse().unwrap()
    }

    #[test]
    fn adding_a_new_product_appends_a_line_at_the_end() {
        let cart = Cart::new()
            .with_added(product("p-a", 10.0))
            .unwrap()
            .with_added(product("p-b", 5.5))
            .unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].product.id, pid("p-a"));
        assert_eq!(cart.lines()[1].product.id, pid("p-b"));
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn adding_the_same_product_twice_bumps_quantity_not_lines() {
        let cart = Cart::new()
            .with_added(product("p-a", 10.0))
            .unwrap()
            .with_added(product("p-a", 10.0))
            .unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn increment_does_not_move_the_line() {
        let cart = Cart::new()
            .with_added(product("p-a", 10.0))
            .unwrap()
            .with_added(product("p-b", 5.5))
            .unwrap()
            .with_added(product("p-a", 10.0))
            .unwrap();

        assert_eq!(cart.lines()[0].product.id, pid("p-a"));
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].product.id, pid("p-b"));
    }

    #[test]
    fn mutations_leave_the_original_snapshot_untouched() {
        let before = Cart::new().with_added(product("p-a", 10.0)).unwrap();
        let after = before.with_added(product("p-a", 10.0)).unwrap();

        assert_eq!(before.quantity_of(&pid("p-a")), 1);
        assert_eq!(after.quantity_of(&pid("p-a")), 2);
        assert_ne!(before, after);
    }

    #[test]
    fn decrementing_a_quantity_one_line_removes_it() {
        let cart = Cart::new()
            .with_added(product("p-a", 10.0))
            .unwrap()
            .with_added(product("p-b", 5.5))
            .unwrap()
            .with_decremented(&pid("p-a"))
            .unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product.id, pid("p-b"));
    }

    #[test]
    fn decrementing_a_larger_line_keeps_its_position() {
        let cart = Cart::new()
            .with_added(product("p-a", 10.0))
            .unwrap()
            .with_added(product("p-a", 10.0))
            .unwrap()
            .with_added(product("p-b", 5.5))
            .unwrap()
            .with_decremented(&pid("p-a"))
            .unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].product.id, pid("p-a"));
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[1].product.id, pid("p-b"));
    }

    #[test]
    fn decrement_on_a_missing_line_is_line_not_found() {
        let cart = Cart::new().with_added(product("p-a", 10.0)).unwrap();

        let err = cart.with_decremented(&pid("p-ghost")).unwrap_err();
        match err {
            DomainError::LineNotFound(id) => assert_eq!(id, pid("p-ghost")),
            other => panic!("expected LineNotFound, got {other:?}"),
        }
    }

    #[test]
    fn a_product_with_an_empty_wire_id_is_rejected() {
        // The API's serde shape does not validate `_id`; the cart does.
        let ghost: Product = serde_json::from_value(json!({
            "_id": "",
            "name": "ghost",
            "description": "",
            "price": 1.0,
            "imagePath": "",
        }))
        .unwrap();

        let err = Cart::new().with_added(ghost).unwrap_err();
        assert!(matches!(err, DomainError::InvalidProduct(_)));
    }

    #[test]
    fn total_of_an_empty_cart_is_zero() {
        assert_eq!(Cart::new().total(), 0.0);
    }

    #[test]
    fn worked_scenario_matches_expected_totals() {
        // A @ 10.00 twice, B @ 5.50 once, then A decremented away.
        let cart = Cart::new().with_added(product("p-a", 10.0)).unwrap();
        assert_eq!(cart.total(), 10.0);

        let cart = cart.with_added(product("p-a", 10.0)).unwrap();
        assert_eq!(cart.total(), 20.0);

        let cart = cart.with_added(product("p-b", 5.5)).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 25.5);

        let cart = cart
            .with_decremented(&pid("p-a"))
            .unwrap()
            .with_decremented(&pid("p-a"))
            .unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product.id, pid("p-b"));
        assert_eq!(cart.total(), 5.5);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        // Prices in multiples of 0.25 are exact in binary, so total
        // comparisons need no tolerance.
        fn nth_product(n: u8) -> Product {
            product(&format!("p-{n}"), f64::from(n) * 0.25 + 1.0)
        }

        fn first_add_order(ids: &[u8]) -> Vec<u8> {
            let mut distinct = Vec::new();
            for id in ids {
                if !distinct.contains(id) {
                    distinct.push(*id);
                }
            }
            distinct
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// One line per distinct product, quantity = add count, lines
            /// ordered by first add.
            #[test]
            fn adds_collapse_to_one_line_per_product(
                ids in proptest::collection::vec(0u8..8, 0..40)
            ) {
                let mut cart = Cart::new();
                for id in &ids {
                    cart = cart.with_added(nth_product(*id)).unwrap();
                }

                let distinct = first_add_order(&ids);
                prop_assert_eq!(cart.len(), distinct.len());

                for (line, id) in cart.lines().iter().zip(distinct.iter()) {
                    let expected_id = format!("p-{id}");
                    prop_assert_eq!(line.product.id.as_str(), expected_id.as_str());

                    let count = ids.iter().filter(|x| *x == id).count() as u32;
                    prop_assert_eq!(line.quantity, count);
                }
            }

            /// Total is the linear sum over lines, which equals the sum of
            /// every added unit's price.
            #[test]
            fn total_is_linear_in_added_units(
                ids in proptest::collection::vec(0u8..8, 0..40)
            ) {
                let mut cart = Cart::new();
                let mut unit_sum = 0.0;
                for id in &ids {
                    let p = nth_product(*id);
                    unit_sum += p.price;
                    cart = cart.with_added(p).unwrap();
                }

                let line_sum: f64 = cart
                    .lines()
                    .iter()
                    .map(|line| f64::from(line.quantity) * line.product.price)
                    .sum();

                prop_assert_eq!(cart.total(), line_sum);
                prop_assert_eq!(cart.total(), unit_sum);
            }

            /// Decrementing every added unit drains the cart, never passing
            /// through a zero-quantity line.
            #[test]
            fn decrements_reverse_adds(
                ids in proptest::collection::vec(0u8..8, 1..30)
            ) {
                let mut cart = Cart::new();
                for id in &ids {
                    cart = cart.with_added(nth_product(*id)).unwrap();
                }

                for id in first_add_order(&ids) {
                    let product_id = cart.lines()
                        .iter()
                        .find(|line| line.product.id.as_str() == format!("p-{id}"))
                        .map(|line| line.product.id.clone())
                        .unwrap();
                    let count = ids.iter().filter(|x| **x == id).count();

                    for _ in 0..count {
                        cart = cart.with_decremented(&product_id).unwrap();
                        for line in cart.lines() {
                            prop_assert!(line.quantity >= 1);
                        }
                    }
                    prop_assert_eq!(cart.quantity_of(&product_id), 0);
                }

                prop_assert!(cart.is_empty());
                prop_assert_eq!(cart.total(), 0.0);
            }
        }
    }
}
