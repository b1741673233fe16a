//! Cart

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Errors raised when a list of lines cannot form a cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartIntegrityError {
    /// A line carries a quantity of zero.
    #[error("product {0} has a zero amount")]
    ZeroAmount(ProductId),

    /// Two lines refer to the same product.
    #[error("product {0} appears more than once")]
    DuplicateProduct(ProductId),
}

/// One product entry in the cart.
///
/// Serialized flat, with the catalog attributes alongside `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog data captured when the product was added
    #[serde(flatten)]
    pub product: Product,

    /// Quantity, always at least one
    pub amount: u32,
}

impl CartLine {
    /// Create a line holding a single unit of `product`.
    pub fn new(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    /// Product identifier for this line.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price multiplied by quantity.
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.amount)
    }
}

/// Ordered list of cart lines, unique by product.
///
/// Values are never mutated in place; every change builds a new cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing lines.
    ///
    /// # Errors
    ///
    /// Returns a [`CartIntegrityError`] if a line has a zero amount or a product appears twice.
    pub fn from_lines(lines: impl Into<Vec<CartLine>>) -> Result<Self, CartIntegrityError> {
        let lines = lines.into();
        let mut seen = FxHashSet::default();

        for line in &lines {
            if line.amount == 0 {
                return Err(CartIntegrityError::ZeroAmount(line.product_id()));
            }

            if !seen.insert(line.product_id()) {
                return Err(CartIntegrityError::DuplicateProduct(line.product_id()));
            }
        }

        Ok(Self { lines })
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Find the line for a product.
    pub fn get(&self, product: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == product)
    }

    /// Check if the cart holds a line for a product.
    pub fn contains(&self, product: ProductId) -> bool {
        self.get(product).is_some()
    }

    /// Quantity held for a product, zero when absent.
    pub fn amount_of(&self, product: ProductId) -> u32 {
        self.get(product).map_or(0, |line| line.amount)
    }

    /// Sum of quantities across all lines.
    pub fn total_amount(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.amount)).sum()
    }

    /// Sum of line subtotals.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// A copy of this cart with `line` appended, or merged into the existing line for the
    /// same product.
    #[must_use]
    pub fn with_line(&self, line: CartLine) -> Self {
        let mut lines = self.lines.clone();

        match lines
            .iter_mut()
            .find(|existing| existing.product_id() == line.product_id())
        {
            Some(existing) => *existing = line,
            None => lines.push(line),
        }

        Self { lines }
    }

    /// A copy of this cart without the line for `product`.
    #[must_use]
    pub fn without(&self, product: ProductId) -> Self {
        Self {
            lines: self
                .lines
                .iter()
                .filter(|line| line.product_id() != product)
                .cloned()
                .collect(),
        }
    }

    /// A copy of this cart with the quantity for `product` replaced.
    ///
    /// Other lines, and the catalog data of the matching line, are left untouched.
    #[must_use]
    pub fn with_amount(&self, product: ProductId, amount: u32) -> Self {
        Self {
            lines: self
                .lines
                .iter()
                .map(|line| {
                    if line.product_id() == product {
                        CartLine {
                            amount,
                            ..line.clone()
                        }
                    } else {
                        line.clone()
                    }
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let lines = Vec::<CartLine>::deserialize(deserializer)?;

        Cart::from_lines(lines).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn sneaker(id: u64, price_cents: i64) -> Product {
        Product::new(
            ProductId(id),
            format!("Sneaker {id}"),
            Decimal::new(price_cents, 2),
            format!("https://example.com/{id}.jpg"),
        )
    }

    fn line(id: u64, amount: u32) -> CartLine {
        CartLine {
            product: sneaker(id, 139_90),
            amount,
        }
    }

    #[test]
    fn from_lines_rejects_zero_amount() {
        let result = Cart::from_lines([line(1, 0)]);

        assert_eq!(result, Err(CartIntegrityError::ZeroAmount(ProductId(1))));
    }

    #[test]
    fn from_lines_rejects_duplicate_products() {
        let result = Cart::from_lines([line(1, 1), line(2, 1), line(1, 3)]);

        assert_eq!(
            result,
            Err(CartIntegrityError::DuplicateProduct(ProductId(1)))
        );
    }

    #[test]
    fn with_line_appends_new_products() -> TestResult {
        let cart = Cart::from_lines([line(1, 1)])?;

        let next = cart.with_line(line(2, 1));

        assert_eq!(cart.len(), 1, "original cart is left untouched");
        assert_eq!(next.len(), 2);
        assert_eq!(
            next.iter().map(CartLine::product_id).collect::<Vec<_>>(),
            [ProductId(1), ProductId(2)]
        );

        Ok(())
    }

    #[test]
    fn with_line_merges_existing_product() -> TestResult {
        let cart = Cart::from_lines([line(1, 1), line(2, 1)])?;

        let next = cart.with_line(line(1, 4));

        assert_eq!(next.len(), 2);
        assert_eq!(next.amount_of(ProductId(1)), 4);

        Ok(())
    }

    #[test]
    fn without_removes_only_matching_line() -> TestResult {
        let cart = Cart::from_lines([line(1, 1), line(2, 3), line(3, 2)])?;

        let next = cart.without(ProductId(2));

        assert_eq!(next.lines(), [line(1, 1), line(3, 2)]);

        Ok(())
    }

    #[test]
    fn with_amount_replaces_quantity_only() -> TestResult {
        let cart = Cart::from_lines([line(1, 1), line(2, 1)])?;

        let next = cart.with_amount(ProductId(2), 5);

        assert_eq!(next.get(ProductId(1)), cart.get(ProductId(1)));
        assert_eq!(
            next.get(ProductId(2)).map(|l| &l.product),
            cart.get(ProductId(2)).map(|l| &l.product)
        );
        assert_eq!(next.amount_of(ProductId(2)), 5);

        Ok(())
    }

    #[test]
    fn totals_sum_quantities_and_subtotals() -> TestResult {
        let cart = Cart::from_lines([
            CartLine {
                product: sneaker(1, 100_00),
                amount: 2,
            },
            CartLine {
                product: sneaker(2, 59_90),
                amount: 1,
            },
        ])?;

        assert_eq!(cart.total_amount(), 3);
        assert_eq!(cart.total(), Decimal::new(259_90, 2));

        Ok(())
    }

    #[test]
    fn amount_of_missing_product_is_zero() {
        assert_eq!(Cart::new().amount_of(ProductId(9)), 0);
    }

    #[test]
    fn deserialize_enforces_integrity() {
        let raw = r#"[
            {"id": 1, "title": "A", "price": "10.00", "image": "a.jpg", "amount": 1},
            {"id": 1, "title": "A", "price": "10.00", "image": "a.jpg", "amount": 2}
        ]"#;

        let result = serde_json::from_str::<Cart>(raw);

        assert!(result.is_err(), "duplicate lines should not decode");
    }
}
