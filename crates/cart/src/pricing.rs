//! Pricing

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::cart::{Cart, CartLine};

/// Format a decimal amount in `currency`.
pub fn format_price(amount: Decimal, currency: &'static Currency) -> String {
    Money::from_decimal(amount, currency).to_string()
}

/// Formatted unit price and subtotal for a line.
pub fn line_prices(line: &CartLine, currency: &'static Currency) -> (String, String) {
    (
        format_price(line.product.price, currency),
        format_price(line.subtotal(), currency),
    )
}

/// Formatted cart total.
pub fn cart_total(cart: &Cart, currency: &'static Currency) -> String {
    format_price(cart.total(), currency)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use crate::products::{Product, ProductId};

    use super::*;

    #[test]
    fn empty_cart_total_is_zero() {
        let expected = Money::from_minor(0, iso::USD).to_string();

        assert_eq!(cart_total(&Cart::new(), iso::USD), expected);
    }

    #[test]
    fn line_prices_multiply_by_amount() {
        let line = CartLine {
            product: Product::new(ProductId(1), "Runner", Decimal::new(1999, 2), "r.jpg"),
            amount: 3,
        };

        let (unit, subtotal) = line_prices(&line, iso::USD);

        assert_eq!(unit, Money::from_minor(1999, iso::USD).to_string());
        assert_eq!(subtotal, Money::from_minor(5997, iso::USD).to_string());
    }
}
