//! Cart rendering.

use std::io;

use cartstore::{
    Cart,
    pricing::{cart_total, line_prices},
};
use rusty_money::iso::Currency;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

/// Write the cart as a table followed by its total.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_cart(
    out: &mut impl io::Write,
    cart: &Cart,
    currency: &'static Currency,
) -> io::Result<()> {
    if cart.is_empty() {
        return writeln!(out, "Cart is empty");
    }

    let mut builder = Builder::default();

    builder.push_record(["#", "Product", "Unit price", "Qty", "Subtotal"]);

    for line in cart {
        let (unit, subtotal) = line_prices(line, currency);

        builder.push_record([
            line.product_id().to_string(),
            line.product.title.clone(),
            unit,
            line.amount.to_string(),
            subtotal,
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(
        out,
        "Items: {}  Total: {}",
        cart.total_amount(),
        cart_total(cart, currency)
    )
}
