use std::io::Write;

use crate::error::Result;
use crate::io::csv_write::format_price;
use crate::model::{ProductId, ProductStore};

/// Writes a human-readable block per product: name, description, price, then
/// every review in insertion order, separated by blank lines.
pub fn write_listing<W: Write>(
    store: &ProductStore,
    ids: &[ProductId],
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Products:")?;
    for id in ids {
        let product = store.require(*id)?;
        writeln!(out, "Name: {}", product.name())?;
        writeln!(out, "Description: {}", product.description())?;
        writeln!(out, "Price: ${}", format_price(product.price()))?;
        writeln!(out, "Reviews:")?;
        for review in product.reviews() {
            writeln!(out, "{review}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
