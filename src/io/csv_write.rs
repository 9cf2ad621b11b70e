use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};

use crate::error::{Result, ToolError};
use crate::model::{ProductId, ProductStore};

/// Header row of every catalog export.
pub const HEADER: [&str; 4] = ["Name", "Description", "Price", "Review"];

/// Describes a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub products: usize,
    /// Data rows written after the header: one per product plus one per review.
    pub rows: usize,
}

/// Truncates `path` and writes the products behind `ids` in order, each
/// followed by its reviews in their own rows.
///
/// Fields are written without quoting, so commas or newlines inside names,
/// descriptions, or reviews end up in the file unescaped.
pub fn write_catalog(
    path: &Path,
    store: &ProductStore,
    ids: &[ProductId],
) -> Result<ExportSummary> {
    // Resolve every handle before touching the file so a bad handle leaves the
    // previous export intact.
    let products = ids
        .iter()
        .map(|id| store.require(*id))
        .collect::<Result<Vec<_>>>()?;

    let file = File::create(path).map_err(|source| ToolError::file_open(path, source))?;
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(file);

    writer.write_record(HEADER)?;

    let mut rows = 0;
    for product in &products {
        let price = format_price(product.price());
        writer.write_record([product.name(), product.description(), price.as_str(), ""])?;
        rows += 1;

        for review in product.reviews() {
            writer.write_record(["", "", "", review.as_str()])?;
            rows += 1;
        }
    }

    writer.flush()?;

    Ok(ExportSummary {
        path: path.to_path_buf(),
        products: products.len(),
        rows,
    })
}

/// Shortest decimal form of the price: `9.99`, `10`, `0.5`.
pub fn format_price(price: f64) -> String {
    price.to_string()
}
