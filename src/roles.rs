//! The people who interact with the catalog.
//!
//! Customers only write reviews. Market researchers and executives both hold
//! product handles through [`ProductCollection`]; executives additionally list,
//! reprice, and export the products they hold.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::io::competitor::{self, CompetitorFile};
use crate::io::csv_write::{self, ExportSummary};
use crate::listing;
use crate::model::{ProductId, ProductStore};

/// File the executive re-exports to after every price change.
pub const DEFAULT_EXPORT_FILE: &str = "data.csv";

/// A named participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Capability shared by every role that tracks products.
pub trait ProductCollection {
    /// Appends `id`. Handles already present are not deduplicated.
    fn add_product(&mut self, id: ProductId);

    /// Tracked handles in insertion order.
    fn product_ids(&self) -> &[ProductId];
}

/// Writes reviews signed with the customer's name.
#[derive(Debug, Clone)]
pub struct Customer {
    user: User,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            user: User::new(name),
        }
    }

    pub fn name(&self) -> &str {
        self.user.name()
    }

    /// Formats `text` as `"<name>: <text>"`.
    pub fn format_review(&self, text: &str) -> String {
        format!("{}: {}", self.user.name(), text)
    }

    #[instrument(level = "debug", skip_all, fields(customer = %self.user.name(), %product))]
    pub fn write_review(
        &self,
        store: &mut ProductStore,
        product: ProductId,
        text: &str,
    ) -> Result<()> {
        let review = self.format_review(text);
        let target = store.require_mut(product)?;
        target.add_review(review);
        debug!(review_count = target.reviews().len(), "review added");
        Ok(())
    }
}

/// Tracks products without managing them.
#[derive(Debug, Clone, Default)]
pub struct MarketResearcher {
    products: Vec<ProductId>,
}

impl MarketResearcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductCollection for MarketResearcher {
    fn add_product(&mut self, id: ProductId) {
        self.products.push(id);
    }

    fn product_ids(&self) -> &[ProductId] {
        &self.products
    }
}

/// Outcome of [`Executive::change_price`].
///
/// The new price is applied before the export runs, so it stands even when
/// `export` holds an error.
#[derive(Debug)]
pub struct PriceChange {
    pub product: ProductId,
    pub name: String,
    pub price: f64,
    pub export: Result<ExportSummary>,
}

/// Manages the products it holds and keeps the export file in step with
/// every price change.
#[derive(Debug, Clone)]
pub struct Executive {
    user: User,
    products: Vec<ProductId>,
    export_path: PathBuf,
}

impl Executive {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_export_path(name, DEFAULT_EXPORT_FILE)
    }

    pub fn with_export_path(name: impl Into<String>, export_path: impl Into<PathBuf>) -> Self {
        Self {
            user: User::new(name),
            products: Vec::new(),
            export_path: export_path.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.user.name()
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// Writes the human-readable listing of every held product.
    pub fn view_products<W: Write>(&self, store: &ProductStore, out: &mut W) -> Result<()> {
        listing::write_listing(store, &self.products, out)
    }

    /// Rewrites `path` with the held products and their reviews.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn write_data_to_csv(
        &self,
        store: &ProductStore,
        path: impl AsRef<Path>,
    ) -> Result<ExportSummary> {
        let summary = csv_write::write_catalog(path.as_ref(), store, &self.products)?;
        info!(
            products = summary.products,
            rows = summary.rows,
            "catalog exported"
        );
        Ok(summary)
    }

    /// Sets the price of `product`, then re-exports the whole catalog to the
    /// configured export path.
    #[instrument(level = "info", skip_all, fields(%product, price = price))]
    pub fn change_price(
        &self,
        store: &mut ProductStore,
        product: ProductId,
        price: f64,
    ) -> Result<PriceChange> {
        let target = store.require_mut(product)?;
        target.set_price(price);
        let name = target.name().to_string();
        info!(%name, "price updated");

        let export = self.write_data_to_csv(store, &self.export_path);

        Ok(PriceChange {
            product,
            name,
            price,
            export,
        })
    }

    /// Reads `<base>.csv` for echoing to the console.
    pub fn competitor_content(&self, base: impl AsRef<Path>) -> Result<CompetitorFile> {
        competitor::read_competitor_file(base.as_ref())
    }
}

impl ProductCollection for Executive {
    fn add_product(&mut self, id: ProductId) {
        self.products.push(id);
    }

    fn product_ids(&self) -> &[ProductId] {
        &self.products
    }
}
