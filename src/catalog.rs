use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{Result, ToolError};
use crate::model::{ProductId, ProductSeed, ProductStore};
use crate::roles::{Executive, MarketResearcher, ProductCollection};

/// Name the executive role signs in with.
pub const EXECUTIVE_NAME: &str = "Executive";

/// Everything a session works on: the product store plus the two roles that
/// track its products.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub store: ProductStore,
    pub executive: Executive,
    pub researcher: MarketResearcher,
}

impl Catalog {
    /// Creates every seeded product and registers it with both the executive
    /// and the researcher, in seed order.
    pub fn from_seeds(seeds: Vec<ProductSeed>, export_path: impl Into<PathBuf>) -> Self {
        let mut store = ProductStore::new();
        let mut executive = Executive::with_export_path(EXECUTIVE_NAME, export_path);
        let mut researcher = MarketResearcher::new();

        for seed in seeds {
            debug!(name = %seed.name, price = seed.price, "seeding product");
            let id = store.insert(seed.into_product());
            executive.add_product(id);
            researcher.add_product(id);
        }
        info!(product_count = store.len(), "catalog seeded");

        Self {
            store,
            executive,
            researcher,
        }
    }

    /// Handles the executive manages, in display order.
    pub fn product_ids(&self) -> &[ProductId] {
        self.executive.product_ids()
    }

    /// Resolves a 1-based product number as shown to console users.
    pub fn product_at(&self, number: usize) -> Result<ProductId> {
        let ids = self.product_ids();
        number
            .checked_sub(1)
            .and_then(|index| ids.get(index))
            .copied()
            .ok_or(ToolError::InvalidProductNumber {
                number,
                available: ids.len(),
            })
    }
}
