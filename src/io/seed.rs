use std::fs;
use std::path::Path;

use crate::error::{Result, ToolError};
use crate::model::ProductSeed;

/// Loads product seeds from a JSON array such as
/// `[{"name": "Widget", "description": "A widget", "price": 9.99}]`.
pub fn read_seeds(path: &Path) -> Result<Vec<ProductSeed>> {
    let source = fs::read_to_string(path).map_err(|source| ToolError::file_open(path, source))?;
    parse_seeds(&source)
}

/// Parses seeds from JSON text, rejecting entries without a name.
pub fn parse_seeds(source: &str) -> Result<Vec<ProductSeed>> {
    let seeds: Vec<ProductSeed> = serde_json::from_str(source)?;

    for (index, seed) in seeds.iter().enumerate() {
        if seed.name.trim().is_empty() {
            return Err(ToolError::InvalidSeed {
                index,
                reason: "name must not be empty".into(),
            });
        }
    }

    Ok(seeds)
}
