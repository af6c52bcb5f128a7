//! Price table loading.

use crate::error::{QuoteError, Result};
use crate::model::PriceTable;
use std::path::Path;

/// Parse a price table from JSON text.
///
/// The document holds the grade's `productDetails` and `prices` arrays in
/// the backend's field naming.
pub fn parse_price_table(content: &str, path: &Path) -> Result<PriceTable> {
    let table: PriceTable = serde_json::from_str(content).map_err(|source| QuoteError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let orphans = table
        .prices
        .iter()
        .filter(|p| table.find_product_detail(p.product_detail_id).is_none())
        .count();
    if orphans > 0 {
        tracing::warn!(
            "{} price(s) in {} reference unknown product details",
            orphans,
            path.display()
        );
    }

    Ok(table)
}

/// Load a price table from a JSON file.
pub fn parse_price_file(path: &Path) -> Result<PriceTable> {
    if !path.exists() {
        return Err(QuoteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(QuoteError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_price_table(&content, path)
}
