//! sheet-quote-rs - Price lookup and quotation engine for plastic sheets.
//!
//! This library derives quotes for two kinds of orders against a grade's
//! price table:
//!
//! - **Full sheets**: unit price × quantity, less an optional percentage discount.
//! - **Cut to size**: pieces are packed on full sheets, and the cost of the
//!   sheets plus a once-per-run machining charge is spread over the pieces.
//!
//! Derived quotes can be assembled into backend payloads and submitted once.
//!
//! # Example
//!
//! ```no_run
//! use sheet_quote_rs::{parse_price_file, derive_quote, Selection, CutSpec};
//! use std::path::Path;
//!
//! let table = parse_price_file(Path::new("prices.json")).unwrap();
//! let selection = Selection::new("A", "3mm", "1220x2420", 50);
//! let cut = CutSpec::new(300.0, 300.0);
//! if let Some(quote) = derive_quote(&selection, Some(&cut), &table) {
//!     println!("{:.2}", quote.total_price());
//! }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod pricing;
pub mod quotation;
pub mod validation;

// Re-exports for convenience
pub use config::BackendConfig;
pub use error::{QuoteError, Result};
pub use generator::render_summary;
pub use model::{
    CutQuote, CutSpec, DerivedQuote, FullSheetQuote, PriceEntry, PriceTable, ProductDetail,
    QuoteMode, Selection, SheetSize,
};
pub use parser::parse_price_file;
pub use pricing::{
    compute_cut_pricing, compute_full_sheet_total, compute_pieces_per_sheet,
    compute_sheets_required, derive_quote, find_price, PriceLookup,
};
pub use quotation::{HttpBackend, QuotationBackend, QuoteSession, SubmissionOutcome};
pub use validation::{validate_request, ValidationResult};

/// Load a price table and derive a quote from it.
///
/// This is the main high-level function:
/// 1. Parse the price table file
/// 2. Validate the selection and cut request
/// 3. Derive the quote
///
/// Validation errors are returned; warnings are logged. A selection with no
/// matching price yields `Ok(None)`.
pub fn quote_from_price_file(
    path: &std::path::Path,
    selection: &Selection,
    cut: Option<&CutSpec>,
) -> Result<Option<DerivedQuote>> {
    let table = parse_price_file(path)?;

    let validation = validate_request(selection, cut);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    if let Some(issue) = validation.errors.into_iter().next() {
        return Err(QuoteError::validation(issue.field, issue.message));
    }

    let quote = derive_quote(selection, cut, &table);
    if quote.is_none() {
        tracing::info!(
            "No quote for series={} thickness={} size={}",
            selection.series,
            selection.thickness,
            selection.size
        );
    }

    Ok(quote)
}
