//! Derived quotes. Always recomputed from their inputs, never edited.

use super::{PriceKeys, QuoteMode};
use serde::{Deserialize, Serialize};

/// Quote for whole sheets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullSheetQuote {
    /// Price of one sheet.
    pub unit_price: f64,
    /// Number of sheets.
    pub quantity: i64,
    /// Discount applied, if any.
    pub discount_percent: Option<f64>,
    /// Total after discount.
    pub total_price: f64,
    /// Keys of the matched price entry.
    pub keys: PriceKeys,
}

/// Quote for cut-to-size pieces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutQuote {
    /// Area of one cut piece.
    pub cut_area: f64,
    /// Pieces obtained from one full sheet.
    pub pieces_per_sheet: u64,
    /// Full sheets to buy for the requested pieces.
    pub sheets_required: u64,
    /// Price of one full sheet.
    pub unit_price_full_sheet: f64,
    /// Flat machining charge for the run.
    pub machining_cost: f64,
    /// Requested number of pieces.
    pub quantity: i64,
    /// Amortized price of one piece.
    pub price_per_unit: f64,
    /// Total for the run.
    pub total_price: f64,
    /// Keys of the matched price entry.
    pub keys: PriceKeys,
}

/// Either kind of derived quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum DerivedQuote {
    FullSheet(FullSheetQuote),
    CutToSize(CutQuote),
}

impl DerivedQuote {
    pub fn mode(&self) -> QuoteMode {
        match self {
            DerivedQuote::FullSheet(_) => QuoteMode::FullSheets,
            DerivedQuote::CutToSize(_) => QuoteMode::CutToSize,
        }
    }

    pub fn total_price(&self) -> f64 {
        match self {
            DerivedQuote::FullSheet(q) => q.total_price,
            DerivedQuote::CutToSize(q) => q.total_price,
        }
    }

    pub fn quantity(&self) -> i64 {
        match self {
            DerivedQuote::FullSheet(q) => q.quantity,
            DerivedQuote::CutToSize(q) => q.quantity,
        }
    }

    pub fn keys(&self) -> PriceKeys {
        match self {
            DerivedQuote::FullSheet(q) => q.keys,
            DerivedQuote::CutToSize(q) => q.keys,
        }
    }
}
