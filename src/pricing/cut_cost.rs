//! Cut-to-size cost amortization.

use crate::config::{float_cmp, MIN_QUANTITY};
use serde::{Deserialize, Serialize};

/// Amortized price of a cut-to-size run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutPricing {
    /// Cost of all full sheets consumed.
    pub total_sheet_cost: f64,
    /// Sheet cost plus the machining charge.
    pub total_cost: f64,
    /// Total cost spread over the requested pieces.
    pub price_per_unit: f64,
    /// `price_per_unit * quantity`, equal to `total_cost`.
    pub total_price: f64,
}

/// Spread sheet cost and a once-per-run machining charge over `quantity` pieces.
///
/// Returns `None` unless quantity and sheets are at least one, the sheet
/// price is a finite non-negative number and the machining cost is not
/// negative.
pub fn compute_cut_pricing(
    full_sheet_unit_price: f64,
    sheets_required: u64,
    machining_cost: f64,
    quantity: i64,
) -> Option<CutPricing> {
    if quantity < MIN_QUANTITY
        || sheets_required == 0
        || !float_cmp::is_non_negative(full_sheet_unit_price)
        || !float_cmp::is_non_negative(machining_cost)
    {
        return None;
    }

    let total_sheet_cost = full_sheet_unit_price * sheets_required as f64;
    let total_cost = total_sheet_cost + machining_cost;
    let price_per_unit = total_cost / quantity as f64;

    Some(CutPricing {
        total_sheet_cost,
        total_cost,
        price_per_unit,
        total_price: price_per_unit * quantity as f64,
    })
}
