//! Price lookup and quote calculators.

mod cut_cost;
mod derive;
mod full_sheet;
mod lookup;
mod packing;

pub use cut_cost::{compute_cut_pricing, CutPricing};
pub use derive::{
    derive_cut_quote, derive_full_sheet_quote, derive_quote, full_sheet_price, matched_price,
};
pub use full_sheet::compute_full_sheet_total;
pub use lookup::{combination_exists, find_price, PriceLookup};
pub use packing::{
    compute_cut_area, compute_pieces_per_sheet, compute_sheets_required, layout_sheet, SheetLayout,
};
