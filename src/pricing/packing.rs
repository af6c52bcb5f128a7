//! Cut-to-size packing: pieces per sheet and sheets to buy.
//!
//! Pieces are laid out on an axis-aligned grid with the cut length along the
//! sheet length and the cut width along the sheet breadth. Pieces are never
//! rotated.

use crate::config::{float_cmp, MIN_QUANTITY};
use crate::model::SheetSize;
use serde::{Deserialize, Serialize};

/// Grid of cut pieces on one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Pieces along the sheet length.
    pub across: u64,
    /// Pieces along the sheet breadth.
    pub down: u64,
}

impl SheetLayout {
    /// Pieces on the sheet, `None` when the count does not fit in a `u64`.
    pub fn checked_pieces(&self) -> Option<u64> {
        self.across.checked_mul(self.down)
    }

    /// Pieces on the sheet. An unrepresentable count is treated as zero.
    pub fn pieces(&self) -> u64 {
        self.checked_pieces().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.pieces() == 0
    }
}

fn fit(sheet: f64, cut: f64) -> u64 {
    if !float_cmp::is_positive(sheet) || !float_cmp::is_positive(cut) {
        return 0;
    }
    (sheet / cut).floor() as u64
}

/// Lay out cut pieces on a sheet.
pub fn layout_sheet(sheet: SheetSize, cut_length: f64, cut_width: f64) -> SheetLayout {
    SheetLayout {
        across: fit(sheet.length, cut_length),
        down: fit(sheet.breadth, cut_width),
    }
}

/// Number of `cut_length` x `cut_width` pieces one sheet yields.
///
/// Zero when either cut dimension exceeds the sheet or is not positive, and
/// when the cut is so small that the count overflows.
pub fn compute_pieces_per_sheet(
    sheet_length: f64,
    sheet_breadth: f64,
    cut_length: f64,
    cut_width: f64,
) -> u64 {
    layout_sheet(SheetSize::new(sheet_length, sheet_breadth), cut_length, cut_width).pieces()
}

/// Full sheets needed for `total_quantity` pieces.
///
/// `None` when no piece fits on a sheet or the quantity is below the minimum.
pub fn compute_sheets_required(total_quantity: i64, pieces_per_sheet: u64) -> Option<u64> {
    if pieces_per_sheet == 0 || total_quantity < MIN_QUANTITY {
        return None;
    }
    Some((total_quantity as u64).div_ceil(pieces_per_sheet))
}

/// Area of one cut piece, when both dimensions are positive.
pub fn compute_cut_area(cut_length: f64, cut_width: f64) -> Option<f64> {
    if float_cmp::is_positive(cut_length) && float_cmp::is_positive(cut_width) {
        Some(cut_length * cut_width)
    } else {
        None
    }
}
