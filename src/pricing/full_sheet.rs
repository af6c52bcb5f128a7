//! Full-sheet total with optional percentage discount.

use crate::config::{float_cmp, MIN_QUANTITY};

/// Total price for `quantity` sheets at `unit_price`.
///
/// A positive discount is taken as a percentage of the pre-discount
/// subtotal. Returns `None` when the quantity is below the minimum, the
/// unit price is negative or not finite, or the discount lies outside
/// 0..=100 percent.
pub fn compute_full_sheet_total(
    unit_price: f64,
    quantity: i64,
    discount_percent: Option<f64>,
) -> Option<f64> {
    if quantity < MIN_QUANTITY || !float_cmp::is_non_negative(unit_price) {
        return None;
    }
    if discount_percent.is_some_and(|d| !(0.0..=100.0).contains(&d)) {
        return None;
    }

    let subtotal = unit_price * quantity as f64;

    match discount_percent {
        Some(discount) if discount > 0.0 => {
            Some(subtotal - subtotal * discount / 100.0)
        }
        _ => Some(subtotal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    #[test]
    fn test_total_without_discount() {
        assert_eq!(compute_full_sheet_total(100.0, 10, None), Some(1000.0));
        assert_eq!(compute_full_sheet_total(0.0, 3, None), Some(0.0));
    }

    #[test]
    fn test_total_with_discount() {
        assert_eq!(compute_full_sheet_total(100.0, 10, Some(10.0)), Some(900.0));
        let total = compute_full_sheet_total(37.5, 7, Some(12.5)).unwrap();
        assert!(approx_eq(total, 37.5 * 7.0 * (1.0 - 0.125)));
    }

    #[test]
    fn test_zero_discount_equals_no_discount() {
        for (price, qty) in [(100.0, 1), (12.34, 17), (999.99, 250)] {
            assert_eq!(
                compute_full_sheet_total(price, qty, Some(0.0)),
                compute_full_sheet_total(price, qty, None)
            );
        }
    }

    #[test]
    fn test_full_discount() {
        assert_eq!(compute_full_sheet_total(100.0, 4, Some(100.0)), Some(0.0));
    }

    #[test]
    fn test_discount_out_of_range_is_undefined() {
        assert_eq!(compute_full_sheet_total(100.0, 4, Some(150.0)), None);
        assert_eq!(compute_full_sheet_total(100.0, 4, Some(-5.0)), None);
        assert_eq!(compute_full_sheet_total(100.0, 4, Some(f64::NAN)), None);
        assert_eq!(compute_full_sheet_total(100.0, 4, Some(f64::INFINITY)), None);
    }

    #[test]
    fn test_quantity_below_minimum_is_undefined() {
        assert_eq!(compute_full_sheet_total(100.0, 0, None), None);
        assert_eq!(compute_full_sheet_total(100.0, -3, Some(10.0)), None);
    }

    #[test]
    fn test_invalid_unit_price_is_undefined() {
        assert_eq!(compute_full_sheet_total(-1.0, 2, None), None);
        assert_eq!(compute_full_sheet_total(f64::NAN, 2, None), None);
    }
}
