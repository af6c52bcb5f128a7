//! Quote derivation pipeline.
//!
//! Every derived value is recomputed from the current selection, cut
//! request and price table. Nothing is cached between calls.

use super::cut_cost::compute_cut_pricing;
use super::full_sheet::compute_full_sheet_total;
use super::lookup::find_price;
use super::packing::{compute_cut_area, compute_sheets_required, layout_sheet};
use crate::model::{
    CutQuote, CutSpec, DerivedQuote, FullSheetQuote, PriceEntry, PriceTable, Selection, SheetSize,
};

/// Matched price entry for the selection's series, thickness and size.
pub fn matched_price<'a>(selection: &Selection, table: &'a PriceTable) -> Option<&'a PriceEntry> {
    if !selection.has_specification() {
        return None;
    }
    find_price(table, &selection.series, &selection.thickness, &selection.size).entry()
}

/// Full sheet price for the selection, available before a quantity is entered.
pub fn full_sheet_price(selection: &Selection, table: &PriceTable) -> Option<f64> {
    matched_price(selection, table).map(|entry| entry.price)
}

/// Derive a full-sheet quote.
pub fn derive_full_sheet_quote(
    selection: &Selection,
    table: &PriceTable,
) -> Option<FullSheetQuote> {
    if !selection.is_complete() {
        return None;
    }

    let entry = matched_price(selection, table)?;
    let total_price =
        compute_full_sheet_total(entry.price, selection.quantity, selection.discount_percent)?;

    Some(FullSheetQuote {
        unit_price: entry.price,
        quantity: selection.quantity,
        discount_percent: selection.discount_percent.filter(|d| *d > 0.0),
        total_price,
        keys: entry.keys(),
    })
}

/// Derive a cut-to-size quote.
///
/// Sheet dimensions come from the selected size label.
pub fn derive_cut_quote(
    selection: &Selection,
    cut: &CutSpec,
    table: &PriceTable,
) -> Option<CutQuote> {
    if !selection.is_complete() {
        return None;
    }

    let entry = matched_price(selection, table)?;
    let sheet = SheetSize::parse(&selection.size).ok()?;
    let cut_area = compute_cut_area(cut.cut_length, cut.cut_width)?;

    let layout = layout_sheet(sheet, cut.cut_length, cut.cut_width);
    let pieces_per_sheet = layout.pieces();
    let Some(sheets_required) = compute_sheets_required(selection.quantity, pieces_per_sheet) else {
        tracing::debug!(
            "Cut {}x{} does not fit on sheet {}",
            cut.cut_length,
            cut.cut_width,
            sheet
        );
        return None;
    };

    let machining_cost = cut.machining_cost();
    let pricing = compute_cut_pricing(
        entry.price,
        sheets_required,
        machining_cost,
        selection.quantity,
    )?;

    Some(CutQuote {
        cut_area,
        pieces_per_sheet,
        sheets_required,
        unit_price_full_sheet: entry.price,
        machining_cost,
        quantity: selection.quantity,
        price_per_unit: pricing.price_per_unit,
        total_price: pricing.total_price,
        keys: entry.keys(),
    })
}

/// Derive whichever quote the inputs describe.
///
/// A cut request selects cut-to-size pricing; without one the selection is
/// priced as full sheets. `None` while any required input is missing.
pub fn derive_quote(
    selection: &Selection,
    cut: Option<&CutSpec>,
    table: &PriceTable,
) -> Option<DerivedQuote> {
    match cut {
        Some(cut) => derive_cut_quote(selection, cut, table).map(DerivedQuote::CutToSize),
        None => derive_full_sheet_quote(selection, table).map(DerivedQuote::FullSheet),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::model::{PriceKeys, ProductDetail, QuoteMode};
    use pretty_assertions::assert_eq;

    fn table(price: f64) -> PriceTable {
        PriceTable::new(
            vec![ProductDetail { id: 1, series: "A".into() }],
            vec![PriceEntry {
                id: 5,
                product_detail_id: 1,
                thickness_id: 2,
                thickness_name: "3mm".into(),
                size_id: 3,
                length: 1220,
                breadth: 2420,
                price,
            }],
        )
    }

    fn keys() -> PriceKeys {
        PriceKeys {
            product_price_id: 5,
            product_detail_id: 1,
            thickness_id: 2,
            size_id: 3,
        }
    }

    // ==================== Full sheets ====================

    #[test]
    fn test_full_sheet_scenario() {
        let table = table(100.0);
        let selection = Selection::new("A", "3mm", "1220x2420", 10);

        let quote = derive_full_sheet_quote(&selection, &table).unwrap();
        assert_eq!(
            quote,
            FullSheetQuote {
                unit_price: 100.0,
                quantity: 10,
                discount_percent: None,
                total_price: 1000.0,
                keys: keys(),
            }
        );

        let discounted =
            derive_full_sheet_quote(&selection.with_discount(Some(10.0)), &table).unwrap();
        assert_eq!(discounted.total_price, 900.0);
        assert_eq!(discounted.discount_percent, Some(10.0));
    }

    #[test]
    fn test_full_sheet_discount_above_hundred_is_undefined() {
        let table = table(100.0);
        let selection = Selection::new("A", "3mm", "1220x2420", 10).with_discount(Some(120.0));
        assert_eq!(derive_quote(&selection, None, &table), None);
    }

    #[test]
    fn test_full_sheet_undefined_without_quantity() {
        let table = table(100.0);
        let selection = Selection::new("A", "3mm", "1220x2420", 0);
        assert_eq!(derive_full_sheet_quote(&selection, &table), None);
        // The sheet price is still known
        assert_eq!(full_sheet_price(&selection, &table), Some(100.0));
    }

    #[test]
    fn test_full_sheet_lookup_miss_is_blank() {
        let table = table(100.0);
        let selection = Selection::new("A", "5mm", "1220x2420", 10);
        assert_eq!(derive_full_sheet_quote(&selection, &table), None);
        assert_eq!(full_sheet_price(&selection, &table), None);
    }

    // ==================== Cut to size ====================

    #[test]
    fn test_cut_scenario() {
        let table = table(500.0);
        let selection = Selection::new("A", "3mm", "1220x2420", 50);
        let cut = CutSpec::new(300.0, 300.0);

        let quote = derive_cut_quote(&selection, &cut, &table).unwrap();
        assert_eq!(quote.pieces_per_sheet, 32);
        assert_eq!(quote.sheets_required, 2);
        assert_eq!(quote.cut_area, 90000.0);
        assert_eq!(quote.machining_cost, 0.0);
        assert!(approx_eq(quote.price_per_unit, 20.0));
        assert!(approx_eq(quote.total_price, 1000.0));
        assert_eq!(quote.keys, keys());
    }

    #[test]
    fn test_cut_with_machining() {
        let table = table(500.0);
        let selection = Selection::new("A", "3mm", "1220x2420", 100);
        let cut = CutSpec::new(300.0, 300.0).with_machining_cost(Some(50.0));

        let quote = derive_cut_quote(&selection, &cut, &table).unwrap();
        assert_eq!(quote.sheets_required, 4);
        assert!(approx_eq(quote.price_per_unit, 20.5));
        assert!(approx_eq(quote.total_price, 2050.0));
    }

    #[test]
    fn test_cut_too_small_to_count_is_blank() {
        let table = table(500.0);
        let selection = Selection::new("A", "3mm", "1220x2420", 10);
        let cut = CutSpec::new(1e-9, 1e-9);
        assert_eq!(derive_quote(&selection, Some(&cut), &table), None);
    }

    #[test]
    fn test_cut_too_large_is_undefined() {
        let table = table(500.0);
        let selection = Selection::new("A", "3mm", "1220x2420", 10);
        let cut = CutSpec::new(1300.0, 300.0);
        assert_eq!(derive_cut_quote(&selection, &cut, &table), None);
    }

    #[test]
    fn test_cut_negative_machining_is_undefined() {
        let table = table(500.0);
        let selection = Selection::new("A", "3mm", "1220x2420", 10);
        let cut = CutSpec::new(300.0, 300.0).with_machining_cost(Some(-5.0));
        assert_eq!(derive_cut_quote(&selection, &cut, &table), None);
    }

    // ==================== Pipeline ====================

    #[test]
    fn test_derive_quote_picks_mode() {
        let table = table(500.0);
        let selection = Selection::new("A", "3mm", "1220x2420", 50);
        let cut = CutSpec::new(300.0, 300.0);

        let full = derive_quote(&selection, None, &table).unwrap();
        assert_eq!(full.mode(), QuoteMode::FullSheets);
        assert_eq!(full.total_price(), 25000.0);

        let cut_quote = derive_quote(&selection, Some(&cut), &table).unwrap();
        assert_eq!(cut_quote.mode(), QuoteMode::CutToSize);
        assert!(approx_eq(cut_quote.total_price(), 1000.0));
    }

    #[test]
    fn test_derive_is_recomputed_from_inputs() {
        let table = table(100.0);
        let first = Selection::new("A", "3mm", "1220x2420", 10);
        let second = first.clone().with_quantity(20);

        let a = derive_quote(&first, None, &table).unwrap();
        let b = derive_quote(&second, None, &table).unwrap();
        assert_eq!(a.total_price(), 1000.0);
        assert_eq!(b.total_price(), 2000.0);
        assert_eq!(derive_quote(&first, None, &table).unwrap(), a);
    }
}
