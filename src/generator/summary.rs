//! Plain-text quotation summary.

use crate::model::{CutQuote, CutSpec, DerivedQuote, FullSheetQuote, Selection};
use std::fmt::Write;

/// Format an amount with two decimals.
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Render a derived quote as a short text block.
pub fn render_summary(
    selection: &Selection,
    cut: Option<&CutSpec>,
    quote: &DerivedQuote,
) -> String {
    let mut output = String::new();

    writeln!(output, "Mode: {}", quote.mode()).unwrap();
    writeln!(output, "Series: {}", selection.series).unwrap();
    writeln!(output, "Thickness: {}", selection.thickness).unwrap();

    match quote {
        DerivedQuote::FullSheet(q) => render_full_sheet(&mut output, selection, q),
        DerivedQuote::CutToSize(q) => render_cut(&mut output, selection, cut, q),
    }

    output
}

fn render_full_sheet(output: &mut String, selection: &Selection, quote: &FullSheetQuote) {
    writeln!(output, "Size: {}", selection.size).unwrap();
    writeln!(output, "Quantity: {}", quote.quantity).unwrap();
    writeln!(output, "Unit price: {}", format_money(quote.unit_price)).unwrap();

    let subtotal = quote.unit_price * quote.quantity as f64;
    writeln!(
        output,
        "Subtotal: {} x {} = {}",
        format_money(quote.unit_price),
        quote.quantity,
        format_money(subtotal)
    )
    .unwrap();
    if let Some(discount) = quote.discount_percent {
        writeln!(
            output,
            "Discount ({}%): {}",
            discount,
            format_money(subtotal * discount / 100.0)
        )
        .unwrap();
    }
    writeln!(output, "Total price: {}", format_money(quote.total_price)).unwrap();
}

fn render_cut(
    output: &mut String,
    selection: &Selection,
    cut: Option<&CutSpec>,
    quote: &CutQuote,
) {
    writeln!(output, "Sheet size: {}", selection.size).unwrap();
    if let Some(cut) = cut {
        writeln!(output, "Cut size: {}x{}", cut.cut_length, cut.cut_width).unwrap();
    }
    writeln!(output, "Cut area: {}", format_money(quote.cut_area)).unwrap();
    writeln!(output, "Pieces per sheet: {}", quote.pieces_per_sheet).unwrap();
    writeln!(output, "Sheets required: {}", quote.sheets_required).unwrap();
    writeln!(
        output,
        "Full sheet price: {}",
        format_money(quote.unit_price_full_sheet)
    )
    .unwrap();
    writeln!(output, "Machining cost: {}", format_money(quote.machining_cost)).unwrap();
    writeln!(output, "Quantity: {}", quote.quantity).unwrap();
    writeln!(
        output,
        "Price per unit: ({} x {} + {}) / {} = {}",
        format_money(quote.unit_price_full_sheet),
        quote.sheets_required,
        format_money(quote.machining_cost),
        quote.quantity,
        format_money(quote.price_per_unit)
    )
    .unwrap();
    writeln!(
        output,
        "Total price: {} x {} = {}",
        format_money(quote.price_per_unit),
        quote.quantity,
        format_money(quote.total_price)
    )
    .unwrap();
}
