//! Building quotation and cart payloads from derived quotes.

use crate::config::DEFAULT_DISCOUNT;
use crate::error::{QuoteError, Result};
use crate::model::{
    CartRequest, CutQuote, CutSpec, CutToSizeQuotationRequest, DerivedQuote, FullSheetQuote,
    FullSheetsQuotationRequest, PriceKeys, QuotationRequest, Selection,
};
use crate::pricing::compute_full_sheet_total;

fn require_text(field: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(QuoteError::MissingField {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

fn require_thickness(selection: &Selection) -> Result<f64> {
    require_text("thickness", &selection.thickness)?;
    selection
        .thickness_value()
        .filter(|t| *t > 0.0)
        .ok_or_else(|| QuoteError::validation("thickness", "Invalid numeric values"))
}

fn require_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QuoteError::validation(field, "Invalid numeric values"))
    }
}

/// Payload for a full-sheets quotation.
pub fn assemble_full_sheets_quotation(
    selection: &Selection,
    quote: &FullSheetQuote,
) -> Result<FullSheetsQuotationRequest> {
    let PriceKeys {
        product_price_id,
        product_detail_id,
        thickness_id,
        size_id,
    } = quote.keys;

    Ok(FullSheetsQuotationRequest {
        series: require_text("series", &selection.series)?,
        thickness: require_thickness(selection)?,
        size: require_text("size", &selection.size)?,
        quantity: quote.quantity,
        base_price: require_finite("basePrice", quote.unit_price)?,
        discount: quote.discount_percent,
        total_price: require_finite("totalPrice", quote.total_price)?,
        product_detail_id,
        thickness_id,
        size_id,
        product_price_id,
    })
}

/// Payload for a cut-to-size quotation.
pub fn assemble_cut_to_size_quotation(
    selection: &Selection,
    cut: &CutSpec,
    quote: &CutQuote,
) -> Result<CutToSizeQuotationRequest> {
    Ok(CutToSizeQuotationRequest {
        series: require_text("series", &selection.series)?,
        thickness: require_thickness(selection)?,
        size_full_sheet: require_text("size", &selection.size)?,
        cut_length: require_finite("cutLength", cut.cut_length)?,
        cut_width: require_finite("cutWidth", cut.cut_width)?,
        machining_cost: quote.machining_cost,
        cut_size_area: quote.cut_area,
        quantity_per_sheet: quote.pieces_per_sheet,
        num_full_sheets_required: quote.sheets_required,
        quantity: quote.quantity,
        base_price_full_sheet: require_finite("basePriceFullSheet", quote.unit_price_full_sheet)?,
        cut_to_size_price_per_unit: require_finite("cutToSizePricePerUnit", quote.price_per_unit)?,
        total_calculated_price: require_finite("totalCalculatedPrice", quote.total_price)?,
        product_detail_id: quote.keys.product_detail_id,
        product_price_id: quote.keys.product_price_id,
    })
}

/// Payload for whichever quote was derived.
///
/// Cut-to-size quotes need the cut request they were derived from.
pub fn assemble_quotation(
    selection: &Selection,
    cut: Option<&CutSpec>,
    quote: &DerivedQuote,
) -> Result<QuotationRequest> {
    match quote {
        DerivedQuote::FullSheet(q) => {
            assemble_full_sheets_quotation(selection, q).map(QuotationRequest::FullSheets)
        }
        DerivedQuote::CutToSize(q) => {
            let cut = cut.ok_or_else(|| QuoteError::MissingField {
                field: "cutLength".to_string(),
            })?;
            assemble_cut_to_size_quotation(selection, cut, q).map(QuotationRequest::CutToSize)
        }
    }
}

/// Cart line for a full-sheet quote. Discount defaults to zero.
pub fn assemble_cart_request(quote: &FullSheetQuote) -> CartRequest {
    CartRequest {
        product_price_id: quote.keys.product_price_id,
        quantity: quote.quantity,
        discount: quote.discount_percent.unwrap_or(DEFAULT_DISCOUNT),
    }
}

/// Recompute the total a saved full-sheets quotation should carry.
pub fn recompute_full_sheets_total(request: &FullSheetsQuotationRequest) -> Option<f64> {
    compute_full_sheet_total(request.base_price, request.quantity, request.discount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use pretty_assertions::assert_eq;

    fn keys() -> PriceKeys {
        PriceKeys {
            product_price_id: 40,
            product_detail_id: 10,
            thickness_id: 20,
            size_id: 30,
        }
    }

    fn full_quote(discount: Option<f64>, total: f64) -> FullSheetQuote {
        FullSheetQuote {
            unit_price: 100.0,
            quantity: 10,
            discount_percent: discount,
            total_price: total,
            keys: keys(),
        }
    }

    fn selection() -> Selection {
        Selection::new("A", "3mm", "1220x2420", 10)
    }

    // ==================== Full sheets ====================

    #[test]
    fn test_full_sheets_payload() {
        let request =
            assemble_full_sheets_quotation(&selection(), &full_quote(None, 1000.0)).unwrap();
        assert_eq!(
            request,
            FullSheetsQuotationRequest {
                series: "A".into(),
                thickness: 3.0,
                size: "1220x2420".into(),
                quantity: 10,
                base_price: 100.0,
                discount: None,
                total_price: 1000.0,
                product_detail_id: 10,
                thickness_id: 20,
                size_id: 30,
                product_price_id: 40,
            }
        );
    }

    #[test]
    fn test_full_sheets_payload_json_names() {
        let request =
            assemble_full_sheets_quotation(&selection(), &full_quote(Some(10.0), 900.0)).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["basePrice"], 100.0);
        assert_eq!(json["totalPrice"], 900.0);
        assert_eq!(json["productPriceId"], 40);
        assert_eq!(json["discount"], 10.0);
    }

    #[test]
    fn test_round_trip_total() {
        for (discount, total) in [(None, 1000.0), (Some(10.0), 900.0), (Some(12.5), 875.0)] {
            let request =
                assemble_full_sheets_quotation(&selection(), &full_quote(discount, total)).unwrap();
            let recomputed = recompute_full_sheets_total(&request).unwrap();
            assert!(approx_eq(recomputed, request.total_price));
        }
    }

    #[test]
    fn test_missing_series_rejected() {
        let blank = selection().with_series("");
        let err = assemble_full_sheets_quotation(&blank, &full_quote(None, 1000.0)).unwrap_err();
        assert!(matches!(err, QuoteError::MissingField { ref field } if field == "series"));
    }

    #[test]
    fn test_non_numeric_thickness_rejected() {
        let err = assemble_full_sheets_quotation(
            &selection().with_thickness("thin"),
            &full_quote(None, 1000.0),
        )
        .unwrap_err();
        assert!(matches!(err, QuoteError::Validation { .. }));
    }

    #[test]
    fn test_non_finite_total_rejected() {
        let err =
            assemble_full_sheets_quotation(&selection(), &full_quote(None, f64::NAN)).unwrap_err();
        assert!(matches!(err, QuoteError::Validation { .. }));
    }

    // ==================== Cut to size ====================

    #[test]
    fn test_cut_to_size_payload() {
        let cut = CutSpec::new(300.0, 300.0);
        let quote = CutQuote {
            cut_area: 90000.0,
            pieces_per_sheet: 32,
            sheets_required: 2,
            unit_price_full_sheet: 500.0,
            machining_cost: 0.0,
            quantity: 50,
            price_per_unit: 20.0,
            total_price: 1000.0,
            keys: keys(),
        };

        let derived = DerivedQuote::CutToSize(quote.clone());
        let request =
            assemble_quotation(&selection().with_quantity(50), Some(&cut), &derived).unwrap();
        assert_eq!(request.endpoint(), "quotations/cut-to-size");
        assert_eq!(request.total_price(), 1000.0);

        let QuotationRequest::CutToSize(body) = request else {
            panic!("Expected cut-to-size request");
        };
        assert_eq!(body.quantity_per_sheet, 32);
        assert_eq!(body.num_full_sheets_required, 2);
        assert_eq!(body.size_full_sheet, "1220x2420");
        assert_eq!(body.product_price_id, 40);

        let missing_cut = assemble_quotation(&selection(), None, &DerivedQuote::CutToSize(quote));
        assert!(missing_cut.is_err());
    }

    // ==================== Cart ====================

    #[test]
    fn test_cart_request_defaults_discount() {
        let cart = assemble_cart_request(&full_quote(None, 1000.0));
        assert_eq!(
            cart,
            CartRequest {
                product_price_id: 40,
                quantity: 10,
                discount: 0.0,
            }
        );
        assert_eq!(assemble_cart_request(&full_quote(Some(5.0), 950.0)).discount, 5.0);
    }
}
