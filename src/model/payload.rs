//! Request bodies sent to the quotation and cart endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /quotations/full-sheets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullSheetsQuotationRequest {
    pub series: String,
    pub thickness: f64,
    pub size: String,
    pub quantity: i64,
    pub base_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    pub total_price: f64,
    pub product_detail_id: i64,
    pub thickness_id: i64,
    pub size_id: i64,
    pub product_price_id: i64,
}

/// Body of `POST /quotations/cut-to-size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutToSizeQuotationRequest {
    pub series: String,
    pub thickness: f64,
    pub size_full_sheet: String,
    pub cut_length: f64,
    pub cut_width: f64,
    pub machining_cost: f64,
    pub cut_size_area: f64,
    pub quantity_per_sheet: u64,
    pub num_full_sheets_required: u64,
    pub quantity: i64,
    pub base_price_full_sheet: f64,
    pub cut_to_size_price_per_unit: f64,
    pub total_calculated_price: f64,
    pub product_detail_id: i64,
    pub product_price_id: i64,
}

/// Body of `POST /cart`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRequest {
    pub product_price_id: i64,
    pub quantity: i64,
    pub discount: f64,
}

/// An assembled quotation ready for submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuotationRequest {
    FullSheets(FullSheetsQuotationRequest),
    CutToSize(CutToSizeQuotationRequest),
}

impl QuotationRequest {
    /// Endpoint path relative to the API base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            QuotationRequest::FullSheets(_) => "quotations/full-sheets",
            QuotationRequest::CutToSize(_) => "quotations/cut-to-size",
        }
    }

    pub fn total_price(&self) -> f64 {
        match self {
            QuotationRequest::FullSheets(r) => r.total_price,
            QuotationRequest::CutToSize(r) => r.total_calculated_price,
        }
    }
}
