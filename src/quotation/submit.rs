//! Fire-once submission of assembled quotations.

use super::backend::QuotationBackend;
use crate::error::Result;
use crate::model::{CartRequest, QuotationRequest};
use serde_json::Value;

/// What the backend said after accepting a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Created record with its identifier.
    Saved { id: String },
    /// Accepted, but the response carried no usable `id`.
    SavedUnexpectedFormat,
}

impl SubmissionOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmissionOutcome::Saved { .. })
    }

    /// Message shown to the user.
    pub fn message(&self, what: &str) -> String {
        match self {
            SubmissionOutcome::Saved { id } => {
                format!("{} saved successfully! Quotation ID: {}", what, id)
            }
            SubmissionOutcome::SavedUnexpectedFormat => {
                "Quotation saved but response format unexpected. Please check quotations history."
                    .to_string()
            }
        }
    }
}

/// Read the created record's `id`.
pub fn interpret_created(response: &Value) -> SubmissionOutcome {
    match response.get("id") {
        Some(Value::Number(id)) => SubmissionOutcome::Saved { id: id.to_string() },
        Some(Value::String(id)) if !id.is_empty() => SubmissionOutcome::Saved { id: id.clone() },
        _ => SubmissionOutcome::SavedUnexpectedFormat,
    }
}

/// Submit a quotation once. Backend errors are returned unchanged.
pub fn submit_quotation<B: QuotationBackend + ?Sized>(
    backend: &B,
    request: &QuotationRequest,
) -> Result<SubmissionOutcome> {
    tracing::info!(
        "Submitting quotation to {} (total {:.2})",
        request.endpoint(),
        request.total_price()
    );

    let response = backend.create_quotation(request)?;
    let outcome = interpret_created(&response);

    if !outcome.is_saved() {
        tracing::warn!("Quotation response has no id: {}", response);
    }

    Ok(outcome)
}

/// Submit a cart line once.
pub fn submit_cart<B: QuotationBackend + ?Sized>(
    backend: &B,
    request: &CartRequest,
) -> Result<Value> {
    tracing::info!(
        "Adding price {} x{} to cart",
        request.product_price_id,
        request.quantity
    );
    backend.add_to_cart(request)
}
