//! Quote session: current input, derived quote and submission.

use super::assemble::{assemble_cart_request, assemble_quotation};
use super::backend::QuotationBackend;
use super::submit::{submit_cart, submit_quotation, SubmissionOutcome};
use crate::error::{QuoteError, Result};
use crate::model::{CutSpec, DerivedQuote, PriceTable, QuoteMode, Selection};
use crate::pricing::{derive_quote, full_sheet_price};
use crate::validation::{quick_validate, validate_request, ValidationResult};

/// Input state of one quoting session.
///
/// Inputs are replaced wholesale; derived values are computed on demand
/// from the current inputs and never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteSession {
    mode: QuoteMode,
    selection: Selection,
    cut: CutSpec,
}

impl QuoteSession {
    pub fn new(mode: QuoteMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> QuoteMode {
        self.mode
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cut(&self) -> &CutSpec {
        &self.cut
    }

    /// Replace the selection.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Replace the cut request.
    pub fn set_cut(&mut self, cut: CutSpec) {
        self.cut = cut;
    }

    /// Switch between full sheets and cut-to-size. Clears all input.
    pub fn switch_mode(&mut self, mode: QuoteMode) {
        *self = Self::new(mode);
    }

    /// Clear all input, keeping the mode.
    pub fn reset(&mut self) {
        self.switch_mode(self.mode);
    }

    fn cut_for_mode(&self) -> Option<&CutSpec> {
        match self.mode {
            QuoteMode::FullSheets => None,
            QuoteMode::CutToSize => Some(&self.cut),
        }
    }

    /// Field validation for the current input.
    pub fn validate(&self) -> ValidationResult {
        validate_request(&self.selection, self.cut_for_mode())
    }

    /// Derive the quote for the current input.
    pub fn derive(&self, table: &PriceTable) -> Option<DerivedQuote> {
        derive_quote(&self.selection, self.cut_for_mode(), table)
    }

    /// Price of one full sheet for the current specification.
    pub fn full_sheet_price(&self, table: &PriceTable) -> Option<f64> {
        full_sheet_price(&self.selection, table)
    }

    fn require_quote(&self, table: &PriceTable) -> Result<DerivedQuote> {
        quick_validate(&self.selection, self.cut_for_mode())?;
        self.derive(table).ok_or_else(|| {
            QuoteError::validation("selection", "Product configuration not found")
        })
    }

    /// Validate, derive, assemble and submit the quotation once.
    ///
    /// A saved quotation clears the session. Backend failures are returned
    /// as errors and leave the input in place for another attempt.
    pub fn submit<B: QuotationBackend + ?Sized>(
        &mut self,
        table: &PriceTable,
        backend: &B,
    ) -> Result<SubmissionOutcome> {
        let quote = self.require_quote(table)?;
        let request = assemble_quotation(&self.selection, self.cut_for_mode(), &quote)?;
        let outcome = submit_quotation(backend, &request)?;

        if outcome.is_saved() {
            self.reset();
        }

        Ok(outcome)
    }

    /// Add the current full-sheet selection to the cart.
    pub fn add_to_cart<B: QuotationBackend + ?Sized>(
        &self,
        table: &PriceTable,
        backend: &B,
    ) -> Result<()> {
        match self.require_quote(table)? {
            DerivedQuote::FullSheet(quote) => {
                submit_cart(backend, &assemble_cart_request(&quote))?;
                Ok(())
            }
            DerivedQuote::CutToSize(_) => Err(QuoteError::validation(
                "mode",
                "Only full sheets can be added to the cart",
            )),
        }
    }
}
