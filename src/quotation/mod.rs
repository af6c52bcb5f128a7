//! Quotation assembly and submission.

mod assemble;
mod backend;
mod session;
mod submit;

pub use assemble::{
    assemble_cart_request, assemble_cut_to_size_quotation, assemble_full_sheets_quotation,
    assemble_quotation, recompute_full_sheets_total,
};
pub use backend::{error_message, HttpBackend, QuotationBackend};
pub use session::QuoteSession;
pub use submit::{interpret_created, submit_cart, submit_quotation, SubmissionOutcome};
