//! Validation of user input before pricing and submission.

mod validate;

pub use validate::{
    quick_validate, validate_cut_spec, validate_request, validate_selection, FieldIssue,
    ValidationResult,
};
