//! Input validation for quote requests.

use crate::config::{float_cmp, MIN_QUANTITY};
use crate::error::{QuoteError, Result};
use crate::model::{CutSpec, Selection, SheetSize};
use crate::pricing::layout_sheet;

/// An error attached to one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Name of the offending field.
    pub field: &'static str,
    /// Message shown next to the field.
    pub message: String,
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Field errors; any error blocks submission.
    pub errors: Vec<FieldIssue>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(field: &'static str, message: impl Into<String>) -> Self {
        let mut result = Self::ok();
        result.add_error(field, message);
        result
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldIssue {
            field,
            message: message.into(),
        });
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }

    /// First error reported for a field.
    pub fn error_for(&self, field: &str) -> Option<&FieldIssue> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Validate the sheet specification, quantity and discount.
pub fn validate_selection(selection: &Selection) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if selection.series.trim().is_empty() {
        result.add_error("series", "Series is required");
    }

    if selection.thickness.trim().is_empty() {
        result.add_error("thickness", "Thickness is required");
    } else if selection.thickness_value().is_none() {
        result.add_warning(format!(
            "Thickness '{}' has no numeric value",
            selection.thickness
        ));
    }

    if selection.size.trim().is_empty() {
        result.add_error("size", "Size is required");
    } else if SheetSize::parse(&selection.size).is_err() {
        result.add_error(
            "size",
            format!("Size '{}' is not in <length>x<breadth> form", selection.size),
        );
    }

    if selection.quantity < MIN_QUANTITY {
        result.add_error("quantity", format!("Quantity must be at least {}", MIN_QUANTITY));
    }

    if let Some(discount) = selection.discount_percent {
        if !discount.is_finite() || !(0.0..=100.0).contains(&discount) {
            result.add_error("discount", "Discount must be between 0 and 100 percent");
        }
    }

    result
}

/// Validate a cut request, optionally against the selected sheet.
pub fn validate_cut_spec(cut: &CutSpec, sheet: Option<SheetSize>) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !float_cmp::is_positive(cut.cut_length) {
        result.add_error("cut_length", "Cut length must be greater than 0");
    }

    if !float_cmp::is_positive(cut.cut_width) {
        result.add_error("cut_width", "Cut width must be greater than 0");
    }

    if let Some(machining_cost) = cut.machining_cost {
        if !float_cmp::is_non_negative(machining_cost) {
            result.add_error("machining_cost", "Machining cost cannot be negative");
        }
    }

    if let Some(sheet) = sheet {
        let layout = layout_sheet(sheet, cut.cut_length, cut.cut_width);
        if result.passed && layout.checked_pieces().is_none() {
            result.add_error(
                "cut_length",
                format!(
                    "Cut {}x{} is too small for a {} sheet",
                    cut.cut_length, cut.cut_width, sheet
                ),
            );
        } else if cut.cut_length > sheet.length || cut.cut_width > sheet.breadth {
            result.add_warning(format!(
                "Cut {}x{} does not fit on a {} sheet",
                cut.cut_length, cut.cut_width, sheet
            ));
        }
    }

    result
}

/// Validate a full request: the selection plus the cut, if any.
pub fn validate_request(selection: &Selection, cut: Option<&CutSpec>) -> ValidationResult {
    let mut result = validate_selection(selection);

    if let Some(cut) = cut {
        let sheet = SheetSize::parse(&selection.size).ok();
        result.merge(validate_cut_spec(cut, sheet));
    }

    result
}

/// Fail with the first field error, if any.
pub fn quick_validate(selection: &Selection, cut: Option<&CutSpec>) -> Result<()> {
    let result = validate_request(selection, cut);

    match result.errors.into_iter().next() {
        Some(issue) => Err(QuoteError::validation(issue.field, issue.message)),
        None => Ok(()),
    }
}
