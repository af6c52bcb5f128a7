//! User input for a quote: the sheet specification and the cut request.

use crate::config::{DEFAULT_MACHINING_COST, MIN_QUANTITY, THICKNESS_SUFFIX};
use serde::{Deserialize, Serialize};

/// Which quote the user is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteMode {
    /// Whole sheets at the list price.
    #[default]
    FullSheets,
    /// Custom pieces cut from full sheets.
    CutToSize,
}

impl std::fmt::Display for QuoteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteMode::FullSheets => write!(f, "full-sheets"),
            QuoteMode::CutToSize => write!(f, "cut-to-size"),
        }
    }
}

/// Sheet specification chosen by the user.
///
/// Treated as an immutable value: every edit produces a new `Selection`
/// through the `with_*` methods.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Series name.
    pub series: String,
    /// Thickness label, e.g. "3mm".
    pub thickness: String,
    /// Size label, e.g. "1220x2420".
    pub size: String,
    /// Requested quantity (sheets or cut pieces); 0 when not entered.
    pub quantity: i64,
    /// Optional percentage discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
}

impl Selection {
    pub fn new(
        series: impl Into<String>,
        thickness: impl Into<String>,
        size: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            series: series.into(),
            thickness: thickness.into(),
            size: size.into(),
            quantity,
            discount_percent: None,
        }
    }

    pub fn with_series(self, series: impl Into<String>) -> Self {
        Self {
            series: series.into(),
            ..self
        }
    }

    pub fn with_thickness(self, thickness: impl Into<String>) -> Self {
        Self {
            thickness: thickness.into(),
            ..self
        }
    }

    pub fn with_size(self, size: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            ..self
        }
    }

    pub fn with_quantity(self, quantity: i64) -> Self {
        Self { quantity, ..self }
    }

    pub fn with_discount(self, discount_percent: Option<f64>) -> Self {
        Self {
            discount_percent,
            ..self
        }
    }

    /// Series, thickness and size are all chosen.
    pub fn has_specification(&self) -> bool {
        !self.series.is_empty() && !self.thickness.is_empty() && !self.size.is_empty()
    }

    /// Quantity meets the minimum.
    pub fn has_valid_quantity(&self) -> bool {
        self.quantity >= MIN_QUANTITY
    }

    /// Everything needed to derive a quote is present.
    pub fn is_complete(&self) -> bool {
        self.has_specification() && self.has_valid_quantity()
    }

    /// Numeric thickness with the "mm" suffix stripped, if it parses.
    pub fn thickness_value(&self) -> Option<f64> {
        let trimmed = self.thickness.trim();
        let number = trimmed.strip_suffix(THICKNESS_SUFFIX).unwrap_or(trimmed);
        number.trim().parse::<f64>().ok().filter(|t| t.is_finite())
    }
}

/// Requested cut piece and machining charge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutSpec {
    /// Cut piece length (along the sheet length).
    pub cut_length: f64,
    /// Cut piece width (along the sheet breadth).
    pub cut_width: f64,
    /// Flat machining charge for the whole run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machining_cost: Option<f64>,
}

impl CutSpec {
    pub fn new(cut_length: f64, cut_width: f64) -> Self {
        Self {
            cut_length,
            cut_width,
            machining_cost: None,
        }
    }

    pub fn with_machining_cost(self, machining_cost: Option<f64>) -> Self {
        Self {
            machining_cost,
            ..self
        }
    }

    /// Machining cost, defaulting to zero when absent.
    pub fn machining_cost(&self) -> f64 {
        self.machining_cost.unwrap_or(DEFAULT_MACHINING_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completeness() {
        let selection = Selection::new("A", "3mm", "1220x2420", 0);
        assert!(selection.has_specification());
        assert!(!selection.is_complete());
        assert!(selection.with_quantity(1).is_complete());
        assert!(!Selection::default().with_quantity(5).is_complete());
    }

    #[test]
    fn test_with_methods_replace_single_field() {
        let base = Selection::new("A", "3mm", "1220x2420", 10);
        let changed = base.clone().with_series("B");
        assert_eq!(changed.series, "B");
        assert_eq!(changed.thickness, base.thickness);
        assert_eq!(changed.quantity, base.quantity);
    }

    #[test]
    fn test_thickness_value() {
        assert_eq!(Selection::default().with_thickness("3mm").thickness_value(), Some(3.0));
        assert_eq!(Selection::default().with_thickness("2.5").thickness_value(), Some(2.5));
        assert_eq!(Selection::default().with_thickness("thin").thickness_value(), None);
    }

    #[test]
    fn test_machining_cost_defaults_to_zero() {
        assert_eq!(CutSpec::new(300.0, 300.0).machining_cost(), 0.0);
        assert_eq!(
            CutSpec::new(300.0, 300.0)
                .with_machining_cost(Some(50.0))
                .machining_cost(),
            50.0
        );
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(QuoteMode::FullSheets.to_string(), "full-sheets");
        assert_eq!(QuoteMode::CutToSize.to_string(), "cut-to-size");
    }
}
