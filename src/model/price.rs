//! Price table entries as served by the backend.

use crate::config::SIZE_SEPARATOR;
use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};

/// Price of one full sheet for a series/thickness/size combination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    /// Product price identifier.
    pub id: i64,
    /// Owning product detail (series) identifier.
    pub product_detail_id: i64,
    /// Thickness identifier.
    pub thickness_id: i64,
    /// Thickness label, e.g. "3mm".
    pub thickness_name: String,
    /// Size identifier.
    pub size_id: i64,
    /// Sheet length.
    pub length: u32,
    /// Sheet breadth.
    pub breadth: u32,
    /// Price of one full sheet.
    pub price: f64,
}

impl PriceEntry {
    /// Size label in the "{length}x{breadth}" form used by the selection.
    pub fn size_label(&self) -> String {
        format!("{}{}{}", self.length, SIZE_SEPARATOR, self.breadth)
    }

    /// Sheet dimensions as a [`SheetSize`].
    pub fn sheet_size(&self) -> SheetSize {
        SheetSize::new(f64::from(self.length), f64::from(self.breadth))
    }

    /// Identifying keys carried into quotation payloads.
    pub fn keys(&self) -> PriceKeys {
        PriceKeys {
            product_price_id: self.id,
            product_detail_id: self.product_detail_id,
            thickness_id: self.thickness_id,
            size_id: self.size_id,
        }
    }
}

/// Foreign keys identifying the price a quote was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceKeys {
    pub product_price_id: i64,
    pub product_detail_id: i64,
    pub thickness_id: i64,
    pub size_id: i64,
}

/// A series within a grade.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: i64,
    pub series: String,
}

/// Full sheet dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SheetSize {
    pub length: f64,
    pub breadth: f64,
}

impl SheetSize {
    pub fn new(length: f64, breadth: f64) -> Self {
        Self { length, breadth }
    }

    /// Parse a "{length}x{breadth}" label.
    ///
    /// Both parts must be finite positive numbers.
    pub fn parse(label: &str) -> Result<Self> {
        let invalid = || QuoteError::InvalidSize {
            label: label.to_string(),
        };

        let mut parts = label.split(SIZE_SEPARATOR);
        let (Some(length), Some(breadth), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let length: f64 = length.trim().parse().map_err(|_| invalid())?;
        let breadth: f64 = breadth.trim().parse().map_err(|_| invalid())?;

        if !(length.is_finite() && breadth.is_finite() && length > 0.0 && breadth > 0.0) {
            return Err(invalid());
        }

        Ok(Self { length, breadth })
    }

    /// Sheet area.
    pub fn area(&self) -> f64 {
        self.length * self.breadth
    }
}

impl std::fmt::Display for SheetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.length, SIZE_SEPARATOR, self.breadth)
    }
}

/// Read-only price data for one grade: its series and their sheet prices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTable {
    /// Series belonging to the grade.
    #[serde(default)]
    pub product_details: Vec<ProductDetail>,
    /// Sheet prices for the grade.
    #[serde(default)]
    pub prices: Vec<PriceEntry>,
}

impl PriceTable {
    pub fn new(product_details: Vec<ProductDetail>, prices: Vec<PriceEntry>) -> Self {
        Self {
            product_details,
            prices,
        }
    }

    /// Find a product detail by ID.
    pub fn find_product_detail(&self, id: i64) -> Option<&ProductDetail> {
        self.product_details.iter().find(|pd| pd.id == id)
    }

    /// Check whether a price entry is owned by the named series.
    pub fn is_owned_by_series(&self, entry: &PriceEntry, series: &str) -> bool {
        self.product_details
            .iter()
            .any(|pd| pd.id == entry.product_detail_id && pd.series == series)
    }

    /// Sorted, de-duplicated series names, skipping blanks.
    pub fn unique_series(&self) -> Vec<String> {
        let mut series: Vec<String> = self
            .product_details
            .iter()
            .map(|pd| pd.series.clone())
            .filter(|s| !s.is_empty())
            .collect();
        series.sort();
        series.dedup();
        series
    }

    /// Whether the table has any series at all.
    pub fn has_product_details(&self) -> bool {
        !self.product_details.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }
}
