//! Matching a selection against the price table.

use crate::model::{PriceEntry, PriceTable};

/// Outcome of a price lookup. A miss is a normal state, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceLookup<'a> {
    Found(&'a PriceEntry),
    NotFound,
}

impl<'a> PriceLookup<'a> {
    pub fn entry(self) -> Option<&'a PriceEntry> {
        match self {
            PriceLookup::Found(entry) => Some(entry),
            PriceLookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PriceLookup::Found(_))
    }
}

fn matching<'t>(
    table: &'t PriceTable,
    series: &str,
    thickness: &str,
    size: &str,
) -> Vec<&'t PriceEntry> {
    table
        .prices
        .iter()
        .filter(|entry| {
            entry.thickness_name == thickness
                && entry.size_label() == size
                && table.is_owned_by_series(entry, series)
        })
        .collect()
}

/// Find the unique price for a series, thickness label and size label.
///
/// Zero or several candidates both yield [`PriceLookup::NotFound`].
pub fn find_price<'a>(
    table: &'a PriceTable,
    series: &str,
    thickness: &str,
    size: &str,
) -> PriceLookup<'a> {
    if series.is_empty() || thickness.is_empty() || size.is_empty() {
        return PriceLookup::NotFound;
    }

    match matching(table, series, thickness, size).as_slice() {
        [entry] => PriceLookup::Found(*entry),
        [] => {
            tracing::debug!(
                "No price for series={} thickness={} size={}",
                series,
                thickness,
                size
            );
            PriceLookup::NotFound
        }
        many => {
            tracing::warn!(
                "Ambiguous price for series={} thickness={} size={}: {} candidates",
                series,
                thickness,
                size,
                many.len()
            );
            PriceLookup::NotFound
        }
    }
}

/// Whether any price already exists for the combination.
pub fn combination_exists(table: &PriceTable, series: &str, thickness: &str, size: &str) -> bool {
    if series.is_empty() || thickness.is_empty() || size.is_empty() {
        return false;
    }
    !matching(table, series, thickness, size).is_empty()
}
