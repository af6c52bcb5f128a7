//! Data model types for sheet pricing and quotations.

mod payload;
mod price;
mod quote;
mod selection;

pub use payload::{
    CartRequest, CutToSizeQuotationRequest, FullSheetsQuotationRequest, QuotationRequest,
};
pub use price::{PriceEntry, PriceKeys, PriceTable, ProductDetail, SheetSize};
pub use quote::{CutQuote, DerivedQuote, FullSheetQuote};
pub use selection::{CutSpec, QuoteMode, Selection};
