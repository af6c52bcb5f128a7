//! Quotation output rendering.

mod summary;

pub use summary::{format_money, render_summary};
