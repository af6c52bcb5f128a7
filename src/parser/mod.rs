//! Price table file parsing.

mod prices;

pub use prices::{parse_price_file, parse_price_table};
