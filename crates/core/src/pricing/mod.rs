//! Import-list price pipeline.

pub mod board;
pub mod parse;

pub use board::{DEFAULT_COUNTRY, LocalPrice, PriceBoard, ProductPrice};
pub use parse::parse_price;
