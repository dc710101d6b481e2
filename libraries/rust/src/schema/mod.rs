pub mod date;
pub mod interval;
pub mod price;
pub mod ticker;

pub use date::{input_date, parse_date};
pub use interval::Interval;
pub use price::{PriceHistory, PricePoint, PriceSeries};
pub use ticker::{Symbol, TickerQuery};

use thiserror::Error as ThisError;

#[derive(ThisError, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid date: {0}")]
    Date(String),
    #[error("Unsupported interval: {0}")]
    Interval(String),
}
