use crate::data::Interface as DataInterface;
use crate::schema::{Interval, PriceHistory, PriceSeries, Symbol, TickerQuery};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error as ThisError;
use tracing::{error, warn};

pub const SELECT_DATES: &str = "Select a Start Date and End Date";
pub const ENTER_TICKER: &str = "Enter a ticker";
pub const TICKER_DOES_NOT_EXIST: &str = "Ticker does not exist";
pub const FAILED_TO_GET_TICKER: &str = "Failed to get ticker";

const FIGURE_ID: &str = "my-graph";

/// Failures that abort a chart resolution instead of producing a message.
#[derive(ThisError, Debug, PartialEq)]
pub enum Error {
    #[error("Empty Data Try Changing the period and range")]
    EmptyHistory { symbol: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub x: Vec<DateTime<Utc>>,
    pub y: Vec<f64>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    #[serde(rename = "showlegend")]
    pub show_legend: bool,
}

/// Figure description handed to the page's charting component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub id: String,
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Message(String),
    Chart(Figure),
}

impl Trace {
    fn from_series(name: String, series: PriceSeries) -> Self {
        let (x, y) = series.into_columns();
        Trace { x, y, name }
    }
}

impl Figure {
    pub fn open_and_close(symbol: &Symbol, history: &PriceHistory) -> Self {
        Figure {
            id: FIGURE_ID.to_string(),
            data: vec![
                Trace::from_series(format!("{} Open", symbol), history.open_series()),
                Trace::from_series(format!("{} Close", symbol), history.close_series()),
            ],
            layout: Layout {
                title: format!("Open and Close for {}", symbol),
                show_legend: true,
            },
        }
    }
}

fn message(text: &str) -> Resolution {
    Resolution::Message(text.to_string())
}

/// Resolves the chart slot for the current inputs.
///
/// Missing inputs and provider failures come back as messages. A lookup that
/// succeeds with no rows is an `Err`.
pub async fn resolve(
    provider: &dyn DataInterface,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    ticker: Option<&str>,
    interval: Interval,
) -> Result<Resolution, Error> {
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => return Ok(message(SELECT_DATES)),
    };

    let symbol = match Symbol::parse(ticker) {
        Some(symbol) => symbol,
        None => return Ok(message(ENTER_TICKER)),
    };

    let query = TickerQuery {
        symbol,
        start,
        end,
        interval,
    };

    let history = match provider.fetch_price_history(&query).await {
        Ok(history) => history,
        Err(err) if err.is_invalid_symbol() => {
            warn!("Ticker {} does not exist: {}", query.symbol, err);
            return Ok(message(TICKER_DOES_NOT_EXIST));
        }
        Err(err) => {
            warn!("Failed to get ticker {}: {}", query.symbol, err);
            return Ok(message(FAILED_TO_GET_TICKER));
        }
    };

    if history.is_empty() {
        error!(
            "No {} rows for {} between {} and {}",
            query.interval, query.symbol, query.start, query.end
        );
        return Err(Error::EmptyHistory {
            symbol: query.symbol.to_string(),
        });
    }

    Ok(Resolution::Chart(Figure::open_and_close(
        &query.symbol,
        &history,
    )))
}
