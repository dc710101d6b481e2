use crate::schema::{PriceHistory, PricePoint, TickerQuery};
use async_trait::async_trait;
use chrono::DateTime;
use mockall::automock;
use reqwest::{Client as HTTPClient, StatusCode};
use serde::Deserialize;
use serde_json::Error as SerdeError;
use std::time::Duration;
use thiserror::Error as ThisError;
use tracing::{info, warn};
use url::{ParseError as UrlError, Url};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; tickerboard)";

const NOT_FOUND_CODE: &str = "Not Found";

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("URL error: {0}")]
    Url(#[from] UrlError),
    #[error("Provider request failed with status: {0}")]
    Status(StatusCode),
    #[error("Provider error {code}: {description}")]
    Provider { code: String, description: String },
    #[error("JSON error: {0}")]
    Json(#[from] SerdeError),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl Error {
    /// True when the provider does not know the symbol, as opposed to a
    /// transport or provider failure.
    pub fn is_invalid_symbol(&self) -> bool {
        matches!(self, Error::InvalidSymbol(_))
    }
}

#[derive(Deserialize, Debug)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize, Debug)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug, Default)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[automock]
#[async_trait]
pub trait Interface: Send + Sync {
    async fn fetch_price_history(&self, query: &TickerQuery) -> Result<PriceHistory, Error>;
}

#[derive(Clone)]
pub struct Client {
    base_url: Url,
    http_client: HTTPClient,
}

impl Client {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, Error> {
        let http_client = HTTPClient::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Client {
            base_url,
            http_client,
        })
    }
}

fn validate_symbol(symbol: &str) -> Result<(), Error> {
    let valid = symbol
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='))
        && !symbol.chars().all(|c| c == '.');

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidSymbol(symbol.to_string()))
    }
}

fn classify_chart_error(symbol: &str, error: ChartError) -> Error {
    if error.code == NOT_FOUND_CODE {
        Error::InvalidSymbol(symbol.to_string())
    } else {
        Error::Provider {
            code: error.code,
            description: error.description,
        }
    }
}

fn into_history(result: ChartResult) -> PriceHistory {
    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

    let points = timestamps
        .into_iter()
        .zip(quote.open)
        .zip(quote.close)
        .filter_map(|((timestamp, open), close)| {
            Some(PricePoint {
                timestamp: DateTime::from_timestamp(timestamp, 0)?,
                open: open?,
                close: close?,
            })
        })
        .collect();

    PriceHistory::new(points)
}

#[async_trait]
impl Interface for Client {
    async fn fetch_price_history(&self, query: &TickerQuery) -> Result<PriceHistory, Error> {
        let symbol = query.symbol.as_str();

        validate_symbol(symbol)?;

        // The window ends at the start of `end`, so it holds no rows.
        if query.end <= query.start {
            return Ok(PriceHistory::default());
        }

        let chart_url = self
            .base_url
            .join(&format!("v8/finance/chart/{}", symbol))?;

        let (period_start, period_end) = query.period();

        info!(
            "Fetching {} history from {} to {} at {}",
            symbol, query.start, query.end, query.interval
        );

        let response = self
            .http_client
            .get(chart_url)
            .header("accept", "application/json")
            .query(&[
                ("period1", period_start.to_string()),
                ("period2", period_end.to_string()),
                ("interval", query.interval.to_string()),
                ("events", "history".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Provider request for {} failed with status {}", symbol, status);

            if let Ok(ChartResponse {
                chart: Chart {
                    error: Some(error), ..
                },
            }) = serde_json::from_str::<ChartResponse>(&body)
            {
                return Err(classify_chart_error(symbol, error));
            }

            if status == StatusCode::NOT_FOUND {
                return Err(Error::InvalidSymbol(symbol.to_string()));
            }

            return Err(Error::Status(status));
        }

        let chart_response: ChartResponse = serde_json::from_str(&body)?;

        if let Some(error) = chart_response.chart.error {
            return Err(classify_chart_error(symbol, error));
        }

        let result = chart_response
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| Error::MalformedResponse("chart result is missing".to_string()))?;

        Ok(into_history(result))
    }
}
