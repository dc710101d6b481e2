//! Welcome to tickerboard!

/// Dashboard input and price types
pub mod schema;

/// Market data provider client
pub mod data;

/// Status text for the dashboard inputs
pub mod format;

/// Ticker chart resolution
pub mod chart;

/// Input store and callback wiring
pub mod store;

/// Output rendering
pub mod dashboard;

/// Tracing setup
pub mod logger;
