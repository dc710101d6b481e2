use super::Interval;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty, trimmed ticker symbol as typed into the search box.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Returns `None` for absent or blank input.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Symbol(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single price history lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerQuery {
    pub symbol: Symbol,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub interval: Interval,
}

impl TickerQuery {
    /// Unix seconds for the window: start of `start` (inclusive) to start of
    /// `end` (exclusive), both UTC.
    pub fn period(&self) -> (i64, i64) {
        (midnight_utc(self.start), midnight_utc(self.end))
    }
}

fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::default()).and_utc().timestamp()
}
