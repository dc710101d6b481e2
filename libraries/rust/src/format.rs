use chrono::NaiveDate;

const SELECTED_PREFIX: &str = "You have selected: ";

pub const NO_DATES_SELECTED: &str = "Select a date to see it displayed here";

const DISPLAY_FORMAT: &str = "%B %d, %Y";

/// Status line for the date range picker.
///
/// Each present date gets its own clause; the start clause keeps its trailing
/// separator even when no end date follows. No ordering check is made.
pub fn date_range_status(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    if start.is_none() && end.is_none() {
        return NO_DATES_SELECTED.to_string();
    }

    let mut status = SELECTED_PREFIX.to_string();

    if let Some(start) = start {
        status.push_str(&format!("Start Date: {} | ", start.format(DISPLAY_FORMAT)));
    }

    if let Some(end) = end {
        status.push_str(&format!("End Date: {}", end.format(DISPLAY_FORMAT)));
    }

    status
}

/// Echo of the ticker search box.
pub fn ticker_echo(ticker: Option<&str>) -> String {
    format!("Ticker: {}", ticker.unwrap_or_default())
}
