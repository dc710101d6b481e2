use crate::schema::{input_date, Interval};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Input fields on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputId {
    TickerRange,
    TickerInterval,
    TickerSearch,
}

/// Output slots on the page. Each slot is replaced wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputId {
    #[serde(rename = "ticker-out")]
    TickerOut,
    #[serde(rename = "output-container-date-picker-range")]
    DateRangeStatus,
    #[serde(rename = "ticker-graph")]
    TickerGraph,
}

/// Current value of every input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputState {
    #[serde(with = "input_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "input_date")]
    pub end_date: Option<NaiveDate>,
    pub interval: Interval,
    pub ticker: Option<String>,
}

impl Default for InputState {
    fn default() -> Self {
        InputState {
            start_date: None,
            end_date: Some(Utc::now().date_naive()),
            interval: Interval::default(),
            ticker: None,
        }
    }
}

/// A change to a single input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum Action {
    StartDate(#[serde(with = "input_date")] Option<NaiveDate>),
    EndDate(#[serde(with = "input_date")] Option<NaiveDate>),
    Interval(Interval),
    Ticker(Option<String>),
}

impl Action {
    pub fn input(&self) -> InputId {
        match self {
            Action::StartDate(_) | Action::EndDate(_) => InputId::TickerRange,
            Action::Interval(_) => InputId::TickerInterval,
            Action::Ticker(_) => InputId::TickerSearch,
        }
    }
}

/// An output slot and the inputs it is computed from.
#[derive(Debug)]
pub struct Callback {
    pub output: OutputId,
    pub inputs: &'static [InputId],
}

pub const CALLBACKS: &[Callback] = &[
    Callback {
        output: OutputId::TickerOut,
        inputs: &[InputId::TickerSearch],
    },
    Callback {
        output: OutputId::DateRangeStatus,
        inputs: &[InputId::TickerRange],
    },
    Callback {
        output: OutputId::TickerGraph,
        inputs: &[
            InputId::TickerRange,
            InputId::TickerSearch,
            InputId::TickerInterval,
        ],
    },
];

pub fn reduce(state: InputState, action: Action) -> InputState {
    match action {
        Action::StartDate(start_date) => InputState { start_date, ..state },
        Action::EndDate(end_date) => InputState { end_date, ..state },
        Action::Interval(interval) => InputState { interval, ..state },
        Action::Ticker(ticker) => InputState { ticker, ..state },
    }
}

/// Outputs that depend on `input`, in registry order.
pub fn dependents(input: InputId) -> Vec<OutputId> {
    CALLBACKS
        .iter()
        .filter(|callback| callback.inputs.contains(&input))
        .map(|callback| callback.output)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    state: InputState,
}

impl Store {
    pub fn new(state: InputState) -> Self {
        Store { state }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn into_state(self) -> InputState {
        self.state
    }

    /// Applies `action` and returns the outputs that must be recomputed.
    pub fn dispatch(&mut self, action: Action) -> Vec<OutputId> {
        let input = action.input();
        self.state = reduce(std::mem::take(&mut self.state), action);
        dependents(input)
    }

    /// Every output; used on first load.
    pub fn initial_outputs() -> Vec<OutputId> {
        CALLBACKS.iter().map(|callback| callback.output).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    fn state() -> InputState {
        InputState {
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2023, 1, 10),
            interval: Interval::OneDay,
            ticker: Some("AAPL".to_string()),
        }
    }

    #[test]
    fn test_default_state() {
        let state = InputState::default();

        assert_eq!(state.start_date, None);
        assert_eq!(state.end_date, Some(Utc::now().date_naive()));
        assert_eq!(state.interval, Interval::FifteenMinutes);
        assert_eq!(state.ticker, None);
    }

    #[test]
    fn test_reduce_replaces_one_field() {
        let reduced = reduce(state(), Action::Ticker(Some("MSFT".to_string())));

        assert_eq!(
            reduced,
            InputState {
                ticker: Some("MSFT".to_string()),
                ..state()
            }
        );

        let reduced = reduce(state(), Action::EndDate(None));

        assert_eq!(reduced.end_date, None);
        assert_eq!(reduced.start_date, state().start_date);
    }

    #[test]
    fn test_interval_change_recomputes_graph_only() {
        let mut store = Store::new(state());

        let outputs = store.dispatch(Action::Interval(Interval::OneWeek));

        assert_eq!(outputs, vec![OutputId::TickerGraph]);
        assert_eq!(store.state().interval, Interval::OneWeek);
    }

    #[test]
    fn test_ticker_change_recomputes_echo_and_graph() {
        let mut store = Store::new(state());

        let outputs = store.dispatch(Action::Ticker(None));

        assert_eq!(outputs, vec![OutputId::TickerOut, OutputId::TickerGraph]);
        assert_eq!(store.into_state().ticker, None);
    }

    #[test]
    fn test_range_change_recomputes_status_and_graph() {
        let mut store = Store::new(state());

        let outputs = store.dispatch(Action::StartDate(NaiveDate::from_ymd_opt(2022, 12, 1)));

        assert_eq!(
            outputs,
            vec![OutputId::DateRangeStatus, OutputId::TickerGraph]
        );
    }

    #[test]
    fn test_initial_outputs() {
        assert_eq!(
            Store::initial_outputs(),
            vec![
                OutputId::TickerOut,
                OutputId::DateRangeStatus,
                OutputId::TickerGraph
            ]
        );
    }

    #[test]
    fn test_action_from_page() {
        let action: Action =
            from_value(json!({"field": "start_date", "value": "2023-01-01"})).unwrap();
        assert_eq!(action, Action::StartDate(NaiveDate::from_ymd_opt(2023, 1, 1)));

        let action: Action = from_value(json!({"field": "end_date", "value": ""})).unwrap();
        assert_eq!(action, Action::EndDate(None));

        let action: Action = from_value(json!({"field": "interval", "value": "1mo"})).unwrap();
        assert_eq!(action, Action::Interval(Interval::OneMonth));

        let action: Action = from_value(json!({"field": "ticker", "value": "TSLA"})).unwrap();
        assert_eq!(action.input(), InputId::TickerSearch);
    }

    #[test]
    fn test_state_from_page() {
        let state: InputState = from_value(json!({
            "start_date": "2023-01-01",
            "end_date": "2023-01-10 00:00:00",
            "interval": "1d",
            "ticker": "AAPL"
        }))
        .unwrap();

        assert_eq!(state, self::state());
    }

    #[test]
    fn test_output_ids_match_page_slots() {
        assert_eq!(
            serde_json::to_value(OutputId::DateRangeStatus).unwrap(),
            json!("output-container-date-picker-range")
        );
        assert_eq!(
            serde_json::to_value(InputId::TickerInterval).unwrap(),
            json!("ticker-interval")
        );
    }
}
