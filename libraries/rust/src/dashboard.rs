use crate::chart::{self, Figure, Resolution};
use crate::data::Interface as DataInterface;
use crate::format::{date_range_status, ticker_echo};
use crate::store::{Action, InputState, OutputId, Store};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum OutputValue {
    Text(String),
    Graph(Figure),
    /// The slot's computation failed; the page keeps its previous contents.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputUpdate {
    pub id: OutputId,
    pub value: OutputValue,
}

/// Computes output slots from the input state.
#[derive(Clone)]
pub struct Dashboard {
    provider: Arc<dyn DataInterface>,
}

impl Dashboard {
    pub fn new(provider: Arc<dyn DataInterface>) -> Self {
        Dashboard { provider }
    }

    /// Applies `action` to `state` and renders the outputs that depend on the
    /// changed field. Without an action every output is rendered.
    ///
    /// The reduced state always comes back, even when a slot fails.
    pub async fn update(
        &self,
        state: InputState,
        action: Option<Action>,
    ) -> (InputState, Vec<OutputUpdate>) {
        let mut store = Store::new(state);

        let outputs = match action {
            Some(action) => store.dispatch(action),
            None => Store::initial_outputs(),
        };

        let updates = self.render(store.state(), &outputs).await;

        (store.into_state(), updates)
    }

    /// Computes each slot independently; a failing slot does not stop the others.
    pub async fn render(&self, state: &InputState, outputs: &[OutputId]) -> Vec<OutputUpdate> {
        let mut updates = Vec::with_capacity(outputs.len());

        for &id in outputs {
            let value = match id {
                OutputId::TickerOut => OutputValue::Text(ticker_echo(state.ticker.as_deref())),
                OutputId::DateRangeStatus => {
                    OutputValue::Text(date_range_status(state.start_date, state.end_date))
                }
                OutputId::TickerGraph => self.ticker_graph(state).await,
            };

            updates.push(OutputUpdate { id, value });
        }

        updates
    }

    async fn ticker_graph(&self, state: &InputState) -> OutputValue {
        let resolution = chart::resolve(
            self.provider.as_ref(),
            state.start_date,
            state.end_date,
            state.ticker.as_deref(),
            state.interval,
        )
        .await;

        match resolution {
            Ok(Resolution::Message(message)) => OutputValue::Text(message),
            Ok(Resolution::Chart(figure)) => OutputValue::Graph(figure),
            Err(err) => OutputValue::Error(err.to_string()),
        }
    }
}
