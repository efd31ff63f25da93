use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::error::ConnectError;
use crate::transport::{Transport, UnaryRequest};

/// Records every request and replays queued outcomes; `{}` once the queue is empty.
#[derive(Clone, Default)]
pub(crate) struct RecordingTransport {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    calls: Vec<UnaryRequest>,
    outcomes: VecDeque<Result<Value, ConnectError>>,
}

impl RecordingTransport {
    pub fn respond(&self, body: Value) {
        self.state.lock().outcomes.push_back(Ok(body));
    }

    pub fn fail(&self, error: ConnectError) {
        self.state.lock().outcomes.push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<UnaryRequest> {
        self.state.lock().calls.clone()
    }

    pub fn procedures(&self) -> Vec<&'static str> {
        self.state.lock().calls.iter().map(|c| c.procedure).collect()
    }
}

impl Transport for RecordingTransport {
    async fn unary(&self, request: UnaryRequest) -> Result<Value, ConnectError> {
        let mut state = self.state.lock();
        state.calls.push(request);
        state.outcomes.pop_front().unwrap_or_else(|| Ok(json!({})))
    }
}
