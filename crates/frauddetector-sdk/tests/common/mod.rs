//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use frauddetector_sdk::{ClientConfig, FraudDetectorClient, Transport, TransportError};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One recorded transport call
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub target: String,
    pub body: Value,
}

/// In-memory transport that replays scripted replies in order
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<Value, TransportError>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body
    pub fn with_reply(self, body: Value) -> Self {
        self.replies.lock().unwrap().push_back(Ok(body));
        self
    }

    /// Queue a service error by its error code
    pub fn with_error(self, code: &str, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(TransportError::from_code(code, message)));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn targets(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.target).collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn invoke(&self, target: &str, body: Value) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(Call {
            target: target.to_string(),
            body,
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection(format!("no reply scripted for {target}"))))
    }
}

/// Client over a shared scripted transport, so tests can inspect calls
pub fn scripted_client(
    transport: ScriptedTransport,
) -> (FraudDetectorClient<ScriptedTransport>, Arc<ScriptedTransport>) {
    let transport = Arc::new(transport);
    let client = FraudDetectorClient::from_shared(ClientConfig::default(), Arc::clone(&transport));
    (client, transport)
}
