// Test support utilities for both unit and integration tests

use crate::api::{ApiError, Method, Transport};
use crate::navigation::Navigation;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Canned reply for a scripted request
#[derive(Debug, Clone)]
pub enum MockResponse {
    Json(Value),
    /// Success with an empty body
    Empty,
    /// Non-success HTTP status
    Status(u16),
    /// The server could not be reached
    Unreachable,
}

impl MockResponse {
    fn into_result(self, path: &str) -> Result<Value, ApiError> {
        match self {
            MockResponse::Json(body) => Ok(body),
            MockResponse::Empty => Ok(Value::Null),
            MockResponse::Status(status) => Err(ApiError::from_status(path, status)),
            MockResponse::Unreachable => {
                Err(ApiError::Connection(format!("connection refused: {}", path)))
            }
        }
    }
}

enum Scripted {
    Ready(MockResponse),
    Gated(oneshot::Receiver<MockResponse>),
}

/// Handle that releases a gated response
pub struct Gate {
    sender: oneshot::Sender<MockResponse>,
}

impl Gate {
    pub fn release(self, response: MockResponse) {
        let _ = self.sender.send(response);
    }
}

/// Mock transport for testing
///
/// Replies come from a per-request script instead of a server. Unscripted
/// requests answer 404. Every request is recorded in order.
#[derive(Default)]
pub struct MockTransport {
    script: Mutex<HashMap<(Method, String), VecDeque<Scripted>>>,
    requests: Mutex<Vec<(Method, String)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next request to `path`
    pub fn respond(&self, method: Method, path: &str, response: MockResponse) {
        self.push(method, path, Scripted::Ready(response));
    }

    /// Queue a reply that is held back until the returned gate is released
    pub fn respond_later(&self, method: Method, path: &str) -> Gate {
        let (sender, receiver) = oneshot::channel();
        self.push(method, path, Scripted::Gated(receiver));
        Gate { sender }
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<(Method, String)> {
        self.requests.lock().unwrap().clone()
    }

    fn push(&self, method: Method, path: &str, scripted: Scripted) {
        self.script
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(scripted);
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, method: Method, path: &str) -> Result<Value, ApiError> {
        self.requests
            .lock()
            .unwrap()
            .push((method, path.to_string()));

        let scripted = self
            .script
            .lock()
            .unwrap()
            .get_mut(&(method, path.to_string()))
            .and_then(|queue| queue.pop_front());

        let response = match scripted {
            Some(Scripted::Ready(response)) => response,
            Some(Scripted::Gated(receiver)) => receiver.await.unwrap_or(MockResponse::Unreachable),
            None => MockResponse::Status(404),
        };
        response.into_result(path)
    }
}

/// Navigation that only records where it was sent
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigation for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_string());
    }
}
