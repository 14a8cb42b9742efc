use super::error::ApiError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::RwLock;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = "wanted/0.1 (desktop)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Put => f.write_str("PUT"),
        }
    }
}

/// Trait for issuing REST calls against the board API (allows mocking for tests)
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send a request to `path` and return the decoded JSON body.
    /// An empty body decodes to `Value::Null`.
    async fn send(&self, method: Method, path: &str) -> Result<Value, ApiError>;
}

/// Send a request and decode the body into `T`
pub async fn fetch_json<T: DeserializeOwned>(
    transport: &dyn Transport,
    method: Method,
    path: &str,
) -> Result<T, ApiError> {
    let body = transport.send(method, path).await?;
    Ok(serde_json::from_value(body)?)
}

/// Production transport backed by reqwest
pub struct HttpTransport {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl HttpTransport {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: RwLock::new(token),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the token sent with subsequent requests
    pub fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = token;
    }

    pub fn has_token(&self) -> bool {
        self.current_token().is_some()
    }

    fn current_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn classify_send_error(e: reqwest::Error) -> ApiError {
    if e.is_connect() || e.is_timeout() {
        ApiError::Connection(e.to_string())
    } else {
        ApiError::Request(e)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, method: Method, path: &str) -> Result<Value, ApiError> {
        let url = self.url_for(path);
        debug!("{} {}", method, url);

        let mut request = match method {
            Method::Get => self.client.get(&url),
            Method::Put => self.client.put(&url),
        };
        if let Some(token) = self.current_token() {
            request = request.header("Authorization", format!("Token {}", token));
        }

        let response = request.send().await.map_err(classify_send_error)?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("{} {} failed with status {}", method, path, status);
            return Err(ApiError::from_status(path, status.as_u16()));
        }

        let body = response.text().await.map_err(classify_send_error)?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}
