use crate::api::{ApiError, HttpTransport, Method, Transport};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

const SERVICE: &str = "wanted";
const USERNAME: &str = "api_token";

/// Endpoint that needs a valid token and has no side effects
const PROFILE_PATH: &str = "/api/profile/";

#[derive(Error, Debug)]
pub enum TokenStoreError {
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("API token is invalid")]
    InvalidToken,
    #[error("API token not found")]
    NotFound,
    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Keeps the API token in the system keychain
pub struct TokenStore {
    entry: keyring::Entry,
}

impl TokenStore {
    pub fn new() -> Result<Self, TokenStoreError> {
        let entry = keyring::Entry::new(SERVICE, USERNAME)?;
        Ok(Self { entry })
    }

    pub fn store_token(&self, token: &str) -> Result<(), TokenStoreError> {
        self.entry.set_password(token)?;
        info!("Stored API token in keychain");
        Ok(())
    }

    pub fn get_token(&self) -> Result<String, TokenStoreError> {
        match self.entry.get_password() {
            Ok(token) => {
                debug!("Retrieved API token from keychain");
                Ok(token)
            }
            Err(keyring::Error::NoEntry) => Err(TokenStoreError::NotFound),
            Err(e) => {
                warn!("Error retrieving API token from keychain: {}", e);
                Err(TokenStoreError::Keyring(e))
            }
        }
    }

    pub fn delete_token(&self) -> Result<(), TokenStoreError> {
        match self.entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(TokenStoreError::Keyring(e)),
        }
    }
}

/// Token from the keychain, if one is stored and readable
pub fn retrieve_token() -> Option<String> {
    TokenStore::new().and_then(|store| store.get_token()).ok()
}

/// Check a token against the server, then keep it in the keychain.
pub async fn validate_and_store_token(
    base_url: &str,
    token: String,
    timeout: Duration,
) -> Result<(), TokenStoreError> {
    if !validate_token(base_url, &token, timeout).await? {
        return Err(TokenStoreError::InvalidToken);
    }

    tokio::task::spawn_blocking(move || TokenStore::new()?.store_token(&token)).await?
}

pub async fn remove_token() -> Result<(), TokenStoreError> {
    tokio::task::spawn_blocking(|| TokenStore::new()?.delete_token()).await?
}

/// Returns false when the server rejects the token
pub async fn validate_token(
    base_url: &str,
    token: &str,
    timeout: Duration,
) -> Result<bool, TokenStoreError> {
    let transport = HttpTransport::new(base_url, Some(token.to_string()), timeout)?;
    match transport.send(Method::Get, PROFILE_PATH).await {
        Ok(_) => Ok(true),
        Err(ApiError::Forbidden { .. }) | Err(ApiError::Status { status: 401, .. }) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_store_creation() {
        let _store = TokenStore::new().expect("Failed to create TokenStore");
    }

    #[tokio::test]
    async fn test_validate_against_unreachable_server() {
        let result = validate_token("http://127.0.0.1:9", "abc", Duration::from_secs(2)).await;
        match result {
            Err(TokenStoreError::Api(e)) => {
                assert_eq!(e.kind(), crate::api::ErrorKind::NetworkFailure)
            }
            other => panic!("expected network error, got {:?}", other.map(|_| ())),
        }
    }
}
