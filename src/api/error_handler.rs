use super::error::{ApiError, ErrorKind};
use crate::navigation::{Navigation, LOGIN_PATH};
use tracing::{error, warn};

/// What the shared error handler decided for a failed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorOutcome {
    pub kind: ErrorKind,
    /// Text to show the user, if the failure should be surfaced in place
    pub message: Option<String>,
    pub redirected: bool,
}

/// Route a failed request: authorization failures redirect to the login
/// page, everything else becomes user-facing error text.
pub fn handle_error<N: Navigation + ?Sized>(err: &ApiError, navigation: &N) -> ErrorOutcome {
    let kind = err.kind();
    match kind {
        ErrorKind::AuthorizationFailure => {
            warn!("Authorization failed, redirecting to {}: {}", LOGIN_PATH, err);
            navigation.navigate(LOGIN_PATH);
            ErrorOutcome {
                kind,
                message: None,
                redirected: true,
            }
        }
        ErrorKind::NetworkFailure => {
            error!("Network failure: {}", err);
            ErrorOutcome {
                kind,
                message: Some(format!("Could not reach the server: {}", err)),
                redirected: false,
            }
        }
        ErrorKind::OtherServerError => {
            error!("Request failed: {}", err);
            ErrorOutcome {
                kind,
                message: Some(format!("Request failed: {}", err)),
                redirected: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingNavigator;

    #[test]
    fn test_forbidden_redirects_without_message() {
        let navigator = RecordingNavigator::new();
        let outcome = handle_error(&ApiError::from_status("/api/search/", 403), &navigator);

        assert!(outcome.redirected);
        assert_eq!(outcome.message, None);
        assert_eq!(navigator.visited(), vec!["/".to_string()]);
    }

    #[test]
    fn test_server_error_sets_message_only() {
        let navigator = RecordingNavigator::new();
        let outcome = handle_error(&ApiError::from_status("/api/search/", 500), &navigator);

        assert!(!outcome.redirected);
        assert_eq!(outcome.kind, ErrorKind::OtherServerError);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Request failed: Server returned 500 for /api/search/")
        );
        assert!(navigator.visited().is_empty());
    }

    #[test]
    fn test_network_failure_sets_message() {
        let navigator = RecordingNavigator::new();
        let err = ApiError::Connection("connection refused".to_string());
        let outcome = handle_error(&err, &navigator);

        assert_eq!(outcome.kind, ErrorKind::NetworkFailure);
        assert!(outcome.message.unwrap().contains("connection refused"));
        assert!(navigator.visited().is_empty());
    }
}
