use super::error::ApiError;
use super::models::{DashboardStats, ModerationResult, Post, User};
use super::transport::{fetch_json, Method, Transport};
use crate::navigation::{Navigation, LOGIN_PATH};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Client for the admin dashboard endpoints.
///
/// Every call is a single REST request. On a 403 the client redirects to the
/// login page, and in all failure cases the error is logged and returned.
#[derive(Clone)]
pub struct AdminClient<N: Navigation> {
    transport: Arc<dyn Transport>,
    navigation: N,
}

impl<N: Navigation> AdminClient<N> {
    pub fn new(transport: Arc<dyn Transport>, navigation: N) -> Self {
        Self {
            transport,
            navigation,
        }
    }

    pub async fn fetch_dashboard_data(&self) -> Result<DashboardStats, ApiError> {
        self.get("/api/dashboard/stats", "fetching dashboard stats")
            .await
    }

    pub async fn fetch_dashboard_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/api/users", "fetching users").await
    }

    pub async fn fetch_dashboard_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get("/api/posts/all", "fetching posts").await
    }

    pub async fn ban_user(&self, user_id: u64) -> Result<ModerationResult, ApiError> {
        self.moderate(&format!("/api/users/{}/ban", user_id), "banning user")
            .await
    }

    pub async fn unban_user(&self, user_id: u64) -> Result<ModerationResult, ApiError> {
        self.moderate(&format!("/api/users/{}/unban", user_id), "unbanning user")
            .await
    }

    pub async fn ban_post(&self, post_id: u64) -> Result<ModerationResult, ApiError> {
        self.moderate(&format!("/api/posts/{}/ban", post_id), "banning post")
            .await
    }

    pub async fn unban_post(&self, post_id: u64) -> Result<ModerationResult, ApiError> {
        self.moderate(&format!("/api/posts/{}/unban", post_id), "unbanning post")
            .await
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        action: &str,
    ) -> Result<T, ApiError> {
        debug!("Admin request: GET {}", path);
        fetch_json(self.transport.as_ref(), Method::Get, path)
            .await
            .map_err(|e| self.escalate(action, e))
    }

    async fn moderate(&self, path: &str, action: &str) -> Result<ModerationResult, ApiError> {
        debug!("Admin request: PUT {}", path);
        let body = self
            .transport
            .send(Method::Put, path)
            .await
            .map_err(|e| self.escalate(action, e))?;

        match body {
            object @ Value::Object(_) => {
                serde_json::from_value(object).map_err(|e| self.escalate(action, e.into()))
            }
            // Some endpoints answer with a bare string
            Value::String(message) => Ok(ModerationResult {
                message: Some(message),
            }),
            _ => Ok(ModerationResult::default()),
        }
    }

    fn escalate(&self, action: &str, err: ApiError) -> ApiError {
        error!("Error {}: {}", action, err);
        if err.is_forbidden() {
            self.navigation.navigate(LOGIN_PATH);
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockResponse, MockTransport, RecordingNavigator};
    use serde_json::json;

    fn client(transport: &Arc<MockTransport>) -> (AdminClient<RecordingNavigator>, RecordingNavigator) {
        let navigator = RecordingNavigator::new();
        let transport: Arc<dyn Transport> = transport.clone();
        (AdminClient::new(transport, navigator.clone()), navigator)
    }

    #[tokio::test]
    async fn test_fetch_dashboard_data() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(
            Method::Get,
            "/api/dashboard/stats",
            MockResponse::Json(json!({"total_users": 4, "total_posts": 9, "banned_posts": 1})),
        );
        let (client, navigator) = client(&transport);

        let stats = client.fetch_dashboard_data().await.unwrap();
        assert_eq!(stats.total_users, 4);
        assert_eq!(stats.total_posts, 9);
        assert_eq!(stats.banned_posts, 1);
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_users_and_posts() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(
            Method::Get,
            "/api/users",
            MockResponse::Json(json!([{"id": 1, "username": "ana", "is_active": false}])),
        );
        transport.respond(
            Method::Get,
            "/api/posts/all",
            MockResponse::Json(json!([{"id": 3, "title": "Lost cat", "status": "banned"}])),
        );
        let (client, _) = client(&transport);

        let users = client.fetch_dashboard_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert!(!users[0].is_active);

        let posts = client.fetch_dashboard_posts().await.unwrap();
        assert_eq!(posts[0].status, crate::api::PostStatus::Banned);
    }

    #[tokio::test]
    async fn test_moderation_paths() {
        let transport = Arc::new(MockTransport::new());
        for path in [
            "/api/users/5/ban",
            "/api/users/5/unban",
            "/api/posts/8/ban",
            "/api/posts/8/unban",
        ] {
            transport.respond(Method::Put, path, MockResponse::Empty);
        }
        let (client, _) = client(&transport);

        client.ban_user(5).await.unwrap();
        client.unban_user(5).await.unwrap();
        client.ban_post(8).await.unwrap();
        client.unban_post(8).await.unwrap();

        assert_eq!(
            transport.requests(),
            vec![
                (Method::Put, "/api/users/5/ban".to_string()),
                (Method::Put, "/api/users/5/unban".to_string()),
                (Method::Put, "/api/posts/8/ban".to_string()),
                (Method::Put, "/api/posts/8/unban".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_moderation_message_is_kept() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(
            Method::Put,
            "/api/users/2/ban",
            MockResponse::Json(json!({"message": "User banned"})),
        );
        let (client, _) = client(&transport);

        let result = client.ban_user(2).await.unwrap();
        assert_eq!(result.message.as_deref(), Some("User banned"));
    }

    #[tokio::test]
    async fn test_forbidden_redirects_and_returns_error() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(Method::Put, "/api/posts/1/ban", MockResponse::Status(403));
        let (client, navigator) = client(&transport);

        let err = client.ban_post(1).await.unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(navigator.visited(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn test_server_error_does_not_redirect() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(Method::Get, "/api/users", MockResponse::Status(500));
        let (client, navigator) = client(&transport);

        let err = client.fetch_dashboard_users().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_does_not_redirect() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(Method::Get, "/api/dashboard/stats", MockResponse::Unreachable);
        let (client, navigator) = client(&transport);

        let err = client.fetch_dashboard_data().await.unwrap_err();
        assert!(matches!(err, ApiError::Connection(_)));
        assert!(navigator.visited().is_empty());
    }
}
