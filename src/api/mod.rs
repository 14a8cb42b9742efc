mod admin;
mod error;
mod error_handler;
mod models;
mod transport;

pub use admin::AdminClient;
pub use error::{ApiError, ErrorKind};
pub use error_handler::{handle_error, ErrorOutcome};
pub use models::{DashboardStats, ModerationResult, Post, PostStatus, Reward, User};
pub use transport::{fetch_json, HttpTransport, Method, Transport};
