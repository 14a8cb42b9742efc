use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A listing on the board, as returned by the search and listing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(default)]
    pub picture_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub reward: Option<Reward>,
    #[serde(default)]
    pub status: PostStatus,
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reward offered for a post. The server may send a number or a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reward {
    Amount(f64),
    Text(String),
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reward::Amount(amount) if amount.fract() == 0.0 => write!(f, "{:.0}", amount),
            Reward::Amount(amount) => write!(f, "{:.2}", amount),
            Reward::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Active,
    Resolved,
    Banned,
    #[serde(other)]
    Other,
}

impl PostStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Active => "Active",
            PostStatus::Resolved => "Resolved",
            PostStatus::Banned => "Banned",
            PostStatus::Other => "Unknown",
        }
    }
}

/// Account row shown on the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
}

fn default_true() -> bool {
    true
}

/// Aggregate counters for the admin dashboard header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_posts: u64,
    #[serde(default)]
    pub active_posts: u64,
    #[serde(default)]
    pub resolved_posts: u64,
    #[serde(default)]
    pub banned_users: u64,
    #[serde(default)]
    pub banned_posts: u64,
}

/// Acknowledgement returned by ban and unban calls. The body may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModerationResult {
    #[serde(default)]
    pub message: Option<String>,
}
