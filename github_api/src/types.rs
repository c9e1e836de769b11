//! Wire types for the GitHub REST v3 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user or organization account.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub login: String,
    /// `"User"` or `"Organization"`.
    #[serde(rename = "type")]
    pub account_type: String,
    pub name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A repository.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub fork: bool,
    pub description: Option<String>,
    pub stargazers_count: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// An issue.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub number: i64,
    pub title: String,
    /// `"open"` or `"closed"`.
    pub state: String,
    pub body: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating an issue.
#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl NewIssue {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            body: None,
            labels: Vec::new(),
        }
    }
}

/// Error body GitHub returns for client errors
/// (`{"message": "...", "errors": [...]}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

/// One structured entry from a 422 validation failure body. All fields
/// are optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorEntry {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
