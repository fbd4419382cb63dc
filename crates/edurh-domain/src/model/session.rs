//! Authenticated session
//!
//! Created at login, handed to every command that talks to the backend on
//! the user's behalf, cleared at logout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use edurh_types::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token issued by the backend
    pub token: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: impl Into<String>, user_name: Option<String>, email: Option<String>) -> Self {
        Self {
            token: token.into(),
            user_name,
            email,
            created_at: Utc::now(),
        }
    }

    /// Build a session from the body of a successful login response
    ///
    /// Expected shape: `{"token": "...", "usuario": {"nome": "...", "email": "..."}}`
    pub fn from_login_response(body: &Value) -> Result<Self> {
        let token = body
            .get("token")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::InvalidLogin("missing token".to_string()))?;

        let user = body.get("usuario").filter(|u| u.is_object());
        let field = |key: &str| {
            user.and_then(|u| u.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Ok(Self::new(token, field("nome"), field("email")))
    }

    /// Value for the `Authorization` request header
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn display_name(&self) -> &str {
        self.user_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("(unknown user)")
    }
}
