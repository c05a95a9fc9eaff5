//! Session handling
//!
//! Authorization itself is enforced server-side; the client only keeps the
//! bearer token and the signed-in profile so gated UI affordances can check
//! a single auth value instead of poking at storage.

use std::sync::Arc;

use ludex_core::UserProfile;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::transport::Transport;

/// An authenticated session as returned by the login endpoint and persisted
/// in the session file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Clone)]
pub struct AuthService {
    transport: Arc<dyn Transport>,
}

impl AuthService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Session> {
        let body = serde_json::json!({ "username": username, "password": password });
        let value = self.transport.post("auth/login", body).await?;
        let session: Session = serde_json::from_value(value)?;
        self.transport.set_token(Some(session.token.clone()));
        tracing::info!(user = %session.user.username, "signed in");
        Ok(session)
    }

    /// Install a previously persisted session token on the transport.
    pub fn restore(&self, session: &Session) {
        self.transport.set_token(Some(session.token.clone()));
        tracing::info!(user = %session.user.username, "session restored");
    }

    pub fn sign_out(&self) {
        self.transport.set_token(None);
        tracing::info!("signed out");
    }
}
