//! Friends and messaging endpoints

use std::sync::Arc;

use ludex_core::{ChatMessage, Conversation, FriendRequest, UserProfile};

use crate::error::ApiResult;
use crate::transport::Transport;

#[derive(Clone)]
pub struct SocialService {
    transport: Arc<dyn Transport>,
}

impl SocialService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    #[tracing::instrument(skip(self))]
    pub async fn friends(&self) -> ApiResult<Vec<UserProfile>> {
        let value = self.transport.get("friends", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn friend_requests(&self) -> ApiResult<Vec<FriendRequest>> {
        let value = self.transport.get("friends/requests", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn send_friend_request(&self, user_id: i64) -> ApiResult<()> {
        let body = serde_json::json!({ "userId": user_id });
        self.transport.post("friends/requests", body).await?;
        tracing::info!("friend request sent");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn accept_request(&self, request_id: i64) -> ApiResult<()> {
        self.transport
            .post(
                &format!("friends/requests/{request_id}/accept"),
                serde_json::Value::Null,
            )
            .await?;
        tracing::info!("friend request accepted");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn decline_request(&self, request_id: i64) -> ApiResult<()> {
        self.transport
            .post(
                &format!("friends/requests/{request_id}/decline"),
                serde_json::Value::Null,
            )
            .await?;
        tracing::info!("friend request declined");
        Ok(())
    }

    /// Conversation summaries, newest first. The chat panel polls this on
    /// a fixed interval.
    #[tracing::instrument(skip(self))]
    pub async fn conversations(&self) -> ApiResult<Vec<Conversation>> {
        let value = self.transport.get("messages/conversations", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn messages(&self, conversation_id: i64) -> ApiResult<Vec<ChatMessage>> {
        let value = self
            .transport
            .get(&format!("messages/conversations/{conversation_id}"), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    #[tracing::instrument(skip(self, body))]
    pub async fn send_message(&self, conversation_id: i64, body: &str) -> ApiResult<ChatMessage> {
        let payload = serde_json::json!({ "body": body });
        let value = self
            .transport
            .post(
                &format!("messages/conversations/{conversation_id}"),
                payload,
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
