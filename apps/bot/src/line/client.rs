use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::errors::AppError;
use crate::line::types::OutgoingMessage;

const REPLY_ENDPOINT: &str = "https://api.line.me/v2/bot/message/reply";

/// Delivery seam for outbound replies. The webhook handler only sees this
/// trait; tests substitute an in-memory double.
#[async_trait]
pub trait ReplySender: Send + Sync {
    /// Sends `messages` as the single reply bound to `reply_token`.
    ///
    /// Reply tokens are one-time use, so a failed send is never retried.
    async fn reply(&self, reply_token: &str, messages: &[OutgoingMessage])
        -> Result<(), AppError>;
}

/// HTTP implementation posting to the platform reply endpoint.
pub struct LineReplyClient {
    http: reqwest::Client,
    access_token: String,
    endpoint: String,
}

impl LineReplyClient {
    pub fn new(access_token: String) -> Self {
        LineReplyClient {
            http: reqwest::Client::new(),
            access_token,
            endpoint: REPLY_ENDPOINT.to_string(),
        }
    }
}

#[async_trait]
impl ReplySender for LineReplyClient {
    async fn reply(
        &self,
        reply_token: &str,
        messages: &[OutgoingMessage],
    ) -> Result<(), AppError> {
        debug!("Replying to token {} with {} message(s)", reply_token, messages.len());

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&json!({
                "replyToken": reply_token,
                "messages": messages,
            }))
            .send()
            .await
            .map_err(|e| AppError::Delivery(format!("reply request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Delivery(format!(
                "reply rejected with {status}: {body}"
            )));
        }

        Ok(())
    }
}
