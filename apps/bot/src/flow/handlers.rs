//! Axum handler for the webhook endpoint: fan-out over the event batch.

use axum::{extract::State, Json};
use futures::future::join_all;
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::config::FlowVariant;
use crate::errors::AppError;
use crate::flow::dispatch::dispatch;
use crate::line::{Event, ReplySender, WebhookRequest};
use crate::state::AppState;

/// POST /webhook
///
/// Signature verification happens upstream; the body arrives as a parsed
/// event batch. Responds 200 only when every event's reply was delivered.
pub async fn handle_webhook(
    State(state): State<AppState>,
    Json(request): Json<WebhookRequest>,
) -> Result<Json<Value>, AppError> {
    process_batch(
        state.config.flow_variant,
        state.sender.as_ref(),
        &request.events,
    )
    .await?;

    Ok(Json(json!({ "status": "ok" })))
}

/// Handles each event as an independent unit and joins at batch completion.
///
/// One unit's failure never cancels a sibling: all sends run to completion,
/// then the first error (if any) becomes the batch result. Reply tokens are
/// single-use, so nothing is retried.
pub async fn process_batch(
    variant: FlowVariant,
    sender: &dyn ReplySender,
    events: &[Event],
) -> Result<(), AppError> {
    let units = events.iter().map(|event| async move {
        let messages = dispatch(variant, event);
        if messages.is_empty() {
            return Ok(());
        }
        match event.reply_token() {
            Some(token) => sender.reply(token, &messages).await,
            None => {
                warn!("Event produced {} message(s) but carries no reply token", messages.len());
                Ok(())
            }
        }
    });

    let mut first_err = None;
    for result in join_all(units).await {
        if let Err(e) = result {
            error!("Event reply failed: {e}");
            if first_err.is_none() {
                first_err = Some(e);
            }
        }
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::{MessageContent, OutgoingMessage, Postback};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory double recording (token, message count) per send, optionally
    /// failing for one token.
    struct RecordingSender {
        sent: Mutex<Vec<(String, usize)>>,
        fail_token: Option<&'static str>,
    }

    impl RecordingSender {
        fn new() -> Self {
            RecordingSender { sent: Mutex::new(vec![]), fail_token: None }
        }

        fn failing_for(token: &'static str) -> Self {
            RecordingSender { sent: Mutex::new(vec![]), fail_token: Some(token) }
        }

        fn sent(&self) -> Vec<(String, usize)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ReplySender for RecordingSender {
        async fn reply(
            &self,
            reply_token: &str,
            messages: &[OutgoingMessage],
        ) -> Result<(), AppError> {
            if self.fail_token == Some(reply_token) {
                return Err(AppError::Delivery(format!("token {reply_token} expired")));
            }
            self.sent
                .lock()
                .unwrap()
                .push((reply_token.to_string(), messages.len()));
            Ok(())
        }
    }

    fn text_event(token: &str, text: &str) -> Event {
        Event::Message {
            reply_token: token.to_string(),
            message: MessageContent::Text { text: text.to_string() },
        }
    }

    fn postback_event(token: &str, data: &str) -> Event {
        Event::Postback {
            reply_token: token.to_string(),
            postback: Postback { data: data.to_string() },
        }
    }

    #[tokio::test]
    async fn test_one_send_per_replying_event() {
        let sender = RecordingSender::new();
        let events = vec![
            text_event("tok-a", "はじめる"),
            Event::Other,
            postback_event("tok-b", "action=unknown_thing"),
            postback_event("tok-c", "action=restart"),
        ];

        process_batch(FlowVariant::Major, &sender, &events)
            .await
            .unwrap();

        // Silent events (unknown kind, unknown action) trigger no send.
        assert_eq!(
            sender.sent(),
            vec![("tok-a".to_string(), 1), ("tok-c".to_string(), 1)]
        );
    }

    #[tokio::test]
    async fn test_failed_send_does_not_block_siblings() {
        let sender = RecordingSender::failing_for("tok-bad");
        let events = vec![
            text_event("tok-bad", "はじめる"),
            text_event("tok-good", "はじめる"),
        ];

        let result = process_batch(FlowVariant::Major, &sender, &events).await;

        assert!(matches!(result, Err(AppError::Delivery(_))));
        assert_eq!(
            sender.sent(),
            vec![("tok-good".to_string(), 1)],
            "sibling event must still be delivered"
        );
    }

    #[tokio::test]
    async fn test_empty_batch_succeeds() {
        let sender = RecordingSender::new();
        process_batch(FlowVariant::Major, &sender, &[]).await.unwrap();
        assert!(sender.sent().is_empty());
    }
}
