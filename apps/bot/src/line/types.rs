use serde::{Deserialize, Serialize};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Inbound
// ────────────────────────────────────────────────────────────────────────────

/// Parsed webhook body: an ordered batch of events.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookRequest {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// A single inbound event. Kinds the bot does not handle deserialize to
/// `Other` instead of failing the whole batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    #[serde(rename_all = "camelCase")]
    Message {
        reply_token: String,
        message: MessageContent,
    },
    #[serde(rename_all = "camelCase")]
    Postback {
        reply_token: String,
        postback: Postback,
    },
    #[serde(rename_all = "camelCase")]
    Follow { reply_token: String },
    #[serde(other)]
    Other,
}

impl Event {
    /// One-time token binding a reply to this event, when the kind carries one.
    pub fn reply_token(&self) -> Option<&str> {
        match self {
            Event::Message { reply_token, .. }
            | Event::Postback { reply_token, .. }
            | Event::Follow { reply_token } => Some(reply_token),
            Event::Other => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Opaque key-value payload echoed by the client when the user taps a
/// previously offered option.
#[derive(Debug, Clone, Deserialize)]
pub struct Postback {
    pub data: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Outbound
// ────────────────────────────────────────────────────────────────────────────

/// An outbound reply message in platform wire format.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutgoingMessage {
    #[serde(rename_all = "camelCase")]
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        quick_reply: Option<QuickReply>,
    },
    #[serde(rename_all = "camelCase")]
    Flex { alt_text: String, contents: Value },
}

impl OutgoingMessage {
    pub fn text(text: impl Into<String>) -> Self {
        OutgoingMessage::Text {
            text: text.into(),
            quick_reply: None,
        }
    }

    pub fn text_with_quick_reply(text: impl Into<String>, quick_reply: QuickReply) -> Self {
        OutgoingMessage::Text {
            text: text.into(),
            quick_reply: Some(quick_reply),
        }
    }

    pub fn flex(alt_text: impl Into<String>, contents: Value) -> Self {
        OutgoingMessage::Flex {
            alt_text: alt_text.into(),
            contents,
        }
    }
}

/// Tappable shortcut options attached to a text message.
#[derive(Debug, Clone, Serialize)]
pub struct QuickReply {
    pub items: Vec<QuickReplyItem>,
}

impl QuickReply {
    /// Builds a quick reply of postback items from (label, data) pairs,
    /// preserving iteration order.
    pub fn postback_items<I, L, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, D)>,
        L: Into<String>,
        D: Into<String>,
    {
        QuickReply {
            items: pairs
                .into_iter()
                .map(|(label, data)| QuickReplyItem::postback(label, data))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickReplyItem {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub action: PostbackAction,
}

impl QuickReplyItem {
    pub fn postback(label: impl Into<String>, data: impl Into<String>) -> Self {
        QuickReplyItem {
            kind: "action",
            action: PostbackAction {
                kind: "postback",
                label: label.into(),
                data: data.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostbackAction {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub label: String,
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_text_message_event() {
        let body = json!({
            "events": [{
                "type": "message",
                "replyToken": "tok-1",
                "message": { "type": "text", "text": "はじめる" }
            }]
        });
        let req: WebhookRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.events.len(), 1);
        match &req.events[0] {
            Event::Message { reply_token, message: MessageContent::Text { text } } => {
                assert_eq!(reply_token, "tok-1");
                assert_eq!(text, "はじめる");
            }
            other => panic!("expected text message event, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_postback_event() {
        let body = json!({
            "type": "postback",
            "replyToken": "tok-2",
            "postback": { "data": "action=restart" }
        });
        let event: Event = serde_json::from_value(body).unwrap();
        match event {
            Event::Postback { postback, .. } => assert_eq!(postback.data, "action=restart"),
            other => panic!("expected postback event, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_event_kind_deserializes_to_other() {
        let body = json!({ "type": "unfollow" });
        let event: Event = serde_json::from_value(body).unwrap();
        assert!(matches!(event, Event::Other));
        assert!(event.reply_token().is_none());
    }

    #[test]
    fn test_non_text_message_content_is_other() {
        let body = json!({
            "type": "message",
            "replyToken": "tok-3",
            "message": { "type": "sticker" }
        });
        let event: Event = serde_json::from_value(body).unwrap();
        match event {
            Event::Message { message, .. } => assert!(matches!(message, MessageContent::Other)),
            other => panic!("expected message event, got {other:?}"),
        }
    }

    #[test]
    fn test_text_message_serializes_in_wire_format() {
        let msg = OutgoingMessage::text_with_quick_reply(
            "どの職種をお探しですか？",
            QuickReply::postback_items(vec![("🦷 歯科医師", "action=select_occupation&occupation=dentist")]),
        );
        let wire = serde_json::to_value(&msg).unwrap();
        assert_eq!(wire["type"], "text");
        assert_eq!(wire["quickReply"]["items"][0]["type"], "action");
        assert_eq!(wire["quickReply"]["items"][0]["action"]["type"], "postback");
        assert_eq!(
            wire["quickReply"]["items"][0]["action"]["data"],
            "action=select_occupation&occupation=dentist"
        );
    }

    #[test]
    fn test_plain_text_omits_quick_reply_field() {
        let wire = serde_json::to_value(OutgoingMessage::text("こんにちは")).unwrap();
        assert!(wire.get("quickReply").is_none());
    }

    #[test]
    fn test_flex_message_uses_alt_text_camel_case() {
        let wire =
            serde_json::to_value(OutgoingMessage::flex("検索結果", json!({"type": "bubble"})))
                .unwrap();
        assert_eq!(wire["type"], "flex");
        assert_eq!(wire["altText"], "検索結果");
        assert_eq!(wire["contents"]["type"], "bubble");
    }
}
