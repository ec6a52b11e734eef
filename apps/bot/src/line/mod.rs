//! Messaging-platform surface: typed webhook events, outbound message
//! payloads, and the reply-delivery client.
//!
//! Signature verification happens upstream of this service; by the time a
//! request reaches the webhook handler the batch is trusted to be
//! well-formed JSON, so deserialization here is the only parsing done.

pub mod client;
pub mod types;

pub use client::{LineReplyClient, ReplySender};
pub use types::{
    Event, MessageContent, OutgoingMessage, Postback, QuickReply, QuickReplyItem, WebhookRequest,
};
