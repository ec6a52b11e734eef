//! Per-event dispatch: maps one inbound event to its reply messages.
//!
//! Pure with respect to the catalog tables; delivery happens in the handler.
//! Every key arriving in postback data is untrusted (the client controls the
//! echo) and is validated against the tables before use.

use std::borrow::Cow;

use tracing::debug;

use crate::catalog::{self, Region};
use crate::config::FlowVariant;
use crate::flow::replies;
use crate::line::{Event, MessageContent, OutgoingMessage};

/// Produces the replies for a single event. An empty vec means no reply is
/// sent for that event.
pub fn dispatch(variant: FlowVariant, event: &Event) -> Vec<OutgoingMessage> {
    match event {
        Event::Follow { .. } => match variant {
            FlowVariant::Major => vec![OutgoingMessage::text(replies::FOLLOW_WELCOME_TEXT)],
            FlowVariant::Regions => vec![],
        },
        Event::Message { message, .. } => match message {
            MessageContent::Text { text } => dispatch_text(variant, text),
            MessageContent::Other => vec![],
        },
        Event::Postback { postback, .. } => dispatch_postback(variant, &postback.data),
        Event::Other => vec![],
    }
}

fn dispatch_text(variant: FlowVariant, text: &str) -> Vec<OutgoingMessage> {
    let text = text.to_lowercase();

    if text.contains("求人") || text.contains("検索") || text.contains("仕事") || text == "はじめる"
    {
        return vec![replies::occupation_prompt(replies::START_TEXT)];
    }

    match variant {
        FlowVariant::Major => {
            if text.contains("ヘルプ") || text.contains("使い方") || text.contains("help") {
                vec![OutgoingMessage::text(replies::HELP_GUIDE_TEXT)]
            } else {
                vec![replies::occupation_prompt(replies::FALLBACK_TEXT)]
            }
        }
        FlowVariant::Regions => {
            vec![replies::occupation_prompt(replies::SIMPLE_FALLBACK_TEXT)]
        }
    }
}

fn dispatch_postback(variant: FlowVariant, data: &str) -> Vec<OutgoingMessage> {
    let action = postback_param(data, "action").unwrap_or_default();

    match (&*action, variant) {
        // Rich-menu actions exist only in the Major deployment.
        ("start_search", FlowVariant::Major) => {
            vec![replies::occupation_prompt(replies::START_SEARCH_TEXT)]
        }
        ("help", FlowVariant::Major) => {
            vec![replies::occupation_prompt(replies::MENU_HELP_TEXT)]
        }

        ("select_occupation", _) => {
            let key = postback_param(data, "occupation").unwrap_or_default();
            // The key came from a quick reply we emitted; a miss means a
            // tampered payload, which gets no reply.
            match catalog::occupation(&key) {
                Some(occupation) => vec![replies::occupation_selected_prompt(variant, occupation)],
                None => {
                    debug!("select_occupation with unknown key '{key}'");
                    vec![]
                }
            }
        }

        ("select_region", FlowVariant::Regions) => {
            let occupation_key = postback_param(data, "occupation").unwrap_or_default();
            let region_key = postback_param(data, "region").unwrap_or_default();
            match Region::from_key(&region_key) {
                Some(region) => vec![replies::region_selected_prompt(&occupation_key, region)],
                None => {
                    debug!("select_region with unknown key '{region_key}'");
                    vec![]
                }
            }
        }

        ("select_prefecture", _) => {
            let occupation_key = postback_param(data, "occupation").unwrap_or_default();
            let prefecture_key = postback_param(data, "prefecture").unwrap_or_default();
            match replies::result_card(variant, &occupation_key, &prefecture_key) {
                Ok(card) => vec![card],
                Err(e) => {
                    debug!("select_prefecture recovered: {e}");
                    vec![replies::retry_prompt()]
                }
            }
        }

        ("restart", _) => vec![replies::occupation_prompt(replies::RESTART_TEXT)],

        _ => vec![],
    }
}

/// Extracts one value from `action=<name>&k=v...` postback data.
fn postback_param<'a>(data: &'a str, key: &str) -> Option<Cow<'a, str>> {
    url::form_urlencoded::parse(data.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}
