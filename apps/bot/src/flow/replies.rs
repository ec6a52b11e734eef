//! Reply builders: prompt texts, quick-reply option sets, and the result card.
//!
//! All copy is static Japanese text. Quick-reply option order follows catalog
//! declaration order, which is user-visible and therefore load-bearing.

use serde_json::json;

use crate::catalog::{self, OccupationEntry, Region};
use crate::config::FlowVariant;
use crate::errors::AppError;
use crate::flow::search_url::build_search_url;
use crate::line::{OutgoingMessage, QuickReply};

pub const FOLLOW_WELCOME_TEXT: &str = "🦷 メディクロック求人検索ボットへようこそ！\n\n下のメニューから「求人検索スタート」をタップして、歯科のお仕事を探してみましょう！\n\n求人情報はメディクロックジョブと連携しています。";

pub const START_TEXT: &str = "🦷 メディクロック求人検索へようこそ！\n\nまず、どの職種をお探しですか？";

pub const START_SEARCH_TEXT: &str = "🦷 求人検索を開始します！\n\nまず、どの職種をお探しですか？";

pub const HELP_GUIDE_TEXT: &str = "📋 使い方ガイド\n\n1️⃣ 下のメニューから「求人検索スタート」をタップ\n2️⃣ 職種を選択（歯科医師、歯科衛生士など）\n3️⃣ 勤務地域を選択\n4️⃣ 検索結果を確認\n5️⃣ メディクロックジョブで詳細確認・応募\n\n困った時はいつでも「ヘルプ」と送信してください！";

pub const MENU_HELP_TEXT: &str = "📋 メディクロック求人ボット使い方\n\n🔍 求人検索の流れ:\n1️⃣ 職種を選択\n2️⃣ 勤務地域を選択  \n3️⃣ 検索結果を確認\n4️⃣ メディクロックジョブで応募\n\n💡 対応職種:\n• 歯科医師 🦷\n• 歯科衛生士 ✨\n• 歯科技工士 🔧\n• 歯科助手 🤝\n• 受付 📋\n• 医療事務 💼\n\n🗾 対応エリア:\n全国主要都市（東京、大阪、愛知など）\n\n何か困ったことがあれば、いつでもメニューからヘルプを確認できます！";

pub const FALLBACK_TEXT: &str = "下のメニューから「求人検索スタート」をタップするか、「はじめる」と送信してください！\n\n使い方がわからない場合は「ヘルプ」と送信してください。";

pub const SIMPLE_FALLBACK_TEXT: &str = "「はじめる」と送信すると、求人検索を開始します！";

pub const RESTART_TEXT: &str = "🔄 新しい検索を開始します！\n\nどの職種をお探しですか？";

pub const RETRY_TEXT: &str = "エラーが発生しました。もう一度お試しください。";

// ────────────────────────────────────────────────────────────────────────────
// Quick replies
// ────────────────────────────────────────────────────────────────────────────

/// One option per occupation, in table order.
pub fn occupation_quick_reply() -> QuickReply {
    QuickReply::postback_items(catalog::occupations().iter().map(|o| {
        (o.label(), format!("action=select_occupation&occupation={}", o.key))
    }))
}

/// One option per prefecture in the variant's table (Major: the 6 major
/// cities). The chosen occupation is echoed through the postback data.
pub fn prefecture_quick_reply(variant: FlowVariant, occupation_key: &str) -> QuickReply {
    QuickReply::postback_items(catalog::prefectures(variant).iter().map(|p| {
        (
            p.label(),
            format!(
                "action=select_prefecture&occupation={}&prefecture={}",
                occupation_key, p.key
            ),
        )
    }))
}

/// One option per region, echoing the chosen occupation.
pub fn region_quick_reply(occupation_key: &str) -> QuickReply {
    QuickReply::postback_items(catalog::regions().iter().map(|r| {
        (
            r.name().to_string(),
            format!("action=select_region&occupation={}&region={}", occupation_key, r.key()),
        )
    }))
}

/// Prefecture options restricted to one region of the full table.
pub fn region_prefecture_quick_reply(occupation_key: &str, region: Region) -> QuickReply {
    QuickReply::postback_items(catalog::prefectures_in(region).iter().map(|p| {
        (
            p.label(),
            format!(
                "action=select_prefecture&occupation={}&prefecture={}",
                occupation_key, p.key
            ),
        )
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Prompts
// ────────────────────────────────────────────────────────────────────────────

pub fn occupation_prompt(text: &str) -> OutgoingMessage {
    OutgoingMessage::text_with_quick_reply(text, occupation_quick_reply())
}

/// Confirmation after the occupation step. Major asks for a prefecture
/// directly; Regions inserts the region step first.
pub fn occupation_selected_prompt(
    variant: FlowVariant,
    occupation: &OccupationEntry,
) -> OutgoingMessage {
    match variant {
        FlowVariant::Major => OutgoingMessage::text_with_quick_reply(
            format!(
                "{}を選択しました！\n\n次に、勤務地域を選択してください：",
                occupation.label()
            ),
            prefecture_quick_reply(variant, occupation.key),
        ),
        FlowVariant::Regions => OutgoingMessage::text_with_quick_reply(
            format!(
                "{}を選択しました！\n\n次に、エリアを選択してください：",
                occupation.label()
            ),
            region_quick_reply(occupation.key),
        ),
    }
}

pub fn region_selected_prompt(occupation_key: &str, region: Region) -> OutgoingMessage {
    OutgoingMessage::text_with_quick_reply(
        format!("{}の都道府県を選択してください：", region.name()),
        region_prefecture_quick_reply(occupation_key, region),
    )
}

/// Friendly recovery for an invalid selection: retry text plus the initial
/// occupation quick reply so the conversation keeps moving.
pub fn retry_prompt() -> OutgoingMessage {
    occupation_prompt(RETRY_TEXT)
}

// ────────────────────────────────────────────────────────────────────────────
// Result card
// ────────────────────────────────────────────────────────────────────────────

/// Builds the result flex card for a validated (occupation, prefecture) pair.
///
/// Fails with `InvalidSelection` when either key misses its table; callers in
/// the select_prefecture path recover to `retry_prompt`.
pub fn result_card(
    variant: FlowVariant,
    occupation_key: &str,
    prefecture_key: &str,
) -> Result<OutgoingMessage, AppError> {
    let occupation = catalog::occupation(occupation_key).ok_or_else(|| {
        AppError::InvalidSelection(format!("unknown occupation key '{occupation_key}'"))
    })?;
    let prefecture = catalog::prefecture(variant, prefecture_key).ok_or_else(|| {
        AppError::InvalidSelection(format!("unknown prefecture key '{prefecture_key}'"))
    })?;
    let search_url = build_search_url(variant, occupation_key, prefecture_key)?;

    let contents = json!({
        "type": "bubble",
        "hero": {
            "type": "box",
            "layout": "vertical",
            "contents": [
                {
                    "type": "text",
                    "text": "🔍 求人検索結果",
                    "weight": "bold",
                    "size": "xl",
                    "color": "#1DB954",
                    "align": "center"
                }
            ],
            "paddingAll": "lg",
            "backgroundColor": "#f8f9fa"
        },
        "body": {
            "type": "box",
            "layout": "vertical",
            "contents": [
                {
                    "type": "box",
                    "layout": "horizontal",
                    "contents": [
                        { "type": "text", "text": "職種:", "size": "sm", "color": "#666666", "flex": 0 },
                        {
                            "type": "text",
                            "text": occupation.label(),
                            "size": "sm",
                            "weight": "bold",
                            "flex": 0,
                            "margin": "sm"
                        }
                    ],
                    "margin": "md"
                },
                {
                    "type": "box",
                    "layout": "horizontal",
                    "contents": [
                        { "type": "text", "text": "勤務地:", "size": "sm", "color": "#666666", "flex": 0 },
                        {
                            "type": "text",
                            "text": prefecture.label(),
                            "size": "sm",
                            "weight": "bold",
                            "flex": 0,
                            "margin": "sm"
                        }
                    ],
                    "margin": "md"
                },
                { "type": "separator", "margin": "lg" },
                {
                    "type": "text",
                    "text": "条件に合致する求人が見つかりました！\n詳細と応募はメディクロックジョブで確認してください。",
                    "size": "sm",
                    "color": "#666666",
                    "wrap": true,
                    "margin": "lg"
                }
            ]
        },
        "footer": {
            "type": "box",
            "layout": "vertical",
            "contents": [
                {
                    "type": "button",
                    "action": { "type": "uri", "label": "🔍 検索結果を見る", "uri": search_url },
                    "style": "primary",
                    "color": "#1DB954"
                },
                {
                    "type": "button",
                    "action": { "type": "postback", "label": "🔄 別の条件で検索", "data": "action=restart" },
                    "style": "secondary",
                    "margin": "sm"
                }
            ]
        }
    });

    Ok(OutgoingMessage::flex(
        format!("{} × {}の求人検索結果", occupation.name, prefecture.name),
        contents,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupation_quick_reply_has_one_option_per_entry() {
        let qr = occupation_quick_reply();
        assert_eq!(qr.items.len(), catalog::occupations().len());
        assert_eq!(qr.items[0].action.label, "🦷 歯科医師");
        assert_eq!(
            qr.items[0].action.data,
            "action=select_occupation&occupation=dentist"
        );
    }

    #[test]
    fn test_prefecture_quick_reply_echoes_occupation() {
        let qr = prefecture_quick_reply(FlowVariant::Major, "hygienist");
        assert_eq!(qr.items.len(), 6);
        assert_eq!(
            qr.items[0].action.data,
            "action=select_prefecture&occupation=hygienist&prefecture=tokyo"
        );
    }

    #[test]
    fn test_region_quick_reply_covers_all_regions() {
        let qr = region_quick_reply("dentist");
        assert_eq!(qr.items.len(), 8);
        assert_eq!(qr.items[0].action.label, "北海道");
        assert_eq!(
            qr.items[2].action.data,
            "action=select_region&occupation=dentist&region=kanto"
        );
    }

    #[test]
    fn test_region_prefecture_quick_reply_is_region_subset() {
        let qr = region_prefecture_quick_reply("dentist", Region::Shikoku);
        assert_eq!(qr.items.len(), 4);
        assert_eq!(
            qr.items[0].action.data,
            "action=select_prefecture&occupation=dentist&prefecture=tokushima"
        );
    }

    #[test]
    fn test_quick_reply_order_is_stable() {
        let first: Vec<String> = occupation_quick_reply()
            .items
            .iter()
            .map(|i| i.action.data.clone())
            .collect();
        let second: Vec<String> = occupation_quick_reply()
            .items
            .iter()
            .map(|i| i.action.data.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_card_contains_labels_and_url() {
        let card = result_card(FlowVariant::Major, "dentist", "tokyo").unwrap();
        let wire = serde_json::to_value(&card).unwrap();
        assert_eq!(wire["altText"], "歯科医師 × 東京都の求人検索結果");
        let uri = wire["contents"]["footer"]["contents"][0]["action"]["uri"]
            .as_str()
            .unwrap();
        assert!(uri.contains("occupation_id=1"));
        assert!(uri.contains("pref_id%5B%5D=13"));
        assert_eq!(
            wire["contents"]["footer"]["contents"][1]["action"]["data"],
            "action=restart"
        );
    }

    #[test]
    fn test_result_card_rejects_unknown_keys() {
        assert!(matches!(
            result_card(FlowVariant::Major, "dentist", "narnia"),
            Err(AppError::InvalidSelection(_))
        ));
        assert!(matches!(
            result_card(FlowVariant::Major, "wizard", "tokyo"),
            Err(AppError::InvalidSelection(_))
        ));
    }
}
