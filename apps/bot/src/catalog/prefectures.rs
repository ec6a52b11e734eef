//! Prefecture and region tables.
//!
//! Two deployment variants exist: a 6-entry "major cities" table used by the
//! original rich-menu flow, and the full 47-prefecture table (JIS code order)
//! grouped into 8 regions so that a quick reply never exceeds the platform's
//! item limit. Which table is live is decided by `FlowVariant` in config.

use crate::config::FlowVariant;

/// Coarse grouping used only to narrow the 47-prefecture list for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Hokkaido,
    Tohoku,
    Kanto,
    Chubu,
    Kinki,
    Chugoku,
    Shikoku,
    Kyushu,
}

impl Region {
    /// All regions in quick-reply display order (north to south).
    pub const ALL: [Region; 8] = [
        Region::Hokkaido,
        Region::Tohoku,
        Region::Kanto,
        Region::Chubu,
        Region::Kinki,
        Region::Chugoku,
        Region::Shikoku,
        Region::Kyushu,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Region::Hokkaido => "hokkaido",
            Region::Tohoku => "tohoku",
            Region::Kanto => "kanto",
            Region::Chubu => "chubu",
            Region::Kinki => "kinki",
            Region::Chugoku => "chugoku",
            Region::Shikoku => "shikoku",
            Region::Kyushu => "kyushu",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::Hokkaido => "北海道",
            Region::Tohoku => "東北",
            Region::Kanto => "関東",
            Region::Chubu => "中部",
            Region::Kinki => "関西",
            Region::Chugoku => "中国",
            Region::Shikoku => "四国",
            Region::Kyushu => "九州・沖縄",
        }
    }

    pub fn from_key(key: &str) -> Option<Region> {
        Region::ALL.iter().copied().find(|r| r.key() == key)
    }
}

/// A Japanese prefecture, the finest-grained location filter offered.
///
/// `id` is the JIS prefecture code, which is also what the mediclock-job
/// search form expects in `pref_id[]`. Major-city entries carry an emoji for
/// their quick-reply label; full-table entries carry a region tag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefectureEntry {
    pub key: &'static str,
    pub id: u32,
    pub name: &'static str,
    pub emoji: Option<&'static str>,
    pub region: Option<Region>,
}

impl PrefectureEntry {
    /// User-visible label: emoji + display name when an emoji exists.
    pub fn label(&self) -> String {
        match self.emoji {
            Some(emoji) => format!("{} {}", emoji, self.name),
            None => self.name.to_string(),
        }
    }
}

/// Major-city table used by the `Major` flow variant.
pub static MAJOR_PREFECTURES: [PrefectureEntry; 6] = [
    PrefectureEntry { key: "tokyo", id: 13, name: "東京都", emoji: Some("🗼"), region: None },
    PrefectureEntry { key: "kanagawa", id: 14, name: "神奈川県", emoji: Some("⛰️"), region: None },
    PrefectureEntry { key: "osaka", id: 27, name: "大阪府", emoji: Some("🏯"), region: None },
    PrefectureEntry { key: "aichi", id: 23, name: "愛知県", emoji: Some("🏭"), region: None },
    PrefectureEntry { key: "fukuoka", id: 40, name: "福岡県", emoji: Some("🌸"), region: None },
    PrefectureEntry { key: "hokkaido", id: 1, name: "北海道", emoji: Some("❄️"), region: None },
];

macro_rules! pref {
    ($key:literal, $id:literal, $name:literal, $region:ident) => {
        PrefectureEntry {
            key: $key,
            id: $id,
            name: $name,
            emoji: None,
            region: Some(Region::$region),
        }
    };
}

/// All 47 prefectures in JIS code order, used by the `Regions` flow variant.
pub static ALL_PREFECTURES: [PrefectureEntry; 47] = [
    pref!("hokkaido", 1, "北海道", Hokkaido),
    pref!("aomori", 2, "青森県", Tohoku),
    pref!("iwate", 3, "岩手県", Tohoku),
    pref!("miyagi", 4, "宮城県", Tohoku),
    pref!("akita", 5, "秋田県", Tohoku),
    pref!("yamagata", 6, "山形県", Tohoku),
    pref!("fukushima", 7, "福島県", Tohoku),
    pref!("ibaraki", 8, "茨城県", Kanto),
    pref!("tochigi", 9, "栃木県", Kanto),
    pref!("gunma", 10, "群馬県", Kanto),
    pref!("saitama", 11, "埼玉県", Kanto),
    pref!("chiba", 12, "千葉県", Kanto),
    pref!("tokyo", 13, "東京都", Kanto),
    pref!("kanagawa", 14, "神奈川県", Kanto),
    pref!("niigata", 15, "新潟県", Chubu),
    pref!("toyama", 16, "富山県", Chubu),
    pref!("ishikawa", 17, "石川県", Chubu),
    pref!("fukui", 18, "福井県", Chubu),
    pref!("yamanashi", 19, "山梨県", Chubu),
    pref!("nagano", 20, "長野県", Chubu),
    pref!("gifu", 21, "岐阜県", Chubu),
    pref!("shizuoka", 22, "静岡県", Chubu),
    pref!("aichi", 23, "愛知県", Chubu),
    pref!("mie", 24, "三重県", Kinki),
    pref!("shiga", 25, "滋賀県", Kinki),
    pref!("kyoto", 26, "京都府", Kinki),
    pref!("osaka", 27, "大阪府", Kinki),
    pref!("hyogo", 28, "兵庫県", Kinki),
    pref!("nara", 29, "奈良県", Kinki),
    pref!("wakayama", 30, "和歌山県", Kinki),
    pref!("tottori", 31, "鳥取県", Chugoku),
    pref!("shimane", 32, "島根県", Chugoku),
    pref!("okayama", 33, "岡山県", Chugoku),
    pref!("hiroshima", 34, "広島県", Chugoku),
    pref!("yamaguchi", 35, "山口県", Chugoku),
    pref!("tokushima", 36, "徳島県", Shikoku),
    pref!("kagawa", 37, "香川県", Shikoku),
    pref!("ehime", 38, "愛媛県", Shikoku),
    pref!("kochi", 39, "高知県", Shikoku),
    pref!("fukuoka", 40, "福岡県", Kyushu),
    pref!("saga", 41, "佐賀県", Kyushu),
    pref!("nagasaki", 42, "長崎県", Kyushu),
    pref!("kumamoto", 43, "熊本県", Kyushu),
    pref!("oita", 44, "大分県", Kyushu),
    pref!("miyazaki", 45, "宮崎県", Kyushu),
    pref!("kagoshima", 46, "鹿児島県", Kyushu),
    pref!("okinawa", 47, "沖縄県", Kyushu),
];

/// The live prefecture table for the configured variant.
pub fn prefectures(variant: FlowVariant) -> &'static [PrefectureEntry] {
    match variant {
        FlowVariant::Major => &MAJOR_PREFECTURES,
        FlowVariant::Regions => &ALL_PREFECTURES,
    }
}

pub fn prefecture(variant: FlowVariant, key: &str) -> Option<&'static PrefectureEntry> {
    prefectures(variant).iter().find(|p| p.key == key)
}

/// Full-table entries tagged with `region`, in table order.
pub fn prefectures_in(region: Region) -> Vec<&'static PrefectureEntry> {
    ALL_PREFECTURES
        .iter()
        .filter(|p| p.region == Some(region))
        .collect()
}

pub fn regions() -> &'static [Region] {
    &Region::ALL
}
