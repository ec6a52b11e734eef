/// A profession category offered as a search filter.
///
/// `id` is the numeric occupation id used by the mediclock-job search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupationEntry {
    pub key: &'static str,
    pub id: u32,
    pub name: &'static str,
    pub emoji: &'static str,
}

impl OccupationEntry {
    /// User-visible label: emoji + display name.
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

/// The six dental occupations, in quick-reply display order.
pub static OCCUPATIONS: [OccupationEntry; 6] = [
    OccupationEntry { key: "dentist", id: 1, name: "歯科医師", emoji: "🦷" },
    OccupationEntry { key: "hygienist", id: 2, name: "歯科衛生士", emoji: "✨" },
    OccupationEntry { key: "technician", id: 3, name: "歯科技工士", emoji: "🔧" },
    OccupationEntry { key: "assistant", id: 4, name: "歯科助手", emoji: "🤝" },
    OccupationEntry { key: "reception", id: 5, name: "受付", emoji: "📋" },
    OccupationEntry { key: "clerk", id: 6, name: "医療事務", emoji: "💼" },
];

pub fn occupations() -> &'static [OccupationEntry] {
    &OCCUPATIONS
}

pub fn occupation(key: &str) -> Option<&'static OccupationEntry> {
    OCCUPATIONS.iter().find(|o| o.key == key)
}
