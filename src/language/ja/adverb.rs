//! Common adverbs grouped by meaning.
//!
//! Categories overlap on purpose: `いつも` is both a time and a frequency adverb,
//! and `ぜんぜん` appears under degree, frequency and negative polarity.
use serde::{Deserialize, Serialize};

#[rustfmt::skip]
pub const TIME_ADVERBS: &[&str] = &[
    "いま", "きょう", "きのう", "あした", "あさって", "まいにち", "まいしゅう", "まいつき",
    "まいねん", "いつも", "ときどき", "よく", "たまに", "まれに", "さいきん", "これから",
    "もう", "まだ", "すぐ", "さっき", "あとで", "まえに",
];

#[rustfmt::skip]
pub const DEGREE_ADVERBS: &[&str] = &[
    "とても", "たいへん", "すごく", "かなり", "だいぶ", "ちょっと", "すこし", "あまり",
    "ぜんぜん", "まったく", "ほとんど", "だいたい", "ぜんぶ", "いちばん", "もっと", "もっともっと",
];

#[rustfmt::skip]
pub const MANNER_ADVERBS: &[&str] = &[
    "ゆっくり", "はやく", "きれいに", "じょうずに", "へたに", "しずかに", "うるさく",
    "たのしく", "かなしく", "おおきく", "ちいさく", "あたらしく", "ふるく",
];

#[rustfmt::skip]
pub const FREQUENCY_ADVERBS: &[&str] = &[
    "いつも", "よく", "ときどき", "たまに", "まれに", "ぜんぜん", "ほとんど",
];

#[rustfmt::skip]
pub const MOOD_ADVERBS: &[&str] = &[
    "きっと", "たぶん", "おそらく", "ぜひ", "もちろん", "やはり", "やっぱり",
];

/// Adverbs used together with a negated predicate (`ぜんぜん わからない`).
#[rustfmt::skip]
pub const NEGATIVE_ADVERBS: &[&str] = &[
    "ぜんぜん", "まったく", "あまり", "ちっとも", "さっぱり",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdverbCategory {
    Time,
    Degree,
    Manner,
    Frequency,
    Mood,
    Negative,
}

impl AdverbCategory {
    pub const ALL: [AdverbCategory; 6] = [
        AdverbCategory::Time,
        AdverbCategory::Degree,
        AdverbCategory::Manner,
        AdverbCategory::Frequency,
        AdverbCategory::Mood,
        AdverbCategory::Negative,
    ];

    pub fn adverbs(self) -> &'static [&'static str] {
        match self {
            AdverbCategory::Time => TIME_ADVERBS,
            AdverbCategory::Degree => DEGREE_ADVERBS,
            AdverbCategory::Manner => MANNER_ADVERBS,
            AdverbCategory::Frequency => FREQUENCY_ADVERBS,
            AdverbCategory::Mood => MOOD_ADVERBS,
            AdverbCategory::Negative => NEGATIVE_ADVERBS,
        }
    }

    /// Exact match only, `adverb` is not normalized.
    pub fn contains(self, adverb: &str) -> bool {
        self.adverbs().contains(&adverb)
    }
}

impl std::fmt::Display for AdverbCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AdverbCategory::Time => "時間副詞",
            AdverbCategory::Degree => "程度副詞",
            AdverbCategory::Manner => "状態副詞",
            AdverbCategory::Frequency => "頻度副詞",
            AdverbCategory::Mood => "陳述副詞",
            AdverbCategory::Negative => "否定副詞",
        };
        write!(f, "{label}")
    }
}

/// Every adverb of every category, in category order.
/// Adverbs listed under several categories appear once per category.
pub fn all_adverbs() -> Vec<&'static str> {
    AdverbCategory::ALL
        .iter()
        .flat_map(|category| category.adverbs().iter().copied())
        .collect()
}

/// Every category `adverb` belongs to; empty if it is unknown.
pub fn categories_of(adverb: &str) -> Vec<AdverbCategory> {
    AdverbCategory::ALL
        .into_iter()
        .filter(|category| category.contains(adverb))
        .collect()
}

pub fn is_time_adverb(adverb: &str) -> bool {
    AdverbCategory::Time.contains(adverb)
}

pub fn is_degree_adverb(adverb: &str) -> bool {
    AdverbCategory::Degree.contains(adverb)
}

pub fn is_manner_adverb(adverb: &str) -> bool {
    AdverbCategory::Manner.contains(adverb)
}

pub fn is_frequency_adverb(adverb: &str) -> bool {
    AdverbCategory::Frequency.contains(adverb)
}

pub fn is_mood_adverb(adverb: &str) -> bool {
    AdverbCategory::Mood.contains(adverb)
}

pub fn is_negative_adverb(adverb: &str) -> bool {
    AdverbCategory::Negative.contains(adverb)
}
