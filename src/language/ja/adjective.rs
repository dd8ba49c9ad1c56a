use std::collections::HashSet;
use std::sync::LazyLock;

use better_default::Default;
use getset::Getters;
use serde::{Deserialize, Serialize};

use crate::errors::{GrammarError, Result};

/// Terminal kana of every i-adjective dictionary form.
pub const I_SUFFIX: char = 'い';
/// Attributive copula of na-adjectives (`きれい` -> `きれいな`).
pub const NA_SUFFIX: char = 'な';

/// Words that end in `い` (or are cited without `な`) but inflect as na-adjectives.
///
/// Both the bare and the `な`-suffixed spellings are listed.
#[rustfmt::skip]
pub static NA_ADJECTIVE_EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "きれい", "きらい", "ゆうめい", "しんせつ", "べんり", "ふべん",
        "しずか", "にぎやか", "ひま", "だいじょうぶ", "だいすき",
        "きれいな", "きらいな", "ゆうめいな", "しんせつな", "べんりな", "ふべんな",
    ])
});

/// The two inflection classes of Japanese adjectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjectiveClass {
    /// 形容詞: inflects by replacing the final `い`.
    IAdjective,
    /// 形容動詞: inflects through the copula.
    NaAdjective,
}

impl std::fmt::Display for AdjectiveClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AdjectiveClass::IAdjective => "い形容詞",
            AdjectiveClass::NaAdjective => "な形容詞",
        };
        write!(f, "{label}")
    }
}

/// Copula used by the na-adjective negative forms.
///
/// `Plain`: `ではない` | `ではなかった`
///
/// `Colloquial`: `じゃない` | `じゃなかった`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Register {
    #[default]
    Plain,
    Colloquial,
}

/// The six canonical inflections produced for both adjective classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InflectionForm {
    Negative,
    Past,
    PastNegative,
    /// Connective `て`-form.
    TeForm,
    Adverbial,
    /// Conditional `ば`-form.
    Conditional,
}

impl InflectionForm {
    pub const ALL: [InflectionForm; 6] = [
        InflectionForm::Negative,
        InflectionForm::Past,
        InflectionForm::PastNegative,
        InflectionForm::TeForm,
        InflectionForm::Adverbial,
        InflectionForm::Conditional,
    ];

    /// Suffix attached to an i-adjective stem.
    pub fn i_suffix(self) -> &'static str {
        match self {
            InflectionForm::Negative => "くない",
            InflectionForm::Past => "かった",
            InflectionForm::PastNegative => "くなかった",
            InflectionForm::TeForm => "くて",
            InflectionForm::Adverbial => "く",
            InflectionForm::Conditional => "ければ",
        }
    }

    /// Suffix attached to a na-adjective stem.
    /// Only the negative forms depend on `register`.
    pub fn na_suffix(self, register: Register) -> &'static str {
        match (self, register) {
            (InflectionForm::Negative, Register::Plain) => "ではない",
            (InflectionForm::Negative, Register::Colloquial) => "じゃない",
            (InflectionForm::Past, _) => "だった",
            (InflectionForm::PastNegative, Register::Plain) => "ではなかった",
            (InflectionForm::PastNegative, Register::Colloquial) => "じゃなかった",
            (InflectionForm::TeForm, _) => "で",
            (InflectionForm::Adverbial, _) => "に",
            (InflectionForm::Conditional, _) => "なら",
        }
    }
}

/// Returns true if `word` is a known na-adjective that looks like an i-adjective,
/// in either its bare or its `な`-suffixed spelling.
pub fn is_na_exception(word: &str) -> bool {
    NA_ADJECTIVE_EXCEPTIONS.contains(word)
        || word
            .strip_suffix(NA_SUFFIX)
            .is_some_and(|bare| NA_ADJECTIVE_EXCEPTIONS.contains(bare))
}

/// Decides which inflection class `word` belongs to.
///
/// Rules are checked in order, first match wins:
/// 1. ends with `な` -> [AdjectiveClass::NaAdjective]
/// 2. listed in [NA_ADJECTIVE_EXCEPTIONS] -> [AdjectiveClass::NaAdjective]
/// 3. ends with `い` -> [AdjectiveClass::IAdjective]
/// 4. anything else -> [AdjectiveClass::IAdjective]
///
/// # Errors
/// [GrammarError::EmptyInput] if `word` is empty.
///
/// # Examples
/// ```
/// use bunpo_rs::{classify, AdjectiveClass};
///
/// assert_eq!(classify("たかい").unwrap(), AdjectiveClass::IAdjective);
/// assert_eq!(classify("きれい").unwrap(), AdjectiveClass::NaAdjective);
/// ```
pub fn classify(word: &str) -> Result<AdjectiveClass> {
    if word.is_empty() {
        return Err(GrammarError::EmptyInput);
    }
    let class = if word.ends_with(NA_SUFFIX) || is_na_exception(word) {
        AdjectiveClass::NaAdjective
    } else {
        // words ending in neither suffix fall back to the i-class as well
        AdjectiveClass::IAdjective
    };
    log::trace!("classified `{word}` as {class}");
    Ok(class)
}

/// Strips the final `い` of an i-adjective.
///
/// # Errors
/// [GrammarError::InvalidForm] if `word` does not end with `い`.
pub fn i_stem(word: &str) -> Result<&str> {
    word.strip_suffix(I_SUFFIX).ok_or_else(|| {
        log::debug!("`{word}` has no i-adjective stem");
        GrammarError::InvalidForm {
            word: word.to_string(),
            expected: I_SUFFIX,
        }
    })
}

/// Strips a trailing `な` if present.
/// Na-adjectives are usually cited without it, so this never fails.
pub fn na_stem(word: &str) -> &str {
    word.strip_suffix(NA_SUFFIX).unwrap_or(word)
}

/// Inflects `word` as an i-adjective.
pub fn i_inflect(word: &str, form: InflectionForm) -> Result<String> {
    let stem = i_stem(word)?;
    Ok(format!("{stem}{}", form.i_suffix()))
}

/// Inflects `word` as a na-adjective.
pub fn na_inflect(word: &str, form: InflectionForm, register: Register) -> String {
    format!("{}{}", na_stem(word), form.na_suffix(register))
}

/// `たかい` -> `たかくない`
pub fn i_negative(word: &str) -> Result<String> {
    i_inflect(word, InflectionForm::Negative)
}

/// `たかい` -> `たかかった`
pub fn i_past(word: &str) -> Result<String> {
    i_inflect(word, InflectionForm::Past)
}

/// `たかい` -> `たかくなかった`
pub fn i_past_negative(word: &str) -> Result<String> {
    i_inflect(word, InflectionForm::PastNegative)
}

/// `たかい` -> `たかくて`
pub fn i_te_form(word: &str) -> Result<String> {
    i_inflect(word, InflectionForm::TeForm)
}

/// `たかい` -> `たかく`
pub fn i_adverbial(word: &str) -> Result<String> {
    i_inflect(word, InflectionForm::Adverbial)
}

/// `たかい` -> `たかければ`
pub fn i_conditional(word: &str) -> Result<String> {
    i_inflect(word, InflectionForm::Conditional)
}

/// `しずか` -> `しずかではない` | `しずかじゃない`
pub fn na_negative(word: &str, register: Register) -> String {
    na_inflect(word, InflectionForm::Negative, register)
}

/// `しずか` -> `しずかだった`
pub fn na_past(word: &str) -> String {
    na_inflect(word, InflectionForm::Past, Register::Plain)
}

/// `しずか` -> `しずかではなかった` | `しずかじゃなかった`
pub fn na_past_negative(word: &str, register: Register) -> String {
    na_inflect(word, InflectionForm::PastNegative, register)
}

/// `しずか` -> `しずかで`
pub fn na_te_form(word: &str) -> String {
    na_inflect(word, InflectionForm::TeForm, Register::Plain)
}

/// `しずか` -> `しずかに`
pub fn na_adverbial(word: &str) -> String {
    na_inflect(word, InflectionForm::Adverbial, Register::Plain)
}

/// `しずか` -> `しずかなら`
pub fn na_conditional(word: &str) -> String {
    na_inflect(word, InflectionForm::Conditional, Register::Plain)
}

/// Classifies `word` and inflects it with the matching class.
///
/// `register` is ignored for i-adjectives and for forms that have no
/// colloquial variant.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace"))]
pub fn inflect(word: &str, form: InflectionForm, register: Register) -> Result<String> {
    match classify(word)? {
        AdjectiveClass::IAdjective => i_inflect(word, form),
        AdjectiveClass::NaAdjective => Ok(na_inflect(word, form, register)),
    }
}

pub fn negative(word: &str, register: Register) -> Result<String> {
    inflect(word, InflectionForm::Negative, register)
}

pub fn past(word: &str) -> Result<String> {
    inflect(word, InflectionForm::Past, Register::Plain)
}

pub fn past_negative(word: &str, register: Register) -> Result<String> {
    inflect(word, InflectionForm::PastNegative, register)
}

pub fn te_form(word: &str) -> Result<String> {
    inflect(word, InflectionForm::TeForm, Register::Plain)
}

pub fn adverbial(word: &str) -> Result<String> {
    inflect(word, InflectionForm::Adverbial, Register::Plain)
}

pub fn conditional(word: &str) -> Result<String> {
    inflect(word, InflectionForm::Conditional, Register::Plain)
}

/// Options for [inflect_all].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InflectOptions {
    #[default(Register::Plain)]
    pub register: Register,
}

/// Every inflection of a single adjective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Getters)]
#[getset(get = "pub")]
pub struct AdjectiveInflections {
    class: AdjectiveClass,
    dictionary_form: String,
    stem: String,
    negative: String,
    past: String,
    past_negative: String,
    te_form: String,
    adverbial: String,
    conditional: String,
}

impl AdjectiveInflections {
    /// Gets the inflection matching `form`.
    pub fn form(&self, form: InflectionForm) -> &str {
        match form {
            InflectionForm::Negative => &self.negative,
            InflectionForm::Past => &self.past,
            InflectionForm::PastNegative => &self.past_negative,
            InflectionForm::TeForm => &self.te_form,
            InflectionForm::Adverbial => &self.adverbial,
            InflectionForm::Conditional => &self.conditional,
        }
    }
}

/// Builds the full inflection table of `word`.
///
/// # Examples
/// ```
/// use bunpo_rs::{inflect_all, InflectOptions};
///
/// let table = inflect_all("たかい", &InflectOptions::default()).unwrap();
/// assert_eq!(table.negative(), "たかくない");
/// assert_eq!(table.conditional(), "たかければ");
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace"))]
pub fn inflect_all(word: &str, options: &InflectOptions) -> Result<AdjectiveInflections> {
    let class = classify(word)?;
    let (stem, [negative, past, past_negative, te_form, adverbial, conditional]) = match class {
        AdjectiveClass::IAdjective => {
            let stem = i_stem(word)?;
            let forms = InflectionForm::ALL.map(|form| format!("{stem}{}", form.i_suffix()));
            (stem, forms)
        }
        AdjectiveClass::NaAdjective => {
            let stem = na_stem(word);
            let forms = InflectionForm::ALL
                .map(|form| format!("{stem}{}", form.na_suffix(options.register)));
            (stem, forms)
        }
    };
    Ok(AdjectiveInflections {
        class,
        dictionary_form: word.to_string(),
        stem: stem.to_string(),
        negative,
        past,
        past_negative,
        te_form,
        adverbial,
        conditional,
    })
}
