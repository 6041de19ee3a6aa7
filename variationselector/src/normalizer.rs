use crate::constants::{
    is_skin_tone_modifier, EXTRA_VARIATIONS_JSON, FULLY_QUALIFIED_JSON, VS15, VS16, ZWJ,
};
use crate::tables::{extra_variations, qualification_pairs, EmojiTable, TableError};
use aho_corasick::{AhoCorasick, MatchKind};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// How a piece of text should have its emoji variation selectors normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Force emoji presentation wherever Unicode allows it.
    Add,
    /// Only add the selectors required for fully-qualified sequences.
    FullyQualify,
    /// Strip every VS16.
    Remove,
}

impl Normalization {
    /// Returns the string representation of the normalization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Normalization::Add => "add",
            Normalization::FullyQualify => "fully_qualify",
            Normalization::Remove => "remove",
        }
    }

    /// Apply this normalization to `text` using the given tables.
    pub fn apply(&self, normalizer: &VariationNormalizer, text: &str) -> String {
        match self {
            Normalization::Add => normalizer.add(text),
            Normalization::FullyQualify => normalizer.fully_qualify(text),
            Normalization::Remove => normalizer.remove(text),
        }
    }

    /// Check if `text` would change under this normalization.
    pub fn needs_conversion(&self, normalizer: &VariationNormalizer, text: &str) -> bool {
        self.apply(normalizer, text) != text
    }
}

/// Compiled emoji tables.
///
/// Immutable once built, so a single instance can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct VariationNormalizer {
    extra_variations: HashSet<char>,
    unqualified: AhoCorasick,
    fully_qualified: Vec<String>,
}

impl VariationNormalizer {
    /// Build from the tables embedded in the crate.
    pub fn new() -> Result<Self, TableError> {
        Self::from_json(EXTRA_VARIATIONS_JSON, FULLY_QUALIFIED_JSON)
    }

    /// Build from caller supplied JSON arrays, e.g. newer Unicode data.
    pub fn from_json(extra_json: &str, fully_qualified_json: &str) -> Result<Self, TableError> {
        Self::from_tables(
            EmojiTable::from_json(extra_json)?,
            EmojiTable::from_json(fully_qualified_json)?,
        )
    }

    /// Build from two JSON files on disk.
    pub fn from_files(extra_path: &Path, fully_qualified_path: &Path) -> Result<Self, TableError> {
        Self::from_tables(
            EmojiTable::from_file(extra_path)?,
            EmojiTable::from_file(fully_qualified_path)?,
        )
    }

    pub fn from_tables(extra: EmojiTable, fully_qualified: EmojiTable) -> Result<Self, TableError> {
        debug!(
            "Compiling emoji tables ({} extra variations, {} fully-qualified sequences)",
            extra.len(),
            fully_qualified.len()
        );
        if extra.is_empty() || fully_qualified.is_empty() {
            warn!("Compiling emoji tables with an empty table");
        }

        let extra_variations: HashSet<char> = extra_variations(extra)?.into_iter().collect();

        let (unqualified, fully_qualified): (Vec<String>, Vec<String>) =
            qualification_pairs(fully_qualified)?.into_iter().unzip();
        let unqualified = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&unqualified)?;

        Ok(Self {
            extra_variations,
            unqualified,
            fully_qualified,
        })
    }

    pub fn extra_variation_count(&self) -> usize {
        self.extra_variations.len()
    }

    pub fn fully_qualified_count(&self) -> usize {
        self.fully_qualified.len()
    }

    /// Removes all emoji variation selectors (VS16) in the given string.
    pub fn remove(&self, text: &str) -> String {
        remove(text)
    }

    /// Converts all emojis to their fully-qualified form by adding variation
    /// selectors where necessary.
    ///
    /// Only the selectors required for a fully-qualified sequence according to
    /// Unicode Technical Standard #51 are added. Existing selectors are removed
    /// first, so the result never contains duplicates.
    pub fn fully_qualify(&self, text: &str) -> String {
        let stripped = remove(text);
        let qualified = self
            .unqualified
            .replace_all(&stripped, self.fully_qualified.as_slice());
        let result = drop_misplaced_selectors(&qualified);
        trace!("fully_qualify: {:?} -> {:?}", text, result);
        result
    }

    /// Adds emoji variation selectors to every emoji that has both a text and
    /// an emoji presentation.
    ///
    /// Runs [`fully_qualify`](Self::fully_qualify) first, then appends VS16 to
    /// each code point of the extra variation table unless it follows a ZWJ or
    /// is already followed by a selector, a ZWJ or a skin tone modifier.
    ///
    /// Every candidate is checked against its own neighbours, so adjacent
    /// emoji each get a selector: `"⌚⌚"` becomes `"⌚\u{FE0F}⌚\u{FE0F}"`.
    /// A single regex pass that consumes the following character as context
    /// would leave the second one bare.
    pub fn add(&self, text: &str) -> String {
        let qualified = self.fully_qualify(text);
        let mut result = String::with_capacity(qualified.len());
        let mut prev: Option<char> = None;
        let mut chars = qualified.chars().peekable();

        while let Some(c) = chars.next() {
            result.push(c);
            if self.extra_variations.contains(&c)
                && prev != Some(ZWJ)
                && !chars.peek().is_some_and(|&next| blocks_selector(next))
            {
                result.push(VS16);
            }
            prev = Some(c);
        }

        trace!("add: {:?} -> {:?}", text, result);
        result
    }
}

/// Removes all emoji variation selectors (VS16) in the given string.
pub fn remove(text: &str) -> String {
    text.replace(VS16, "")
}

/// Characters after which an emoji must not receive a VS16.
fn blocks_selector(c: char) -> bool {
    c == VS16 || c == VS15 || c == ZWJ || is_skin_tone_modifier(c)
}

/// The sequence replacer works without context and puts VS16 in front of
/// skin tone modifiers and VS15. Neither may follow a VS16.
fn drop_misplaced_selectors(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == VS16
            && chars
                .peek()
                .is_some_and(|&next| next == VS15 || is_skin_tone_modifier(next))
        {
            continue;
        }
        result.push(c);
    }
    result
}
