use crate::constants::VS16;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Raw emoji table as stored in the JSON assets: a flat array of strings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EmojiTable(pub Vec<String>);

/// Errors that can occur while loading or compiling emoji tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Emoji {0:?} is not exactly one code point long")]
    NotSingleCodePoint(String),

    #[error("Fully-qualified emoji {0:?} contains no variation selector")]
    MissingSelector(String),

    #[error("Fully-qualified emoji table contains an entry made only of variation selectors")]
    EmptySequence,

    #[error("Failed to build sequence matcher: {0}")]
    Matcher(#[from] aho_corasick::BuildError),
}

impl EmojiTable {
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, TableError> {
        let content = fs::read_to_string(path)?;
        debug!("Read emoji table from {}", path.display());
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Converts the extra variation table into code points.
/// Every entry must be exactly one code point.
pub fn extra_variations(table: EmojiTable) -> Result<Vec<char>, TableError> {
    table
        .0
        .into_iter()
        .map(|emoji| {
            let mut chars = emoji.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(TableError::NotSingleCodePoint(emoji)),
            }
        })
        .collect()
}

/// Pairs every fully-qualified sequence with its unqualified form
/// (the same sequence with all VS16 removed).
pub fn qualification_pairs(table: EmojiTable) -> Result<Vec<(String, String)>, TableError> {
    table
        .0
        .into_iter()
        .map(|qualified| {
            if !qualified.contains(VS16) {
                return Err(TableError::MissingSelector(qualified));
            }
            let unqualified = qualified.replace(VS16, "");
            if unqualified.is_empty() {
                return Err(TableError::EmptySequence);
            }
            Ok((unqualified, qualified))
        })
        .collect()
}

pub fn parse_extra_variations(json: &str) -> Result<Vec<char>, TableError> {
    extra_variations(EmojiTable::from_json(json)?)
}

pub fn parse_fully_qualified(json: &str) -> Result<Vec<(String, String)>, TableError> {
    qualification_pairs(EmojiTable::from_json(json)?)
}
