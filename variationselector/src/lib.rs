//! Utility functions for adding and removing emoji variation selectors (VS16)
//! following Unicode Technical Standard #51 and the presentation rules
//! recommended by the Matrix specification.
//!
//! The free functions use tables embedded in the crate, compiled once on
//! first use. Build a [`VariationNormalizer`] directly to use other tables.

pub mod constants;
pub mod logger;
pub mod normalizer;
pub mod tables;

use log::{error, info};
use once_cell::sync::Lazy;

pub use constants::{SKIN_TONE_MODIFIERS, VS15, VS16, ZWJ};
pub use normalizer::{Normalization, VariationNormalizer};
pub use tables::{EmojiTable, TableError};

static DEFAULT: Lazy<VariationNormalizer> = Lazy::new(|| match VariationNormalizer::new() {
    Ok(normalizer) => {
        info!(
            "Loaded emoji tables: {} extra variations, {} fully-qualified sequences",
            normalizer.extra_variation_count(),
            normalizer.fully_qualified_count()
        );
        normalizer
    }
    Err(e) => {
        // Build defect, not a runtime condition.
        error!("Embedded emoji tables are corrupt: {}", e);
        panic!("embedded emoji tables are corrupt: {e}");
    }
});

/// Returns the process-wide normalizer built from the embedded tables.
pub fn normalizer() -> &'static VariationNormalizer {
    &DEFAULT
}

/// Adds emoji variation selectors to all emojis that have multiple forms in
/// the given string.
///
/// Variation selectors will be added to everything that is allowed to have
/// both a text presentation and an emoji presentation according to Unicode
/// Technical Standard #51. If you only want the selectors necessary for
/// fully-qualified forms, use [`fully_qualify`] instead.
///
/// All existing variation selectors are removed first, so no duplicates are
/// added.
pub fn add(text: &str) -> String {
    DEFAULT.add(text)
}

/// Removes all emoji variation selectors in the given string.
pub fn remove(text: &str) -> String {
    normalizer::remove(text)
}

/// Converts all emojis to their fully-qualified form by adding variation
/// selectors where necessary.
///
/// This does not add variation selectors to every possible emoji, only to
/// the ones that require one to be "fully qualified" according to Unicode
/// Technical Standard #51. Use [`add`] for all allowed cases.
///
/// Mostly useful when bridging to networks that expect fully-qualified
/// emoji.
pub fn fully_qualify(text: &str) -> String {
    DEFAULT.fully_qualify(text)
}
