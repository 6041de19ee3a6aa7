/// Variation Selector-15, requests text presentation of the preceding character.
pub const VS15: char = '\u{FE0E}';
/// Variation Selector-16, requests emoji presentation of the preceding character.
pub const VS16: char = '\u{FE0F}';
/// Zero-width joiner used to glue emoji into a single glyph.
pub const ZWJ: char = '\u{200D}';

/// Fitzpatrick skin tone modifiers (light to dark).
pub const SKIN_TONE_MODIFIERS: [char; 5] = [
    '\u{1F3FB}',
    '\u{1F3FC}',
    '\u{1F3FD}',
    '\u{1F3FE}',
    '\u{1F3FF}',
];

/// Single code point emoji that accept VS16 but are not covered by the
/// fully-qualified table. Generated from emoji-variation-sequences.txt.
pub const EXTRA_VARIATIONS_JSON: &str = include_str!("../data/emojis-with-extra-variations.json");

/// Fully-qualified emoji sequences containing at least one VS16.
/// Generated from emoji-test.txt.
pub const FULLY_QUALIFIED_JSON: &str = include_str!("../data/fully-qualified-variations.json");

pub fn is_skin_tone_modifier(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}
