use proptest::prelude::*;
use variationselector::constants::is_skin_tone_modifier;
use variationselector::{add, fully_qualify, remove, VS15, VS16};

/// Characters that interact with the tables: selectors, joiners, skin tones,
/// bases from both tables, keycap parts and plain text.
const ALPHABET: &[char] = &[
    '\u{FE0F}', '\u{FE0E}', '\u{200D}', '\u{20E3}', '\u{1F3FB}', '\u{1F3FF}', '\u{2764}',
    '\u{261D}', '\u{231A}', '\u{1F4BB}', '\u{1F44D}', '\u{1F441}', '\u{1F5E8}', '\u{1F3F3}',
    '\u{1F308}', '\u{1F468}', '\u{1F469}', '\u{2642}', '\u{1F525}', '#', '1', 'a', ' ',
];

fn emoji_text() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec(prop::sample::select(ALPHABET), 0..24)
            .prop_map(|chars| chars.into_iter().collect::<String>()),
        any::<String>(),
    ]
}

fn selector_before_modifier(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(2)
        .any(|w| w[0] == VS16 && (w[1] == VS15 || is_skin_tone_modifier(w[1])))
}

proptest! {
    #[test]
    fn remove_is_idempotent(s in emoji_text()) {
        let once = remove(&s);
        prop_assert!(!once.contains(VS16));
        prop_assert_eq!(remove(&once), once);
    }

    #[test]
    fn fully_qualify_is_idempotent(s in emoji_text()) {
        let once = fully_qualify(&s);
        prop_assert_eq!(fully_qualify(&once), once);
    }

    #[test]
    fn add_is_idempotent(s in emoji_text()) {
        let once = add(&s);
        prop_assert_eq!(add(&once), once);
    }

    #[test]
    fn only_selectors_change(s in emoji_text()) {
        prop_assert_eq!(remove(&add(&s)), remove(&s));
        prop_assert_eq!(remove(&fully_qualify(&s)), remove(&s));
    }

    #[test]
    fn no_selector_before_skin_tone(s in emoji_text()) {
        prop_assert!(!selector_before_modifier(&fully_qualify(&s)));
        prop_assert!(!selector_before_modifier(&add(&s)));
    }
}
