use std::sync::OnceLock;

use regex::Regex;

/// Splits a leading emoji off `s`.
///
/// An emoji here is a flag (two regional indicators), or a code point with
/// the `Emoji_Presentation` or `Extended_Pictographic` property followed by
/// an optional U+FE0F variation selector and skin-tone modifier, repeated
/// across U+200D joiners. Returns `(emoji, rest)` with `rest` untrimmed.
pub fn split_leading(s: &str) -> Option<(&str, &str)> {
    static EMOJI_REGEX: OnceLock<Regex> = OnceLock::new();
    let emoji_regex = EMOJI_REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:[\x{1F1E6}-\x{1F1FF}]{2}",
            r"|(?:\p{Emoji_Presentation}|\p{Extended_Pictographic})\x{FE0F}?[\x{1F3FB}-\x{1F3FF}]?",
            r"(?:\x{200D}(?:\p{Emoji_Presentation}|\p{Extended_Pictographic})\x{FE0F}?[\x{1F3FB}-\x{1F3FF}]?)*)",
        ))
        .expect("Invalid emoji regex")
    });

    let m = emoji_regex.find(s)?;
    Some((m.as_str(), &s[m.end()..]))
}

/// Resolves the icon slot and display text of a heading or list item.
///
/// With a leading emoji the emoji becomes the icon and the remainder is
/// trimmed; otherwise the text is returned unchanged with no icon.
pub fn take_icon(content: &str) -> (Option<String>, &str) {
    match split_leading(content) {
        Some((emoji, rest)) => (Some(emoji.to_string()), rest.trim()),
        None => (None, content),
    }
}
