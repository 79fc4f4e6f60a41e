use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{
    kinds::{Bold, CodeSpan, Italic},
    types::InlineSpan,
};

/// Parses inline markup into a flat sequence of [`InlineSpan`]s.
///
/// Tokens are found with one left-to-right scan; `.` in the tokenizer does not
/// cross line breaks, so markup never spans lines. A token whose content is
/// empty (`**`, ``` `` ```) is kept as plain text. Adjacent plain text is
/// merged and empty plain text is never emitted, so `""` yields no spans.
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    let token_regex = TOKEN_REGEX.get_or_init(|| {
        Regex::new(r"(?P<bold>\*\*.*?\*\*)|(?P<italic>\*.*?\*)|(?P<code>`.*?`)")
            .expect("Invalid inline token regex")
    });

    let mut out = Vec::new();
    let mut last = 0;

    for caps in token_regex.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_text(&mut out, &text[last..whole.start()]);
        match classify_token(&caps) {
            Some(span) => out.push(span),
            None => push_text(&mut out, whole.as_str()),
        }
        last = whole.end();
    }

    push_text(&mut out, &text[last..]);
    out
}

/// Maps a tokenizer match to its span, or `None` when the token is empty.
fn classify_token(caps: &Captures<'_>) -> Option<InlineSpan> {
    if let Some(m) = caps.name("bold") {
        return unwrap(m.as_str(), Bold::DELIM).map(InlineSpan::Bold);
    }
    if let Some(m) = caps.name("italic") {
        return unwrap(m.as_str(), Italic::DELIM).map(InlineSpan::Italic);
    }
    if let Some(m) = caps.name("code") {
        return unwrap(m.as_str(), CodeSpan::TICK).map(InlineSpan::Code);
    }
    None
}

fn unwrap(token: &str, delim: &str) -> Option<String> {
    let inner = token.strip_prefix(delim)?.strip_suffix(delim)?;
    (!inner.is_empty()).then(|| inner.to_string())
}

fn push_text(out: &mut Vec<InlineSpan>, s: &str) {
    if s.is_empty() {
        return;
    }
    if let Some(InlineSpan::Text(prev)) = out.last_mut() {
        prev.push_str(s);
    } else {
        out.push(InlineSpan::Text(s.to_string()));
    }
}
