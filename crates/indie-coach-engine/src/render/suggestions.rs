use std::borrow::Cow;

/// Follow-up prompt block the model appends to a response.
pub struct Suggestions;

impl Suggestions {
    pub const OPEN: &'static str = "[SUGGESTIONS]";
    pub const CLOSE: &'static str = "[/SUGGESTIONS]";
    pub const SEPARATOR: char = '|';
}

/// Removes every complete `[SUGGESTIONS]a|b|c[/SUGGESTIONS]` block from
/// `text`, returning the remaining body and the collected prompts.
///
/// Prompts are trimmed and empty ones dropped. An opening tag without a
/// close is left in the body untouched.
pub fn split_suggestions(text: &str) -> (Cow<'_, str>, Vec<String>) {
    let mut body = String::new();
    let mut prompts = Vec::new();
    let mut pos = 0;

    while let Some(open_rel) = text[pos..].find(Suggestions::OPEN) {
        let open_at = pos + open_rel;
        let inner_start = open_at + Suggestions::OPEN.len();
        let Some(close_rel) = text[inner_start..].find(Suggestions::CLOSE) else {
            break;
        };
        let inner_end = inner_start + close_rel;

        body.push_str(&text[pos..open_at]);
        prompts.extend(
            text[inner_start..inner_end]
                .split(Suggestions::SEPARATOR)
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        );
        pos = inner_end + Suggestions::CLOSE.len();
    }

    if pos == 0 {
        return (Cow::Borrowed(text), prompts);
    }
    body.push_str(&text[pos..]);
    (Cow::Owned(body), prompts)
}
