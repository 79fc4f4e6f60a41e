use serde::Serialize;

/// A run of inline text carrying exactly one markup style.
///
/// Spans never nest. The inline parser runs once per piece of block text,
/// so markup inside a bold span stays literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "text", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Plain text outside any markup.
    Text(String),
    /// `**bold**`, stored without the delimiters.
    Bold(String),
    /// `*italic*`, stored without the delimiters.
    Italic(String),
    /// `` `code` ``, stored without the backticks.
    Code(String),
}

impl InlineSpan {
    /// The span's visible content, without delimiters.
    pub fn content(&self) -> &str {
        match self {
            InlineSpan::Text(s) | InlineSpan::Bold(s) | InlineSpan::Italic(s) | InlineSpan::Code(s) => {
                s
            }
        }
    }
}

/// Concatenates the visible content of `spans`, dropping all markup.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::content).collect()
}
