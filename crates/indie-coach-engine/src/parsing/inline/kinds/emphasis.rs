/// Strong emphasis (`**bold**`).
pub struct Bold;

impl Bold {
    pub const DELIM: &'static str = "**";
}

/// Emphasis (`*italic*`).
pub struct Italic;

impl Italic {
    pub const DELIM: &'static str = "*";
}
