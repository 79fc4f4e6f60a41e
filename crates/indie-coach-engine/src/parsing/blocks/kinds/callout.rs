use serde::Serialize;

use crate::parsing::blocks::types::Block;

/// Callout flavour of a `>` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutKind {
    Tip,
    Important,
    Action,
    /// A plain `> ` blockquote with no bracket tag.
    Quote,
}

impl CalloutKind {
    /// The bracket tag introducing the callout, if the kind has one.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            CalloutKind::Tip => Some("[!TIP]"),
            CalloutKind::Important => Some("[!IMPORTANT]"),
            CalloutKind::Action => Some("[!ACTION]"),
            CalloutKind::Quote => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CalloutKind::Tip => "tip",
            CalloutKind::Important => "important",
            CalloutKind::Action => "action",
            CalloutKind::Quote => "quote",
        }
    }

    /// Icon shown beside the callout body.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            CalloutKind::Tip => Some("✨"),
            CalloutKind::Important => Some("ℹ"),
            CalloutKind::Action => Some("✔"),
            CalloutKind::Quote => None,
        }
    }
}

/// Blockquote syntax shared by callouts and plain quotes.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';
    /// What a quote block must start with to be recognized.
    pub const OPENER: &'static str = "> ";

    /// Strips one `>` and at most one following space from every line.
    ///
    /// Lines without the prefix are kept as they are (lazy continuation).
    pub fn strip_lines(block: &str) -> String {
        block
            .split('\n')
            .map(|line| match line.strip_prefix(Self::PREFIX) {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => line,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Parses a tagged callout of `kind`.
    pub fn parse_callout(block: &str, kind: CalloutKind) -> Option<Block> {
        let tag = kind.tag()?;
        let rest = block.strip_prefix(Self::OPENER)?;
        if !rest.starts_with(tag) {
            return None;
        }

        let body = Self::strip_lines(block).replacen(tag, "", 1);
        Some(Block::Callout {
            kind,
            body: body.trim().to_string(),
        })
    }

    /// Parses an untagged `> ` blockquote.
    pub fn parse_quote(block: &str) -> Option<Block> {
        if !block.starts_with(Self::OPENER) {
            return None;
        }
        Some(Block::Callout {
            kind: CalloutKind::Quote,
            body: Self::strip_lines(block),
        })
    }
}
