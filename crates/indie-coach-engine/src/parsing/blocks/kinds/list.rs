use crate::parsing::blocks::types::{Block, ListItem};

use super::emoji;

/// Bullet and numbered list syntax.
pub struct List;

impl List {
    /// Bullet markers a list block may start with.
    pub const BULLETS: [&'static str; 2] = ["* ", "- "];
    /// Icon for bullet items without a leading emoji.
    pub const DEFAULT_ICON: &'static str = "✨";

    /// Parses `block` as a list.
    ///
    /// The block must start with a bullet or an ordered marker. Whether the
    /// list is ordered is decided by the first non-blank line; blank lines
    /// are skipped.
    pub fn parse(block: &str) -> Option<Block> {
        let opens = Self::BULLETS.iter().any(|b| block.starts_with(b))
            || Self::strip_ordered(block).is_some();
        if !opens {
            return None;
        }

        let lines: Vec<&str> = block.split('\n').filter(|l| !l.trim().is_empty()).collect();
        let ordered = lines
            .first()
            .is_some_and(|first| Self::strip_ordered(first).is_some());

        let items = lines
            .into_iter()
            .map(|line| {
                let content = if ordered {
                    Self::strip_ordered(line).unwrap_or(line)
                } else {
                    Self::strip_bullet(line)
                };
                let (icon, text) = emoji::take_icon(content);
                ListItem {
                    icon,
                    text: text.to_string(),
                }
            })
            .collect();

        Some(if ordered {
            Block::OrderedList { items }
        } else {
            Block::UnorderedList { items }
        })
    }

    /// Strips `digits . whitespace` from the start of `line`.
    pub fn strip_ordered(line: &str) -> Option<&str> {
        let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        let rest = line[digits..].strip_prefix('.')?;
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => Some(chars.as_str()),
            _ => None,
        }
    }

    /// Strips `* ` or `-` plus one whitespace character; other lines are
    /// returned unchanged.
    pub fn strip_bullet(line: &str) -> &str {
        if let Some(rest) = line.strip_prefix("* ") {
            return rest;
        }
        if let Some(rest) = line.strip_prefix('-') {
            let mut chars = rest.chars();
            if chars.next().is_some_and(char::is_whitespace) {
                return chars.as_str();
            }
        }
        line
    }
}
