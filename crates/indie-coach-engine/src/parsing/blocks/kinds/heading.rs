use crate::parsing::blocks::types::Block;

use super::emoji;

/// ATX heading with owned prefix and icon constants.
///
/// Only levels 1 to 3 are recognized; `#### ` falls through to a paragraph.
pub struct Heading;

impl Heading {
    /// `(prefix, level, default icon)` in precedence order.
    pub const LEVELS: [(&'static str, u8, &'static str); 3] =
        [("# ", 1, "🎵"), ("## ", 2, "💡"), ("### ", 3, "✅")];

    /// Parses `block` as a heading of the given level, if its prefix matches.
    pub fn parse(block: &str, level: u8) -> Option<Block> {
        let (prefix, _, default_icon) = Self::LEVELS.iter().find(|(_, l, _)| *l == level)?;
        let content = block.strip_prefix(prefix)?;
        let (icon, text) = emoji::take_icon(content);

        Some(Block::Heading {
            level,
            icon: icon.unwrap_or_else(|| default_icon.to_string()),
            text: text.trim().to_string(),
        })
    }
}
