use crate::parsing::blocks::types::Block;

/// Paragraph block type.
///
/// Paragraphs have no delimiters; they are the fallback when no other rule
/// matches, so every non-empty block maps to some node.
pub struct Paragraph;

impl Paragraph {
    pub fn parse(block: &str) -> Block {
        Block::Paragraph {
            text: block.to_string(),
        }
    }
}
