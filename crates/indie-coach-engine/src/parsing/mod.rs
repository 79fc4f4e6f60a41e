//! # Markdown Parsing
//!
//! The markdown subset understood in model responses: block-level
//! classification (`blocks`) and flat inline markup (`inline`).
//!
//! This is deliberately not a general markdown engine. There is no nested
//! block recursion, no link or image syntax and no code fences.

pub mod blocks;
pub mod inline;

pub use blocks::{Block, CalloutKind, ListItem, parse_blocks};
pub use inline::{InlineSpan, parse_inline, plain_text};
