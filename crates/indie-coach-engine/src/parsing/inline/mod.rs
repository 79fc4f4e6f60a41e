//! # Inline Parsing
//!
//! Splits a piece of block text into flat [`InlineSpan`]s.
//!
//! ## Architecture
//!
//! Inline parsing runs after block classification, once per piece of text a
//! block exposes (heading text, callout body, table cell, list item,
//! paragraph). A single tokenizer regex finds `**bold**`, `*italic*` and
//! `` `code` `` tokens left to right; everything between tokens is plain text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Text, Bold, Italic, Code)
//! - **`kinds`**: Inline-specific types with owned delimiters (Bold, Italic, CodeSpan)
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Precedence
//!
//! Alternatives are tried in order at each position: bold before italic
//! before code. The leftmost token wins, so in `` `a*b*c` `` the code span
//! starts first and keeps the asterisks literal.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineSpan, plain_text};
