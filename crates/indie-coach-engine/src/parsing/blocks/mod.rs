//! # Block Parsing
//!
//! Splits a run of plain text into block-level elements.
//!
//! ## Parsing Phases
//!
//! 1. **Normalization**: CRLF becomes LF and runs of three or more newlines
//!    collapse to exactly two.
//! 2. **Splitting**: the text is cut at every blank line (`\n\n`); blocks that
//!    are empty after trimming are discarded.
//! 3. **Classification** (`classify`): each raw block goes through the ordered
//!    `BlockClassifier::RULES` table; the first match wins and `Paragraph` is
//!    the fallback.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `ListItem`)
//! - **`kinds`**: Block-specific types owning their syntax (Heading, BlockQuote, Table, List, Paragraph)
//! - **`classify`**: `BlockClassifier` with the precedence-ordered rule table
//!
//! ## Key Invariants
//!
//! - No nesting: a block's content is never block-parsed again
//! - Total over all input: every non-empty block maps to exactly one `Block`

pub mod classify;
pub mod kinds;
pub mod types;

use std::sync::OnceLock;

use regex::Regex;

pub use classify::BlockClassifier;
pub use kinds::CalloutKind;
pub use types::{Block, ListItem};

/// Parses `text` into blocks in source order.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let classifier = BlockClassifier;
    split_blocks(&normalize_blank_lines(text))
        .into_iter()
        .map(|raw| classifier.classify(raw))
        .collect()
}

/// Converts CRLF to LF and collapses three or more newlines to two.
pub fn normalize_blank_lines(text: &str) -> String {
    static BLANK_RUN_REGEX: OnceLock<Regex> = OnceLock::new();
    let blank_run_regex =
        BLANK_RUN_REGEX.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex"));

    let text = text.replace("\r\n", "\n");
    blank_run_regex.replace_all(&text, "\n\n").into_owned()
}

/// Splits normalized text on blank lines.
///
/// Stray newlines at either end of a block are removed (these show up next
/// to widget tags); leading spaces are kept since they affect classification.
pub fn split_blocks(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(|raw| raw.trim_matches('\n'))
        .filter(|raw| !raw.trim().is_empty())
        .collect()
}
