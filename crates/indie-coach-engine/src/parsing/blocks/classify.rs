use super::{
    kinds::{BlockQuote, CalloutKind, Heading, List, Paragraph, Table},
    types::Block,
};

/// A block rule: returns the block when the raw text matches its shape.
pub type Rule = fn(&str) -> Option<Block>;

/// Classifies raw blocks by trying [`BlockClassifier::RULES`] in order.
///
/// The first matching rule wins; [`Paragraph`] is the fallback, so
/// classification never fails.
pub struct BlockClassifier;

impl BlockClassifier {
    /// Block rules in precedence order, each with a name for diagnostics.
    pub const RULES: &'static [(&'static str, Rule)] = &[
        ("heading1", |b| Heading::parse(b, 1)),
        ("heading2", |b| Heading::parse(b, 2)),
        ("heading3", |b| Heading::parse(b, 3)),
        ("tip", |b| BlockQuote::parse_callout(b, CalloutKind::Tip)),
        ("important", |b| {
            BlockQuote::parse_callout(b, CalloutKind::Important)
        }),
        ("action", |b| BlockQuote::parse_callout(b, CalloutKind::Action)),
        ("blockquote", BlockQuote::parse_quote),
        ("table", Table::parse),
        ("list", List::parse),
    ];

    /// Classifies one raw block (already split on blank lines).
    pub fn classify(&self, raw: &str) -> Block {
        for (name, rule) in Self::RULES {
            if let Some(block) = rule(raw) {
                log::trace!("block matched rule `{name}`");
                return block;
            }
        }
        Paragraph::parse(raw)
    }
}
