use serde::Serialize;

use super::kinds::CalloutKind;

/// A block-level element produced by the block parser.
///
/// Text fields hold the content after prefix stripping but before inline
/// parsing; the render pipeline runs [`parse_inline`] over them.
///
/// [`parse_inline`]: crate::parsing::inline::parse_inline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    /// `#`, `##` or `###` heading. `icon` is the leading emoji of the
    /// heading text, or the level's default icon.
    Heading { level: u8, icon: String, text: String },
    /// A `> [!TAG]` callout or a plain `> ` blockquote.
    Callout { kind: CalloutKind, body: String },
    /// A pipe table. Every row has exactly `headers.len()` cells.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// `1. `-style list.
    OrderedList { items: Vec<ListItem> },
    /// `* ` or `- ` list.
    UnorderedList { items: Vec<ListItem> },
    /// Fallback for anything else; whitespace is preserved.
    Paragraph { text: String },
}

/// One list line with its marker removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Leading emoji split off the item text, if there was one.
    pub icon: Option<String>,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn callout_serializes_with_block_tag() {
        let block = Block::Callout {
            kind: CalloutKind::Tip,
            body: "Warm up first".into(),
        };
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({"block": "callout", "kind": "tip", "body": "Warm up first"})
        );
    }

    #[test]
    fn list_items_serialize_inside_list() {
        let block = Block::UnorderedList {
            items: vec![ListItem {
                icon: Some("🎤".into()),
                text: "Record".into(),
            }],
        };
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({"block": "unordered_list", "items": [{"icon": "🎤", "text": "Record"}]})
        );
    }
}
