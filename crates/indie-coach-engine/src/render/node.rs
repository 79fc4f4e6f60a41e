use serde::Serialize;

use crate::{
    parsing::{Block, CalloutKind, InlineSpan, parse_inline},
    widgets::{BudgetTableData, TicketEstimatorData, WidgetKind},
};

/// Default icon for bullet items without a leading emoji.
pub const BULLET_ICON: &str = "✨";

/// One renderable unit of a response, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderNode {
    Heading {
        level: u8,
        icon: String,
        content: Vec<InlineSpan>,
    },
    Callout {
        callout: CalloutKind,
        icon: Option<String>,
        content: Vec<InlineSpan>,
    },
    Table {
        headers: Vec<Vec<InlineSpan>>,
        rows: Vec<Vec<Vec<InlineSpan>>>,
    },
    OrderedList {
        items: Vec<RenderedItem>,
    },
    UnorderedList {
        items: Vec<RenderedItem>,
    },
    Paragraph {
        content: Vec<InlineSpan>,
    },
    BudgetTable {
        data: BudgetTableData,
    },
    TicketEstimator {
        data: TicketEstimatorData,
    },
    /// A widget whose payload could not be decoded. Carries nothing but
    /// the widget kind.
    WidgetError {
        widget: WidgetKind,
    },
}

/// A list item ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedItem {
    /// 1-based badge number; only set in ordered lists.
    pub number: Option<usize>,
    /// Bullet lists always have an icon; ordered items only when the text
    /// started with an emoji.
    pub icon: Option<String>,
    pub content: Vec<InlineSpan>,
}

impl From<Block> for RenderNode {
    fn from(block: Block) -> Self {
        match block {
            Block::Heading { level, icon, text } => RenderNode::Heading {
                level,
                icon,
                content: parse_inline(&text),
            },
            Block::Callout { kind, body } => RenderNode::Callout {
                callout: kind,
                icon: kind.icon().map(str::to_string),
                content: parse_inline(&body),
            },
            Block::Table { headers, rows } => RenderNode::Table {
                headers: headers.iter().map(|h| parse_inline(h)).collect(),
                rows: rows
                    .iter()
                    .map(|row| row.iter().map(|cell| parse_inline(cell)).collect())
                    .collect(),
            },
            Block::OrderedList { items } => RenderNode::OrderedList {
                items: items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| RenderedItem {
                        number: Some(i + 1),
                        content: parse_inline(&item.text),
                        icon: item.icon,
                    })
                    .collect(),
            },
            Block::UnorderedList { items } => RenderNode::UnorderedList {
                items: items
                    .into_iter()
                    .map(|item| RenderedItem {
                        number: None,
                        content: parse_inline(&item.text),
                        icon: Some(item.icon.unwrap_or_else(|| BULLET_ICON.to_string())),
                    })
                    .collect(),
            },
            Block::Paragraph { text } => RenderNode::Paragraph {
                content: parse_inline(&text),
            },
        }
    }
}
