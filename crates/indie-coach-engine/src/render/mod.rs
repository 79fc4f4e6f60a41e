//! # Rendering
//!
//! Turns raw model output into render nodes:
//!
//! ```text
//! raw text ─► split_suggestions ─► extract_segments ─┬─ Text ───► parse_blocks ─► parse_inline
//!                                                    └─ Widget ─► decode (or WidgetError)
//! ```
//!
//! The pipeline is a pure function of its input and is re-run from scratch
//! on every pass while a response streams in, so truncated input (an open
//! widget tag, half a table) must degrade to plain rendering rather than
//! fail. Nothing produced here is persisted.

pub mod node;
pub mod outline;
pub mod suggestions;

use serde::Serialize;

use crate::{
    parsing::parse_blocks,
    widgets::{self, Segment, WidgetKind, WidgetPayload, extract_segments},
};

pub use node::{BULLET_ICON, RenderNode, RenderedItem};
pub use outline::outline;
pub use suggestions::{Suggestions, split_suggestions};

/// A rendered model response plus the follow-up prompts it offered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedResponse {
    pub nodes: Vec<RenderNode>,
    pub suggestions: Vec<String>,
}

/// Renders `text` into nodes in source order. Never fails.
pub fn render(text: &str) -> Vec<RenderNode> {
    let mut nodes = Vec::new();
    for segment in extract_segments(text) {
        match segment {
            Segment::Text(s) => nodes.extend(parse_blocks(s).into_iter().map(RenderNode::from)),
            Segment::Widget { kind, body, .. } => nodes.push(render_widget(kind, body)),
        }
    }
    log::debug!("rendered {} bytes into {} nodes", text.len(), nodes.len());
    nodes
}

/// Splits off follow-up suggestions, then renders the remaining body.
pub fn render_response(text: &str) -> RenderedResponse {
    let (body, suggestions) = split_suggestions(text);
    RenderedResponse {
        nodes: render(&body),
        suggestions,
    }
}

fn render_widget(kind: WidgetKind, body: &str) -> RenderNode {
    match widgets::decode(kind, body) {
        Ok(WidgetPayload::BudgetTable(data)) => RenderNode::BudgetTable { data },
        Ok(WidgetPayload::TicketEstimator(data)) => RenderNode::TicketEstimator { data },
        Err(e) => {
            log::warn!("Failed to render widget: {e}");
            RenderNode::WidgetError { widget: kind }
        }
    }
}
