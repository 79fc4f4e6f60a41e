use crate::{
    calc::{BudgetTable, TicketEstimator, format_currency},
    parsing::{
        InlineSpan,
        inline::kinds::{Bold, CodeSpan, Italic},
    },
};

use super::node::{RenderNode, RenderedItem};

/// Renders nodes as a compact one-node-per-line text outline.
///
/// Inline markup is re-emitted with its delimiters and embedded newlines
/// are shown as `⏎`, so each node kind is easy to eyeball. Used for
/// terminal dumps and test snapshots.
pub fn outline(nodes: &[RenderNode]) -> String {
    let mut lines = Vec::new();
    for node in nodes {
        match node {
            RenderNode::Heading {
                level,
                icon,
                content,
            } => lines.push(format!("h{level} {icon} {}", spans(content))),
            RenderNode::Callout {
                callout,
                icon,
                content,
            } => {
                let kind = callout.name();
                match icon {
                    Some(icon) => lines.push(format!("{kind} {icon} {}", spans(content))),
                    None => lines.push(format!("{kind} {}", spans(content))),
                }
            }
            RenderNode::Table { headers, rows } => {
                lines.push(format!("table | {} |", cells(headers)));
                for row in rows {
                    lines.push(format!("  | {} |", cells(row)));
                }
            }
            RenderNode::OrderedList { items } => {
                lines.push("ol".to_string());
                lines.extend(items.iter().map(item));
            }
            RenderNode::UnorderedList { items } => {
                lines.push("ul".to_string());
                lines.extend(items.iter().map(item));
            }
            RenderNode::Paragraph { content } => lines.push(format!("p {}", spans(content))),
            RenderNode::BudgetTable { data } => lines.push(format!(
                "budget_table rows={} total={}",
                data.rows.len(),
                format_currency(BudgetTable::new(data).total())
            )),
            RenderNode::TicketEstimator { data } => {
                let projection = TicketEstimator::new(&data.defaults).projection();
                lines.push(format!(
                    "ticket_estimator sold={} net={}",
                    projection.tickets_sold,
                    format_currency(projection.net_profit)
                ));
            }
            RenderNode::WidgetError { widget } => lines.push(format!("widget_error {widget}")),
        }
    }
    lines.join("\n")
}

fn item(item: &RenderedItem) -> String {
    let mut out = String::from("  ");
    if let Some(n) = item.number {
        out.push_str(&format!("{n}. "));
    }
    if let Some(icon) = &item.icon {
        out.push_str(icon);
        out.push(' ');
    }
    out.push_str(&spans(&item.content));
    out
}

fn cells(cells: &[Vec<InlineSpan>]) -> String {
    cells.iter().map(|c| spans(c)).collect::<Vec<_>>().join(" | ")
}

fn spans(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Text(s) => s.clone(),
            InlineSpan::Bold(s) => format!("{0}{s}{0}", Bold::DELIM),
            InlineSpan::Italic(s) => format!("{0}{s}{0}", Italic::DELIM),
            InlineSpan::Code(s) => format!("{0}{s}{0}", CodeSpan::TICK),
        })
        .collect::<String>()
        .replace('\n', "⏎")
}
