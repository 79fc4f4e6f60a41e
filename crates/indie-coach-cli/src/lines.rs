use indie_coach_engine::{
    BudgetTable, Message, MessageView, RenderNode, RenderedItem, Role, TicketEstimator,
    TicketField, format_currency,
    parsing::{CalloutKind, InlineSpan, plain_text},
    widgets::BudgetTableData,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::app::{App, Calculator, Field, Focus};

/// Builds the content pane for the selected session.
pub fn session_lines(app: &App) -> Vec<Line<'static>> {
    let Some(session) = app.selected_session() else {
        return vec![Line::from("No chat sessions in history")];
    };

    let mut painter = Painter {
        calculators: &app.calculators,
        focus: app.focused(),
        buffer: &app.buffer,
        next_calculator: 0,
        lines: Vec::new(),
    };
    for (message, view) in session.messages.iter().zip(&app.views) {
        painter.message(message, view);
    }
    painter.lines
}

struct Painter<'a> {
    calculators: &'a [Calculator],
    focus: Option<Focus>,
    buffer: &'a str,
    next_calculator: usize,
    lines: Vec<Line<'static>>,
}

impl Painter<'_> {
    fn message(&mut self, message: &Message, view: &MessageView) {
        let (who, color) = match message.role {
            Role::User => ("You", Color::Blue),
            Role::Model => ("Coach", Color::Magenta),
        };
        self.lines.push(Line::from(Span::styled(
            who,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));

        for file in message.attachments() {
            self.lines.push(Line::from(format!("📎 {} ({})", file.name, file.mime_type)));
        }

        match view {
            MessageView::Plain(text) => {
                self.lines
                    .extend(text.split('\n').map(|l| Line::from(l.to_string())));
            }
            MessageView::Rich(rendered) => {
                for node in &rendered.nodes {
                    self.node(node);
                }
                if !rendered.suggestions.is_empty() {
                    self.lines.push(Line::from(Span::styled(
                        "Ask next:",
                        Style::default().fg(Color::DarkGray),
                    )));
                    for suggestion in &rendered.suggestions {
                        self.lines.push(Line::from(Span::styled(
                            format!("  › {suggestion}"),
                            Style::default().fg(Color::DarkGray),
                        )));
                    }
                }
            }
        }
        self.lines.push(Line::default());
    }

    fn node(&mut self, node: &RenderNode) {
        match node {
            RenderNode::Heading {
                level,
                icon,
                content,
            } => {
                let color = match level {
                    1 => Color::Magenta,
                    2 => Color::Cyan,
                    _ => Color::Green,
                };
                let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                let prefix = vec![Span::styled(format!("{icon} "), style)];
                self.lines.extend(inline_lines(prefix, content, style));
            }
            RenderNode::Callout {
                callout,
                icon,
                content,
            } => {
                let (color, base) = match callout {
                    CalloutKind::Tip => (Color::Green, Style::default()),
                    CalloutKind::Important => (Color::Cyan, Style::default()),
                    CalloutKind::Action => (Color::Yellow, Style::default()),
                    CalloutKind::Quote => (
                        Color::DarkGray,
                        Style::default().add_modifier(Modifier::ITALIC),
                    ),
                };
                let mut prefix = vec![Span::styled("│ ", Style::default().fg(color))];
                if let Some(icon) = icon {
                    prefix.push(Span::styled(format!("{icon} "), Style::default().fg(color)));
                }
                self.lines.extend(inline_lines(prefix, content, base));
            }
            RenderNode::Table { headers, rows } => self.table(headers, rows),
            RenderNode::OrderedList { items } | RenderNode::UnorderedList { items } => {
                for item in items {
                    self.lines.extend(list_item(item));
                }
            }
            RenderNode::Paragraph { content } => {
                self.lines
                    .extend(inline_lines(Vec::new(), content, Style::default()));
            }
            RenderNode::BudgetTable { data } => {
                let index = self.take_calculator();
                let table = match self.calculators.get(index) {
                    Some(Calculator::Budget(table)) => table.clone(),
                    _ => BudgetTable::new(data),
                };
                self.budget(index, data, &table);
            }
            RenderNode::TicketEstimator { data } => {
                let index = self.take_calculator();
                let estimator = match self.calculators.get(index) {
                    Some(Calculator::Ticket(estimator)) => estimator.clone(),
                    _ => TicketEstimator::new(&data.defaults),
                };
                self.tickets(index, &estimator);
            }
            RenderNode::WidgetError { widget } => {
                self.lines.push(Line::from(Span::styled(
                    format!("⚠ Could not display the {widget} widget"),
                    Style::default().fg(Color::Red),
                )));
            }
        }
        self.lines.push(Line::default());
    }

    fn take_calculator(&mut self) -> usize {
        let index = self.next_calculator;
        self.next_calculator += 1;
        index
    }

    fn table(&mut self, headers: &[Vec<InlineSpan>], rows: &[Vec<Vec<InlineSpan>>]) {
        let headers: Vec<String> = headers.iter().map(|h| plain_text(h)).collect();
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|c| plain_text(c)).collect())
            .collect();

        let widths: Vec<usize> = (0..headers.len())
            .map(|i| {
                std::iter::once(&headers)
                    .chain(&rows)
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let fmt_row = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:<w$}"))
                .collect::<Vec<_>>()
                .join(" │ ")
        };

        self.lines.push(Line::from(Span::styled(
            fmt_row(&headers),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        self.lines.push(Line::from(
            widths
                .iter()
                .map(|w| "─".repeat(*w))
                .collect::<Vec<_>>()
                .join("─┼─"),
        ));
        for row in &rows {
            self.lines.push(Line::from(fmt_row(row)));
        }
    }

    fn budget(&mut self, index: usize, data: &BudgetTableData, table: &BudgetTable) {
        let header = |i: usize| data.headers.get(i).map(String::as_str).unwrap_or("");
        let item_width = data
            .rows
            .iter()
            .map(|r| r.item.chars().count())
            .chain([header(0).chars().count()])
            .max()
            .unwrap_or(0);

        self.lines.push(Line::from(Span::styled(
            format!(
                "{:<item_width$}  {:>10}  {:>10}  {:>10}",
                header(0),
                header(1),
                header(2),
                header(3)
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        for (row, (budget_row, estimate)) in data.rows.iter().zip(table.estimates()).enumerate() {
            let value = self.field(index, Field::Estimate(row), format_currency(*estimate), 10);
            self.lines.push(Line::from(vec![
                Span::raw(format!(
                    "{:<item_width$}  {:>10}  {:>10}  ",
                    budget_row.item,
                    format_currency(budget_row.low),
                    format_currency(budget_row.high)
                )),
                value,
            ]));
        }

        self.lines.push(Line::from(Span::styled(
            format!("Total Estimated: {}", format_currency(table.total())),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
    }

    fn tickets(&mut self, index: usize, estimator: &TicketEstimator) {
        self.lines.push(Line::from(Span::styled(
            "🎟 Ticket & Merch Estimator",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for field in TicketField::ALL {
            let display = ticket_value(field, estimator.get(field));
            let value = self.field(index, Field::Ticket(field), display, 0);
            self.lines.push(Line::from(vec![
                Span::raw(format!("  {:<24}", field.label())),
                value,
            ]));
        }

        let p = estimator.projection();
        let figures = [
            ("Tickets Sold", p.tickets_sold.to_string()),
            ("Gross Ticket Revenue", format_currency(p.gross_ticket_revenue)),
            ("Gross Merch Revenue", format_currency(p.gross_merch_revenue)),
            ("Total Gross Revenue", format_currency(p.total_gross_revenue)),
            ("Venue's Cut", format_currency(p.venue_cut_cost)),
            ("Total Costs", format_currency(p.total_costs)),
        ];
        for (label, value) in figures {
            self.lines.push(Line::from(format!("  {label:<24}{value}")));
        }

        let color = if p.net_profit < 0.0 {
            Color::Red
        } else {
            Color::Green
        };
        self.lines.push(Line::from(Span::styled(
            format!("  {:<24}{}", "Net Profit", format_currency(p.net_profit)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    /// An editable value; the focused one shows the raw input buffer.
    fn field(&self, calculator: usize, field: Field, display: String, width: usize) -> Span<'static> {
        let focused = self.focus == Some(Focus { calculator, field });
        if focused {
            Span::styled(
                format!("[{:>width$}]", self.buffer, width = width.saturating_sub(2)),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            )
        } else {
            Span::styled(
                format!("{display:>width$}"),
                Style::default().add_modifier(Modifier::UNDERLINED),
            )
        }
    }
}

fn ticket_value(field: TicketField, value: f64) -> String {
    match field.unit() {
        Some("%") => format!("{value}%"),
        Some(_) => format_currency(value),
        None if field == TicketField::VenueCapacity => value.to_string(),
        None => format_currency(value),
    }
}

fn list_item(item: &RenderedItem) -> Vec<Line<'static>> {
    let mut prefix = String::from("  ");
    if let Some(n) = item.number {
        prefix.push_str(&format!("{n}. "));
    }
    if let Some(icon) = &item.icon {
        prefix.push_str(icon);
        prefix.push(' ');
    }
    inline_lines(vec![Span::raw(prefix)], &item.content, Style::default())
}

/// Lays out inline spans, starting a new line at every `\n` in the text.
fn inline_lines(
    prefix: Vec<Span<'static>>,
    spans: &[InlineSpan],
    base: Style,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current = prefix;

    for span in spans {
        let style = match span {
            InlineSpan::Text(_) => base,
            InlineSpan::Bold(_) => base.add_modifier(Modifier::BOLD),
            InlineSpan::Italic(_) => base.add_modifier(Modifier::ITALIC),
            InlineSpan::Code(_) => base.fg(Color::Yellow),
        };
        let mut pieces = span.content().split('\n');
        if let Some(first) = pieces.next()
            && !first.is_empty()
        {
            current.push(Span::styled(first.to_string(), style));
        }
        for piece in pieces {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !piece.is_empty() {
                current.push(Span::styled(piece.to_string(), style));
            }
        }
    }

    lines.push(Line::from(current));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{BUDGET, TICKETS, session};
    use pretty_assertions::assert_eq;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn empty_history_message() {
        let app = App::new(Vec::new());
        assert_eq!(text(&session_lines(&app)), vec!["No chat sessions in history"]);
    }

    #[test]
    fn user_text_is_shown_verbatim() {
        let app = App::new(vec![session("a", "Sure.")]);
        let lines = text(&session_lines(&app));
        assert_eq!(lines[0], "You");
        assert_eq!(lines[1], "How much will my EP cost?");
        assert_eq!(lines[3], "Coach");
        assert_eq!(lines[4], "Sure.");
    }

    #[test]
    fn paragraph_line_breaks_become_lines() {
        let spans = vec![
            InlineSpan::Text("one\ntwo ".into()),
            InlineSpan::Bold("three".into()),
        ];
        let lines = inline_lines(Vec::new(), &spans, Style::default());
        assert_eq!(text(&lines), vec!["one", "two three"]);
        assert_eq!(lines[1].spans[1].style, Style::default().add_modifier(Modifier::BOLD));
    }

    #[test]
    fn heading_and_list_icons() {
        let app = App::new(vec![session("a", "# Plan\n\n- Warm up\n\n1. 🎤 Record")]);
        let lines = text(&session_lines(&app));
        assert!(lines.contains(&"🎵 Plan".to_string()));
        assert!(lines.contains(&"  ✨ Warm up".to_string()));
        assert!(lines.contains(&"  1. 🎤 Record".to_string()));
    }

    #[test]
    fn budget_total_follows_edits() {
        let mut app = App::new(vec![session("a", BUDGET)]);
        assert!(text(&session_lines(&app)).contains(&"Total Estimated: $350".to_string()));

        app.focus_next();
        app.input_char('0');
        let lines = text(&session_lines(&app));
        assert!(lines.contains(&"Total Estimated: $2,600".to_string()));
        assert!(lines.iter().any(|l| l.contains("[    2500]")));
    }

    #[test]
    fn ticket_projection_is_listed() {
        let app = App::new(vec![session("a", TICKETS)]);
        let lines = text(&session_lines(&app));
        assert!(lines.iter().any(|l| l.trim() == "Tickets Sold            150"));
        assert!(lines.iter().any(|l| l.trim() == "Net Profit              $3,050"));
        assert!(lines.iter().any(|l| l.trim() == "Sell-Through Rate       75%"));
    }

    #[test]
    fn broken_widget_shows_error_line() {
        let app = App::new(vec![session("a", "[TICKET_ESTIMATOR]{}[/TICKET_ESTIMATOR]")]);
        let lines = text(&session_lines(&app));
        assert!(lines.contains(&"⚠ Could not display the TICKET_ESTIMATOR widget".to_string()));
    }

    #[test]
    fn suggestions_are_listed_after_reply() {
        let app = App::new(vec![session("a", "Hi\n\n[SUGGESTIONS]Next?|Then?[/SUGGESTIONS]")]);
        let lines = text(&session_lines(&app));
        assert!(lines.contains(&"  › Next?".to_string()));
        assert!(lines.contains(&"  › Then?".to_string()));
    }
}
