use super::kind::WidgetKind;

/// A piece of response text: either plain markdown or one tagged widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any complete widget tag pair.
    Text(&'a str),
    /// A complete `[TAG]...[/TAG]` pair.
    Widget {
        kind: WidgetKind,
        /// The full tagged text, tags included.
        source: &'a str,
        /// The text between the tags.
        body: &'a str,
    },
}

impl<'a> Segment<'a> {
    /// The exact substring of the input this segment was cut from.
    pub fn source(&self) -> &'a str {
        match self {
            Segment::Text(s) => s,
            Segment::Widget { source, .. } => source,
        }
    }
}

/// Splits `text` into plain-text and widget segments.
///
/// A widget starts at the leftmost opening tag that has a closing tag of the
/// same kind after it and ends at the first such closing tag. Opening tags
/// with no matching close stay in the surrounding text, which is what a
/// response looks like mid-stream. Empty text segments are not emitted.
///
/// Concatenating [`Segment::source`] of every segment yields `text` exactly.
pub fn extract_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut search_from = 0;

    while let Some((kind, open_at)) = next_open_tag(text, search_from) {
        let body_start = open_at + kind.open_tag().len();
        let Some(close_rel) = text[body_start..].find(kind.close_tag()) else {
            // Unterminated: leave the tag in the text and keep looking.
            search_from = body_start;
            continue;
        };
        let body_end = body_start + close_rel;
        let end = body_end + kind.close_tag().len();

        if open_at > text_start {
            segments.push(Segment::Text(&text[text_start..open_at]));
        }
        segments.push(Segment::Widget {
            kind,
            source: &text[open_at..end],
            body: &text[body_start..body_end],
        });
        text_start = end;
        search_from = end;
    }

    if text_start < text.len() {
        segments.push(Segment::Text(&text[text_start..]));
    }
    segments
}

/// Finds the earliest opening tag of any kind at or after `from`.
fn next_open_tag(text: &str, from: usize) -> Option<(WidgetKind, usize)> {
    WidgetKind::ALL
        .iter()
        .filter_map(|&kind| {
            text[from..]
                .find(kind.open_tag())
                .map(|rel| (kind, from + rel))
        })
        .min_by_key(|&(_, at)| at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn rejoin(segments: &[Segment<'_>]) -> String {
        segments.iter().map(Segment::source).collect()
    }

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(extract_segments("hello"), vec![Segment::Text("hello")]);
    }

    #[test]
    fn empty_input_has_no_segments() {
        assert!(extract_segments("").is_empty());
    }

    #[test]
    fn widget_between_text() {
        let text = "Intro\n\n[BUDGET_TABLE]{}[/BUDGET_TABLE]\n\nOutro";
        assert_eq!(
            extract_segments(text),
            vec![
                Segment::Text("Intro\n\n"),
                Segment::Widget {
                    kind: WidgetKind::BudgetTable,
                    source: "[BUDGET_TABLE]{}[/BUDGET_TABLE]",
                    body: "{}",
                },
                Segment::Text("\n\nOutro"),
            ]
        );
    }

    #[test]
    fn adjacent_widgets_have_no_empty_text_between() {
        let text = "[TICKET_ESTIMATOR]a[/TICKET_ESTIMATOR][BUDGET_TABLE]b[/BUDGET_TABLE]";
        let segments = extract_segments(text);
        assert_eq!(segments.len(), 2);
        assert!(matches!(
            segments[0],
            Segment::Widget {
                kind: WidgetKind::TicketEstimator,
                body: "a",
                ..
            }
        ));
        assert!(matches!(
            segments[1],
            Segment::Widget {
                kind: WidgetKind::BudgetTable,
                body: "b",
                ..
            }
        ));
    }

    #[test]
    fn match_is_non_greedy() {
        let text = "[BUDGET_TABLE]1[/BUDGET_TABLE] mid [BUDGET_TABLE]2[/BUDGET_TABLE]";
        let bodies: Vec<_> = extract_segments(text)
            .into_iter()
            .filter_map(|s| match s {
                Segment::Widget { body, .. } => Some(body),
                Segment::Text(_) => None,
            })
            .collect();
        assert_eq!(bodies, vec!["1", "2"]);
    }

    #[test]
    fn unterminated_tag_stays_text() {
        let text = "Here you go:\n[BUDGET_TABLE]{\"headers\": [";
        assert_eq!(extract_segments(text), vec![Segment::Text(text)]);
    }

    #[test]
    fn unterminated_tag_does_not_hide_later_widget() {
        let text = "[BUDGET_TABLE] oops [TICKET_ESTIMATOR]x[/TICKET_ESTIMATOR]";
        assert_eq!(
            extract_segments(text),
            vec![
                Segment::Text("[BUDGET_TABLE] oops "),
                Segment::Widget {
                    kind: WidgetKind::TicketEstimator,
                    source: "[TICKET_ESTIMATOR]x[/TICKET_ESTIMATOR]",
                    body: "x",
                },
            ]
        );
    }

    #[test]
    fn mismatched_close_is_not_a_widget() {
        let text = "[BUDGET_TABLE]x[/TICKET_ESTIMATOR]";
        assert_eq!(extract_segments(text), vec![Segment::Text(text)]);
    }

    #[rstest]
    #[case("")]
    #[case("no tags at all")]
    #[case("[BUDGET_TABLE]")]
    #[case("[/BUDGET_TABLE][BUDGET_TABLE]")]
    #[case("a[BUDGET_TABLE]b[/BUDGET_TABLE]c[TICKET_ESTIMATOR]d")]
    #[case("[TICKET_ESTIMATOR][BUDGET_TABLE][/TICKET_ESTIMATOR][/BUDGET_TABLE]")]
    #[case("🎸 [BUDGET_TABLE]é[/BUDGET_TABLE] ✨")]
    fn segments_rejoin_to_input(#[case] text: &str) {
        assert_eq!(rejoin(&extract_segments(text)), text);
    }
}
