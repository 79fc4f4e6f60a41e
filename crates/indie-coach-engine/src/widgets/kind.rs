use std::fmt;

use serde::Serialize;

/// The two embedded calculator kinds a response may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    BudgetTable,
    TicketEstimator,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 2] = [WidgetKind::BudgetTable, WidgetKind::TicketEstimator];

    /// Tag name as it appears between the brackets.
    pub fn name(self) -> &'static str {
        match self {
            WidgetKind::BudgetTable => "BUDGET_TABLE",
            WidgetKind::TicketEstimator => "TICKET_ESTIMATOR",
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            WidgetKind::BudgetTable => "[BUDGET_TABLE]",
            WidgetKind::TicketEstimator => "[TICKET_ESTIMATOR]",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            WidgetKind::BudgetTable => "[/BUDGET_TABLE]",
            WidgetKind::TicketEstimator => "[/TICKET_ESTIMATOR]",
        }
    }

    /// Top-level JSON keys that must be present for the payload to render.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            WidgetKind::BudgetTable => &["headers", "rows"],
            WidgetKind::TicketEstimator => &["defaults"],
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
