//! # Widgets
//!
//! Extraction and decoding of the two tagged sub-languages a model response
//! may embed:
//!
//! - `[BUDGET_TABLE]{"headers": [...], "rows": [...]}[/BUDGET_TABLE]`
//! - `[TICKET_ESTIMATOR]{"defaults": {...}}[/TICKET_ESTIMATOR]`
//!
//! Extraction runs before block parsing and is lossless: it only cuts the
//! input into [`Segment`]s. Decoding a segment's JSON is a separate step so a
//! malformed payload can fall back to an error node without affecting the
//! rest of the response.

pub mod extract;
pub mod kind;
pub mod payload;

pub use extract::{Segment, extract_segments};
pub use kind::WidgetKind;
pub use payload::{
    BudgetRow, BudgetTableData, TicketDefaults, TicketEstimatorData, WidgetError, WidgetPayload,
    decode,
};
