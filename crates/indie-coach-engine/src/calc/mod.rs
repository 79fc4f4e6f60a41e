//! # Calculators
//!
//! Editable view state for rendered widgets. Each calculator is a small
//! owned value built from an immutable payload and scoped to one rendering
//! of one message; nothing here is shared or persisted.

pub mod budget;
pub mod coerce;
pub mod currency;
pub mod ticket;

pub use budget::BudgetTable;
pub use currency::format_currency;
pub use ticket::{Slider, TicketEstimator, TicketField, TicketProjection};
