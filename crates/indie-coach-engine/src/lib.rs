pub mod calc;
pub mod message;
pub mod parsing;
pub mod render;
pub mod widgets;

// Re-export key types for easier usage
pub use calc::{BudgetTable, TicketEstimator, TicketField, TicketProjection, format_currency};
pub use message::{ChatSession, Message, MessageView, Part, Role, load_history, save_history};
pub use render::{RenderNode, RenderedItem, RenderedResponse, outline, render, render_response};
pub use widgets::{WidgetKind, WidgetPayload};
