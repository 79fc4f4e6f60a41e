pub mod callout;
pub mod emoji;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod table;

pub use callout::{BlockQuote, CalloutKind};
pub use heading::Heading;
pub use list::List;
pub use paragraph::Paragraph;
pub use table::Table;
