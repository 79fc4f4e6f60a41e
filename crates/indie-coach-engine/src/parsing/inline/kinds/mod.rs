//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIM = "**"`
//! - **`Italic`**: `DELIM = "*"`
//! - **`CodeSpan`**: `TICK = "\`"`
//!
//! The parser reads these constants when it unwraps a token; it never
//! hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
