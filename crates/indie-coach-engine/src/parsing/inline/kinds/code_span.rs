/// Code span inline type with owned delimiter constant.
///
/// Code spans are matched by the same tokenizer as emphasis, so a code span
/// never contains a backtick and never crosses a line break.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
