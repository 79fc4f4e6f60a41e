use crate::parsing::blocks::types::Block;

/// Pipe table with owned delimiter constants.
pub struct Table;

impl Table {
    /// Cell delimiter.
    pub const PIPE: char = '|';
    /// What the second line must contain (along with a pipe) to open a table.
    pub const SEPARATOR: &'static str = "---";

    /// Parses `block` as a table when its second line is a separator row.
    ///
    /// Body rows are padded with empty cells or truncated so every row has
    /// exactly as many cells as the header. Rows with no non-blank cell are
    /// dropped.
    pub fn parse(block: &str) -> Option<Block> {
        let lines: Vec<&str> = block.trim().split('\n').collect();
        if lines.len() < 2 || !Self::is_separator(lines[1]) {
            return None;
        }

        let headers = Self::split_row(lines[0]);
        let rows = lines[2..]
            .iter()
            .map(|line| Self::split_row(line))
            .filter(|cells| cells.iter().any(|c| !c.is_empty()))
            .map(|mut cells| {
                cells.resize(headers.len(), String::new());
                cells
            })
            .collect();

        Some(Block::Table { headers, rows })
    }

    /// Whether `line` is a header separator such as `|---|:---:|`.
    pub fn is_separator(line: &str) -> bool {
        line.contains(Self::SEPARATOR) && line.contains(Self::PIPE)
    }

    /// Splits one pipe-delimited line into trimmed cells.
    ///
    /// A single leading and a single trailing pipe are removed first, so
    /// `| a | b |` and `a | b` both yield `["a", "b"]`.
    pub fn split_row(line: &str) -> Vec<String> {
        let line = line.trim();
        let line = line.strip_prefix(Self::PIPE).unwrap_or(line);
        let line = line.strip_suffix(Self::PIPE).unwrap_or(line);
        line.split(Self::PIPE)
            .map(|cell| cell.trim().to_string())
            .collect()
    }
}
