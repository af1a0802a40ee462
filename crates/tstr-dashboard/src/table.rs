/// Box-drawn table for terminal output.
///
/// Column widths fit the widest cell, bounded by the header length below and
/// by each column's `max_width` above; longer cells are truncated.
pub struct TableFormatter {
    headers: Vec<String>,
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl TableFormatter {
    pub fn new(columns: &[(&str, usize)], rows: Vec<Vec<String>>) -> Self {
        let headers: Vec<String> = columns.iter().map(|(header, _)| header.to_string()).collect();
        let widths = columns
            .iter()
            .enumerate()
            .map(|(i, (header, max_width))| {
                let min_width = header.chars().count();
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(min_width)
                    .clamp(min_width, (*max_width).max(min_width))
            })
            .collect();

        Self {
            headers,
            widths,
            rows,
        }
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.border('┌', '┬', '┐'));
        lines.push(self.row_line(self.headers.iter().map(String::as_str)));
        lines.push(self.border('├', '┼', '┤'));
        for row in &self.rows {
            lines.push(self.row_line(row.iter().map(String::as_str)));
        }
        lines.push(self.border('└', '┴', '┘'));
        lines.join("\n")
    }

    pub fn print_table(&self) {
        println!("{}", self.render());
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn row_line<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let mut cells = cells;
        let padded: Vec<String> = self
            .widths
            .iter()
            .map(|&width| truncate(cells.next().unwrap_or(""), width))
            .collect();
        format!("│ {} │", padded.join(" │ "))
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
