//! Fixed-width table rendering helpers.

/// Format one table row, truncating each cell to fit its column and
/// leaving at least one space between columns.
pub fn format_table_row(cells: &[&str], widths: &[usize]) -> String {
    let mut row = String::new();

    for (cell, &width) in cells.iter().zip(widths) {
        let truncated: String = cell.chars().take(width.saturating_sub(1)).collect();
        let len = truncated.chars().count();
        row.push_str(&truncated);
        for _ in len..width {
            row.push(' ');
        }
    }

    row.trim_end().to_string()
}

/// Format an integer with thousands separators (3000 -> "3,000").
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
