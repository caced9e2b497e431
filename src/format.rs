//! Fixed-width rendering of a truth table.

use std::fmt::Write as _;

/// Render `headers` and `rows` as left-justified columns.
///
/// Each column is as wide as its longest cell (header included) plus
/// `padding` spaces. There is no separator besides the padding. Widths count
/// `char`s, so operator glyphs take one position each.
pub fn render<T: ToString>(headers: &[String], rows: &[Vec<T>], padding: usize) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in cells.iter() {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let mut output = String::new();
    write_line(&mut output, headers, &widths, padding);
    for row in cells.iter() {
        write_line(&mut output, row, &widths, padding);
    }
    output
}

fn write_line(output: &mut String, cells: &[String], widths: &[usize], padding: usize) {
    for (cell, &width) in cells.iter().zip(widths) {
        write!(output, "{:<w$}", cell, w = width + padding).unwrap();
    }
    output.push('\n');
}
