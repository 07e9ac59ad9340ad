//! Fixed-width text layout of a rendered grid.

use trellis_dom::text::{display_width, pad_to_width};

use super::{GridModel, Record};

pub const COLUMN_SEPARATOR: &str = " │ ";
const RULE_SEPARATOR: &str = "─┼─";

/// Lay the grid out as text: a header line, a rule, then one line per row.
///
/// Each column is as wide as its width hint, or else as its widest header
/// or cell. Overlong cells are truncated with an ellipsis; absent cells are
/// blank.
pub fn layout_lines<R: Record>(model: &GridModel<'_, R>) -> Vec<String> {
    let cells: Vec<Vec<String>> = model
        .render()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.map(|c| c.plain_text()).unwrap_or_default())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = model
        .columns
        .iter()
        .enumerate()
        .map(|(j, column)| match column.width {
            Some(width) => usize::from(width),
            None => cells
                .iter()
                .map(|row| display_width(&row[j]))
                .chain(std::iter::once(display_width(&column.header)))
                .max()
                .unwrap_or(0),
        })
        .collect();

    let mut lines = Vec::with_capacity(cells.len() + 2);

    let header: Vec<String> = model
        .columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| pad_to_width(&column.header, width, column.align))
        .collect();
    lines.push(header.join(COLUMN_SEPARATOR));

    let rule: Vec<String> = widths.iter().map(|&width| "─".repeat(width)).collect();
    lines.push(rule.join(RULE_SEPARATOR));

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(model.columns.iter().zip(&widths))
            .map(|(text, (column, &width))| pad_to_width(text, width, column.align))
            .collect();
        lines.push(line.join(COLUMN_SEPARATOR));
    }

    lines
}
