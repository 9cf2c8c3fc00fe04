// table.rs

use crate::todo::{DEADLINE_FORMAT, Todo};
use ratatui::text::Span;

const HEADERS: [&str; 4] = ["ID", "STATUS", "TASK", "DEADLINE"];
const GAP: &str = " ";

/// Terminal columns `text` occupies. Wide (e.g. CJK) characters count as two.
pub fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// A cell's text with its display width already measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub width: usize,
}

impl Cell {
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let width = display_width(&text);
        Self { text, width }
    }
}

/// Left-aligns each cell in its column. Widths come from the cells, never
/// from `str::len`, so multi-byte text lines up.
pub fn format_row(cells: &[Cell], columns: &[usize]) -> String {
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();
    for (i, (cell, column)) in cells.iter().zip(columns).enumerate() {
        line.push_str(&cell.text);
        if i < last {
            line.push_str(&" ".repeat(column.saturating_sub(cell.width)));
            line.push_str(GAP);
        }
    }
    line
}

pub fn row_cells(todo: &Todo) -> [Cell; 4] {
    [
        Cell::new(todo.id.to_string()),
        Cell::new(todo.status().label()),
        Cell::new(todo.task.as_str()),
        Cell::new(todo.limit.format(DEADLINE_FORMAT).to_string()),
    ]
}

/// Header, separator and one line per todo, in stored order.
pub fn render(todos: &[Todo]) -> Vec<String> {
    let header = HEADERS.map(Cell::new);
    let rows: Vec<[Cell; 4]> = todos.iter().map(row_cells).collect();

    let mut columns = header.clone().map(|c| c.width);
    for row in &rows {
        for (column, cell) in columns.iter_mut().zip(row) {
            *column = (*column).max(cell.width);
        }
    }

    let separator = columns.map(|w| Cell::new("-".repeat(w)));
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&header, &columns));
    lines.push(format_row(&separator, &columns));
    lines.extend(rows.iter().map(|row| format_row(row, &columns)));
    lines
}
