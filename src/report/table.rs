//! Plain-text table layouts.
//!
//! Column widths derive from cell content, measured in display cells via
//! `unicode-width` so wide characters in model or problem names keep the
//! borders aligned.

use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

/// Table style selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Box-drawing borders around every cell
    Grid,
    /// Headers underlined with dashes, no borders
    Simple,
    /// Markdown table
    Pipe,
    /// Space-aligned columns only
    Plain,
}

impl TableFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableFormat::Grid => "grid",
            TableFormat::Simple => "simple",
            TableFormat::Pipe => "pipe",
            TableFormat::Plain => "plain",
        }
    }
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "grid" => Ok(TableFormat::Grid),
            "simple" => Ok(TableFormat::Simple),
            "pipe" => Ok(TableFormat::Pipe),
            "plain" => Ok(TableFormat::Plain),
            _ => Err(format!("unknown table format '{}' (expected grid, simple, pipe or plain)", raw)),
        }
    }
}

/// Render `rows` under `headers` in the requested style.
///
/// Every row must have as many cells as there are headers. The returned
/// string ends with a newline.
pub fn format_table(headers: &[String], rows: &[Vec<String>], format: TableFormat) -> String {
    let widths = column_widths(headers, rows);
    match format {
        TableFormat::Grid => format_grid(headers, rows, &widths),
        TableFormat::Simple => format_columns(headers, rows, &widths, true),
        TableFormat::Pipe => format_pipe(headers, rows, &widths),
        TableFormat::Plain => format_columns(headers, rows, &widths, false),
    }
}

fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }
    widths
}

fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad to exact display width with trailing spaces.
fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(padding))
}

fn format_grid(headers: &[String], rows: &[Vec<String>], widths: &[usize]) -> String {
    let mut output = String::new();
    output.push_str(&grid_rule(widths, '┌', '┬', '┐'));
    output.push_str(&grid_line(headers, widths));
    output.push_str(&grid_rule(widths, '├', '┼', '┤'));
    for row in rows {
        output.push_str(&grid_line(row, widths));
    }
    output.push_str(&grid_rule(widths, '└', '┴', '┘'));
    output
}

fn grid_rule(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        line.push_str(&"─".repeat(width + 2));
    }
    line.push(right);
    line.push('\n');
    line
}

fn grid_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("│");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {} │", pad(cell, *width)));
    }
    line.push('\n');
    line
}

fn format_pipe(headers: &[String], rows: &[Vec<String>], widths: &[usize]) -> String {
    let mut output = pipe_line(headers, widths);
    output.push('|');
    for width in widths {
        output.push_str(&"-".repeat(width + 2));
        output.push('|');
    }
    output.push('\n');
    for row in rows {
        output.push_str(&pipe_line(row, widths));
    }
    output
}

fn pipe_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {} |", pad(cell, *width)));
    }
    line.push('\n');
    line
}

// Shared by the simple and plain styles; simple adds the dashed header rule.
fn format_columns(headers: &[String], rows: &[Vec<String>], widths: &[usize], underline: bool) -> String {
    let mut output = columns_line(headers, widths);
    if underline {
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        output.push_str(&rule.join("  "));
        output.push('\n');
    }
    for row in rows {
        output.push_str(&columns_line(row, widths));
    }
    output
}

fn columns_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells.iter().zip(widths).map(|(cell, width)| pad(cell, *width)).collect();
    let mut line = padded.join("  ");
    while line.ends_with(' ') {
        line.pop();
    }
    line.push('\n');
    line
}
