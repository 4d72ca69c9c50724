//! Grid rendering for search results.
//!
//! Emojis are chunked into rows of `columns` cells behind a two-digit row
//! index. Widths are measured in terminal columns, so wide glyphs line up.

use std::io::{self, Write};
use std::num::NonZeroUsize;
use unicode_width::UnicodeWidthStr;

use crate::console::{Console, Style};

pub const INDEX_HEADER: &str = "#";
pub const COLUMN_HEADER: &str = "EMOJIS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based, zero-padded to two digits.
    pub index: String,
    /// Always exactly `columns` cells; padding cells are empty.
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRows {
    pub columns: NonZeroUsize,
    pub rows: Vec<TableRow>,
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
}

impl TableRows {
    /// Chunks `emojis` into rows of `columns` cells.
    pub fn from_emojis(emojis: &[String], columns: NonZeroUsize) -> Self {
        let rows = emojis
            .chunks(columns.get())
            .enumerate()
            .map(|(i, chunk)| {
                let mut cells = chunk.to_vec();
                cells.resize(columns.get(), String::new());
                TableRow {
                    index: format!("{:02}", i + 1),
                    cells,
                }
            })
            .collect();
        Self { columns, rows }
    }

    fn header(&self) -> Vec<&str> {
        let mut header = vec![INDEX_HEADER];
        header.extend(std::iter::repeat(COLUMN_HEADER).take(self.columns.get()));
        header
    }

    /// Display width of each column (index column first).
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header().iter().map(|h| h.width()).collect();
        for row in &self.rows {
            widths[0] = widths[0].max(row.index.width());
            for (w, cell) in widths[1..].iter_mut().zip(&row.cells) {
                *w = (*w).max(cell.width());
            }
        }
        widths
    }

    /// Renders the grid as lines. `dim` styles the row index after padding is
    /// computed, so escape codes never affect alignment.
    pub fn lines(&self, dim: impl Fn(&str) -> String) -> Vec<String> {
        let widths = self.widths();
        let mut out = Vec::with_capacity(self.rows.len() + 4);

        out.push(border(&widths, '┌', '┬', '┐'));
        let header: Vec<String> = self
            .header()
            .iter()
            .zip(&widths)
            .map(|(h, &w)| pad(h, w, Align::Center))
            .collect();
        out.push(join_cells(&header));
        out.push(border(&widths, '├', '┼', '┤'));

        for row in &self.rows {
            let mut cells = Vec::with_capacity(widths.len());
            let index = pad(&row.index, widths[0], Align::Left);
            cells.push(index.replacen(&row.index, &dim(&row.index), 1));
            for (cell, &w) in row.cells.iter().zip(&widths[1..]) {
                cells.push(pad(cell, w, Align::Left));
            }
            out.push(join_cells(&cells));
        }

        out.push(border(&widths, '└', '┴', '┘'));
        out
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(text.width());
    let (left, right) = match align {
        Align::Left => (0, fill),
        Align::Center => (fill / 2, fill - fill / 2),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn join_cells(cells: &[String]) -> String {
    let mut line = String::from("│");
    for cell in cells {
        line.push(' ');
        line.push_str(cell);
        line.push_str(" │");
    }
    line
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, &w) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        line.push_str(&"─".repeat(w + 2));
    }
    line.push(right);
    line
}

/// Prints `emojis` as a grid of `columns` data columns.
pub fn render_table<W: Write>(
    console: &mut Console<W>,
    emojis: &[String],
    columns: NonZeroUsize,
) -> io::Result<()> {
    let table = TableRows::from_emojis(emojis, columns);
    let lines = table.lines(|s| console.paint(Style::Dim, s));
    for line in lines {
        console.line(Style::Plain, &line)?;
    }
    Ok(())
}
