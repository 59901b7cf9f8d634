use std::fmt;

use crate::cell::Cell;
use crate::error::{Result, TableError};

/// Separator appended after every field, including the last one on a line
const COLUMN_SEPARATOR: &str = " ";

/// Builder for fixed-width, right-aligned text tables.
///
/// The header is fixed at construction: an index-column label (defaulting to
/// `idx`) followed by the data-column labels. Rows are appended with
/// [`add_row`](Self::add_row) and rendered in insertion order. Each column is
/// as wide as the longest text it contains, header included; rendering pads
/// shorter values with leading spaces and never truncates longer ones.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableBuilder {
    /// Create a builder with the default `idx` index-column label
    pub fn new<I, C>(columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Self::with_index_name("idx", columns)
    }

    /// Create a builder with an explicit index-column label
    pub fn with_index_name<S, I, C>(index_name: S, columns: I) -> Self
    where
        S: Into<Cell>,
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let mut header = vec![index_name.into().into_text()];
        header.extend(columns.into_iter().map(|col| col.into().into_text()));

        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Append a row: an index value plus one cell per data column.
    ///
    /// Fails with [`TableError::RowLengthMismatch`] when the cell count does
    /// not match the header, leaving the table untouched. Returns the builder
    /// on success so calls chain with `?`.
    pub fn add_row<V, I, C>(&mut self, index: V, cells: I) -> Result<&mut Self>
    where
        V: Into<Cell>,
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let mut row = Vec::with_capacity(self.header.len());
        row.push(index.into().into_text());
        row.extend(cells.into_iter().map(|cell| cell.into().into_text()));

        if row.len() != self.header.len() {
            return Err(TableError::row_length_mismatch(
                self.header.len() - 1,
                row.len() - 1,
            ));
        }

        self.rows.push(row);
        Ok(self)
    }

    /// Number of data rows added so far
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a text block, one newline-terminated line for the
    /// header and for each row. Equivalent to the `Display` impl; repeated
    /// calls without intervening `add_row`s produce identical output.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Widths are recomputed on every render; fine for the intended
    /// build-once-render-once use
    fn col_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(String::len).collect();

        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        widths
    }

    fn write_line(f: &mut fmt::Formatter<'_>, line: &[String], widths: &[usize]) -> fmt::Result {
        for (cell, width) in line.iter().zip(widths) {
            write!(f, "{:>width$}", cell, width = *width)?;
            f.write_str(COLUMN_SEPARATOR)?;
        }

        f.write_str("\n")
    }
}

impl fmt::Display for TableBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.col_widths();

        Self::write_line(f, &self.header, &widths)?;

        for row in &self.rows {
            Self::write_line(f, row, &widths)?;
        }

        Ok(())
    }
}
