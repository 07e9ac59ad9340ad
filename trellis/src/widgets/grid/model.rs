//! Grid model and rendering.

use log::trace;
use thiserror::Error;

use super::{Accessor, Cell, ColumnSpec, Record};

/// Raised by strict rendering when a row lacks a field a column names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("row {row} has no field {key} (column {column} '{header}')")]
    MissingField {
        row: usize,
        column: usize,
        header: String,
        key: String,
    },
}

/// Columns and rows for one render. Borrowed from the host; holds no state.
pub struct GridModel<'a, R: Record> {
    pub columns: &'a [ColumnSpec<R>],
    pub rows: &'a [R],
}

impl<R: Record> Clone for GridModel<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Record> Copy for GridModel<'_, R> {}

impl<'a, R: Record> GridModel<'a, R> {
    pub fn new(columns: &'a [ColumnSpec<R>], rows: &'a [R]) -> Self {
        Self { columns, rows }
    }

    pub fn headers(&self) -> Vec<&'a str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// `(rows, columns)` of the rendered grid.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// One inner vector per row, one cell per column, in input order.
    ///
    /// A field the row lacks yields `None` for that cell; the rest of the
    /// grid still renders.
    pub fn render(&self) -> Vec<Vec<Option<Cell>>> {
        trace!(
            "GridModel::render rows={} columns={}",
            self.rows.len(),
            self.columns.len()
        );
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| column.accessor.apply(row))
                    .collect()
            })
            .collect()
    }

    /// Check every field accessor against every row.
    pub fn validate(&self) -> Result<(), GridError> {
        for (row_index, row) in self.rows.iter().enumerate() {
            for (column_index, column) in self.columns.iter().enumerate() {
                if let Accessor::Field(key) = &column.accessor
                    && row.get(key).is_none()
                {
                    return Err(missing_field(row_index, column_index, column));
                }
            }
        }
        Ok(())
    }

    /// Like [`render`](Self::render), but fails on the first missing field.
    pub fn render_strict(&self) -> Result<Vec<Vec<Cell>>, GridError> {
        self.rows
            .iter()
            .enumerate()
            .map(|(row_index, row)| {
                self.columns
                    .iter()
                    .enumerate()
                    .map(|(column_index, column)| {
                        column
                            .accessor
                            .apply(row)
                            .ok_or_else(|| missing_field(row_index, column_index, column))
                    })
                    .collect::<Result<Vec<Cell>, GridError>>()
            })
            .collect()
    }
}

fn missing_field<R: Record>(row: usize, column: usize, def: &ColumnSpec<R>) -> GridError {
    let key = match &def.accessor {
        Accessor::Field(key) => format!("{key:?}"),
        Accessor::Compute(_) => String::from("<computed>"),
    };
    GridError::MissingField {
        row,
        column,
        header: def.header.clone(),
        key,
    }
}

/// Render `rows` through `columns`. See [`GridModel::render`].
pub fn render<R: Record>(columns: &[ColumnSpec<R>], rows: &[R]) -> Vec<Vec<Option<Cell>>> {
    GridModel::new(columns, rows).render()
}
