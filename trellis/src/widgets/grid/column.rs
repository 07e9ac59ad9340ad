//! Column definitions.

use std::fmt;

use trellis_dom::TextAlign;

use super::{Cell, Record};

type ComputeFn<R> = Box<dyn Fn(&R) -> Cell>;

/// How a column derives its cell from a row.
pub enum Accessor<R: Record> {
    /// Project a named field out of the row.
    Field(R::Key),
    /// Compute the cell from the whole row.
    Compute(ComputeFn<R>),
}

impl<R: Record> Accessor<R> {
    /// The cell for `row`. `None` only when a field accessor names a field
    /// the row lacks.
    pub fn apply(&self, row: &R) -> Option<Cell> {
        match self {
            Accessor::Field(key) => row.get(key),
            Accessor::Compute(compute) => Some(compute(row)),
        }
    }
}

impl<R: Record> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(key) => f.debug_tuple("Field").field(key).finish(),
            Accessor::Compute(_) => write!(f, "Compute(..)"),
        }
    }
}

/// Column configuration.
///
/// # Examples
///
/// ```
/// use serde_json::Value;
/// use trellis::widgets::grid::ColumnSpec;
/// use trellis_dom::TextAlign;
///
/// let columns: Vec<ColumnSpec<Value>> = vec![
///     ColumnSpec::field("Name", "name").width(20),
///     ColumnSpec::computed("Status", |row: &Value| {
///         row["status"].as_str().unwrap_or_default().to_uppercase().into()
///     }),
///     ColumnSpec::field("Age", "age").align(TextAlign::Right),
/// ];
/// assert_eq!(columns[0].width, Some(20));
/// ```
#[derive(Debug)]
pub struct ColumnSpec<R: Record> {
    /// Column header text
    pub header: String,
    pub accessor: Accessor<R>,
    /// Width hint in terminal columns; `None` sizes to content.
    pub width: Option<u16>,
    /// Horizontal alignment
    pub align: TextAlign,
}

impl<R: Record> ColumnSpec<R> {
    pub fn new(header: impl Into<String>, accessor: Accessor<R>) -> Self {
        Self {
            header: header.into(),
            accessor,
            width: None,
            align: TextAlign::Left,
        }
    }

    /// A column showing one field of each row.
    pub fn field(header: impl Into<String>, key: impl Into<R::Key>) -> Self {
        Self::new(header, Accessor::Field(key.into()))
    }

    /// A column whose cells are computed from the whole row.
    pub fn computed(header: impl Into<String>, compute: impl Fn(&R) -> Cell + 'static) -> Self {
        Self::new(header, Accessor::Compute(Box::new(compute)))
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}
