//! DataGrid - a stateless renderer from rows and column specs to cells.
//!
//! Cell `(i, j)` is `columns[j]` applied to `rows[i]`. Row and column order
//! are kept exactly; sorting, filtering and deduplication are the host's job.
//!
//! # Example
//!
//! ```
//! use serde_json::{Value, json};
//! use trellis::widgets::grid::{Cell, ColumnSpec, GridModel};
//!
//! let columns: Vec<ColumnSpec<Value>> = vec![
//!     ColumnSpec::field("Name", "name"),
//!     ColumnSpec::computed("Status", |row: &Value| {
//!         row["status"].as_str().unwrap_or_default().to_uppercase().into()
//!     }),
//! ];
//! let rows = vec![json!({"name": "Ana", "status": "ok"})];
//!
//! let grid = GridModel::new(&columns, &rows).render();
//! assert_eq!(grid, vec![vec![Some(Cell::from("Ana")), Some(Cell::from("OK"))]]);
//! ```

mod cell;
mod column;
mod layout;
mod model;
mod record;

pub use cell::Cell;
pub use column::{Accessor, ColumnSpec};
pub use layout::{COLUMN_SEPARATOR, layout_lines};
pub use model::{GridError, GridModel, render};
pub use record::Record;
