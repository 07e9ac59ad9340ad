//! Field access on row records.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{Debug, Display};

use serde_json::{Map, Value};

use super::Cell;

/// A row shape the grid can project fields out of.
///
/// Typed rows implement this with an enum key, so a column can only name a
/// field the row actually has:
///
/// ```
/// use trellis::widgets::grid::{Cell, Record};
///
/// struct Member {
///     name: String,
///     status: String,
/// }
///
/// #[derive(Debug, Clone, Copy)]
/// enum MemberField {
///     Name,
///     Status,
/// }
///
/// impl Record for Member {
///     type Key = MemberField;
///
///     fn get(&self, key: &MemberField) -> Option<Cell> {
///         Some(match key {
///             MemberField::Name => self.name.as_str().into(),
///             MemberField::Status => self.status.as_str().into(),
///         })
///     }
/// }
/// ```
///
/// Dynamic rows (JSON objects, string maps) are keyed by `String` and return
/// `None` for keys they lack.
pub trait Record {
    type Key: Debug;

    /// The cell for `key`, or `None` if this row has no such field.
    fn get(&self, key: &Self::Key) -> Option<Cell>;
}

/// Render a JSON value as cell text. Strings lose their quotes and null is
/// an empty (but present) cell.
fn value_cell(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Text(String::new()),
        Value::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

impl Record for Map<String, Value> {
    type Key = String;

    fn get(&self, key: &String) -> Option<Cell> {
        Map::get(self, key.as_str()).map(value_cell)
    }
}

/// Non-object values have no fields.
impl Record for Value {
    type Key = String;

    fn get(&self, key: &String) -> Option<Cell> {
        self.as_object()
            .and_then(|object| Map::get(object, key.as_str()))
            .map(value_cell)
    }
}

impl<V: Display> Record for HashMap<String, V> {
    type Key = String;

    fn get(&self, key: &String) -> Option<Cell> {
        HashMap::get(self, key).map(|v| Cell::Text(v.to_string()))
    }
}

impl<V: Display> Record for BTreeMap<String, V> {
    type Key = String;

    fn get(&self, key: &String) -> Option<Cell> {
        BTreeMap::get(self, key).map(|v| Cell::Text(v.to_string()))
    }
}
