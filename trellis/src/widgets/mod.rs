//! Built-in widgets for trellis.
//!
//! Each widget is headless: it owns only its interaction state and builds a
//! trellis-dom [`Element`](trellis_dom::Element) for the host to draw.
//! Host-owned data (options, rows, the selected value) is passed in.

pub mod combobox;
pub mod grid;
