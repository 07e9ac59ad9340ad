mod rect;

use std::collections::HashMap;

pub use rect::Rect;

/// Screen rectangles keyed by element ID, filled in by whoever draws the tree.
pub type LayoutResult = HashMap<String, Rect>;
