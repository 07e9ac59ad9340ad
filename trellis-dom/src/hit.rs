use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, true)
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, false)
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    clickable_only: bool,
) -> Option<String> {
    // Children may overflow their parent (dropdowns), so they are checked
    // even when the parent rect misses.
    for child in element.content.children().iter().rev() {
        if let Some(id) = hit_test_element(layout, child, x, y, clickable_only) {
            return Some(id);
        }
    }

    let rect = layout.get(&element.id)?;
    if !rect.contains(x, y) {
        return None;
    }

    if element.clickable || !clickable_only {
        Some(element.id.clone())
    } else {
        None
    }
}
