mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// IDs from `root` down to the element with `id`, both inclusive.
///
/// Returns None if no element in the tree has that ID.
pub fn ancestry(root: &Element, id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if collect_ancestry(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn collect_ancestry(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());
    if element.id == id {
        return true;
    }

    for child in element.content.children() {
        if collect_ancestry(child, id, path) {
            return true;
        }
    }

    path.pop();
    false
}
