//! Case-insensitive substring filtering.

use super::ComboOption;

/// Indices of the options whose label contains `query`, ignoring case.
///
/// Order follows the option list. An empty query matches everything.
///
/// # Example
///
/// ```
/// use trellis::widgets::combobox::{ComboOption, filter_options};
///
/// let options = [ComboOption::new("a", "Alpha"), ComboOption::new("b", "Beta")];
/// assert_eq!(filter_options(&options, "AL"), vec![0]);
/// assert_eq!(filter_options(&options, "a"), vec![0, 1]);
/// ```
pub fn filter_options(options: &[ComboOption], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..options.len()).collect();
    }

    let needle = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.label.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}
