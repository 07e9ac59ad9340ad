//! The selectable item type for a Combobox.

use serde::{Deserialize, Serialize};

/// One selectable `(value, label)` pair.
///
/// `value` is the key reported to the host on commit and should be unique
/// within an option list; the combobox does not enforce this. `label` is
/// what the user sees and what the filter matches against.
///
/// # Example
///
/// ```
/// use trellis::widgets::combobox::ComboOption;
///
/// let option = ComboOption::new("us", "United States");
/// let from_tuple: ComboOption = ("us", "United States").into();
/// assert_eq!(option, from_tuple);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComboOption {
    pub value: String,
    pub label: String,
}

impl ComboOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

// Implement for (value, label) tuples
impl<S1, S2> From<(S1, S2)> for ComboOption
where
    S1: Into<String>,
    S2: Into<String>,
{
    fn from((value, label): (S1, S2)) -> Self {
        Self::new(value, label)
    }
}
