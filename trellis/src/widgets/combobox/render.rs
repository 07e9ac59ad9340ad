//! Rendering for the Combobox widget.

use log::trace;
use trellis_dom::Element;

use super::state::{Combobox, Listing};

/// Text shown in place of the dropdown rows when the filter matches nothing.
pub const NO_RESULTS_TEXT: &str = "No results";

impl Combobox {
    /// Build the element tree for the current state.
    ///
    /// ```text
    /// {id}                 root
    /// ├── {id}-label       only when a label is set
    /// ├── {id}-input       display text, or the placeholder when empty
    /// └── {id}-dropdown    only while open
    ///     ├── {id}-opt-0   one clickable row per candidate, data "value"
    ///     └── ...          or a single {id}-empty row
    /// ```
    pub fn element(&self) -> Element {
        let display = self.display_text();
        let is_placeholder = display.is_empty();
        let shown = if is_placeholder {
            self.placeholder_text().to_string()
        } else {
            display
        };

        let mut root = Element::col().id(self.id());
        if let Some(label) = self.label_text() {
            root = root.child(Element::text(label).id(format!("{}-label", self.id())));
        }

        let mut input = Element::text(shown)
            .id(self.input_id())
            .clickable(!self.is_disabled());
        if is_placeholder {
            input = input.data("placeholder", "true");
        }
        if self.is_disabled() {
            input = input.data("disabled", "true");
        }
        root = root.child(input);

        let dropdown_id = format!("{}-dropdown", self.id());
        let highlight = self.highlight_index();
        match self.listing() {
            Listing::Closed => {}
            Listing::NoResults => {
                root = root.child(
                    Element::col().id(dropdown_id).child(
                        Element::text(NO_RESULTS_TEXT)
                            .id(format!("{}-empty", self.id()))
                            .data("state", "no-results"),
                    ),
                );
            }
            Listing::Matches(candidates) => {
                trace!(
                    "Combobox::element id={} candidates={}",
                    self.id(),
                    candidates.len()
                );
                let rows = candidates.iter().enumerate().map(|(i, option)| {
                    let mut row = Element::row()
                        .id(self.option_id(i))
                        .clickable(true)
                        .data("value", option.value.as_str())
                        .child(Element::text(option.label.as_str()));
                    if highlight == Some(i) {
                        row = row.data("highlighted", "true");
                    }
                    if option.value == self.selected_value() {
                        row = row.data("selected", "true");
                    }
                    row
                });
                root = root.child(Element::col().id(dropdown_id).children(rows));
            }
        }

        root
    }
}
