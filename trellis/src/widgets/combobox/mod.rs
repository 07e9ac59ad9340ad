//! Combobox widget - a text input that filters a dropdown of options.
//!
//! States are `Closed` and `Open`. Focusing opens the dropdown with an empty
//! filter; typing narrows the candidates to options whose label contains
//! the filter text (case-insensitive substring); committing an option closes
//! the dropdown and reports the option value; an activation outside the
//! combobox, or Escape, dismisses without committing.

mod events;
mod filter;
mod item;
mod render;
mod state;

pub use filter::filter_options;
pub use item::ComboOption;
pub use render::NO_RESULTS_TEXT;
pub use state::{Combobox, EventResult, Listing, SelectorState};
