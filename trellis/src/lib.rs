//! Headless widgets for the trellis design system.
//!
//! - [`Combobox`](widgets::combobox::Combobox): a searchable selector with an
//!   open/closed state machine and outside-activation dismissal.
//! - [`GridModel`](widgets::grid::GridModel): a pure renderer from typed rows
//!   and column specs to a grid of cells.
//!
//! Widgets produce [`trellis_dom::Element`] trees; the host draws them and
//! feeds interactions back in.

pub mod widgets;

pub mod prelude {
    pub use crate::widgets::combobox::{
        ComboOption, Combobox, EventResult, Listing, SelectorState, filter_options,
    };
    pub use crate::widgets::grid::{
        Accessor, Cell, ColumnSpec, GridError, GridModel, Record, layout_lines, render,
    };
    pub use trellis_dom::{Document, Element, Key, ListenerGuard, Modifiers, TextAlign};
}
