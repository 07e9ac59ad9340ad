//! Combobox widget state.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use trellis_dom::ListenerGuard;

use super::ComboOption;
use super::filter::filter_options;

/// Open/closed phase of a combobox.
///
/// The outside-activation listener lives inside `Open`, so closing the
/// widget (by any path) or dropping it releases the listener.
pub(super) enum Phase {
    Closed,
    Open {
        /// Free text typed since the widget opened.
        filter: String,
        /// Indices into the option list matching `filter`.
        matches: Vec<usize>,
        /// Highlighted position within `matches`.
        highlight: usize,
        listener: ListenerGuard,
    },
}

impl Phase {
    pub(super) fn is_open(&self) -> bool {
        matches!(self, Phase::Open { .. })
    }
}

impl fmt::Debug for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Closed => write!(f, "Closed"),
            Phase::Open {
                filter,
                matches,
                highlight,
                listener,
            } => f
                .debug_struct("Open")
                .field("filter", filter)
                .field("matches", matches)
                .field("highlight", highlight)
                .field("listener", &listener.id())
                .finish(),
        }
    }
}

/// Snapshot of the observable selector state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorState {
    pub is_open: bool,
    /// Filter text while open; always empty while closed.
    pub filter_text: String,
    /// Committed option value, or empty for no selection.
    pub committed_value: String,
}

/// What the dropdown currently presents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    /// The dropdown is not shown.
    Closed,
    /// At least one option matches the filter.
    Matches(Vec<&'a ComboOption>),
    /// The filter matches nothing.
    NoResults,
}

/// Result of feeding an interaction to the combobox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// The interaction did not apply in the current state.
    Ignored,
    /// State changed without a commit (opened, typed, moved highlight).
    Consumed,
    /// An option was committed; carries its value.
    Committed(String),
    /// The dropdown closed without a commit.
    Dismissed,
}

type ChangeHandler = Box<dyn FnMut(&str)>;

/// A searchable selector: a text field that filters a dropdown of options.
///
/// The host owns the options and the selected value and passes them in; the
/// combobox owns only its open/closed phase and the transient filter text.
/// Commits are reported through [`on_change`](Self::on_change) and the
/// [`EventResult::Committed`] return value.
///
/// # Example
///
/// ```
/// use trellis::widgets::combobox::{Combobox, EventResult};
/// use trellis_dom::Document;
///
/// let doc = Document::new();
/// let mut combo = Combobox::new("fruit", [("a", "Apple"), ("b", "Banana")]);
///
/// combo.focus(&doc);
/// combo.input("ban");
/// assert_eq!(combo.candidates().len(), 1);
///
/// assert_eq!(combo.select_candidate(0), EventResult::Committed("b".into()));
/// assert_eq!(combo.display_text(), "Banana");
/// ```
pub struct Combobox {
    pub(super) id: String,
    pub(super) options: Rc<[ComboOption]>,
    pub(super) committed: String,
    pub(super) placeholder: String,
    pub(super) label: Option<String>,
    pub(super) disabled: bool,
    pub(super) phase: Rc<RefCell<Phase>>,
    pub(super) on_change: Option<ChangeHandler>,
}

impl fmt::Debug for Combobox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combobox")
            .field("id", &self.id)
            .field("options", &self.options.len())
            .field("committed", &self.committed)
            .field("disabled", &self.disabled)
            .field("phase", &*self.phase.borrow())
            .finish()
    }
}

impl Combobox {
    /// Create a closed combobox with no selection.
    ///
    /// `id` becomes the root element ID; it must be unique in the document.
    pub fn new<O: Into<ComboOption>>(
        id: impl Into<String>,
        options: impl IntoIterator<Item = O>,
    ) -> Self {
        Self {
            id: id.into(),
            options: options.into_iter().map(Into::into).collect(),
            committed: String::new(),
            placeholder: String::new(),
            label: None,
            disabled: false,
            phase: Rc::new(RefCell::new(Phase::Closed)),
            on_change: None,
        }
    }

    /// Set the initially committed value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.committed = value.into();
        self
    }

    /// Set the text shown when nothing is typed or selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the field label rendered above the input.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the combobox as disabled. Disabled comboboxes ignore all input.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the option value on every commit, never on dismiss.
    pub fn on_change(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    // -------------------------------------------------------------------------
    // Host-controlled data
    // -------------------------------------------------------------------------

    /// Replace the committed value without emitting a change.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.committed = value.into();
    }

    /// Replace the option list. An open dropdown is re-filtered.
    pub fn set_options<O: Into<ComboOption>>(&mut self, options: impl IntoIterator<Item = O>) {
        self.options = options.into_iter().map(Into::into).collect();
        if let Phase::Open {
            filter,
            matches,
            highlight,
            ..
        } = &mut *self.phase.borrow_mut()
        {
            *matches = filter_options(&self.options, filter);
            *highlight = (*highlight).min(matches.len().saturating_sub(1));
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &[ComboOption] {
        &self.options
    }

    /// The committed value, empty when nothing is selected.
    pub fn selected_value(&self) -> &str {
        &self.committed
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_open(&self) -> bool {
        self.phase.borrow().is_open()
    }

    /// Label of the option whose value is the committed value.
    pub fn committed_label(&self) -> Option<&str> {
        if self.committed.is_empty() {
            return None;
        }
        self.options
            .iter()
            .find(|option| option.value == self.committed)
            .map(|option| option.label.as_str())
    }

    /// Text shown in the input: the filter while open, otherwise the
    /// committed option's label (empty if none matches).
    pub fn display_text(&self) -> String {
        match &*self.phase.borrow() {
            Phase::Open { filter, .. } => filter.clone(),
            Phase::Closed => self.committed_label().unwrap_or_default().to_string(),
        }
    }

    pub fn state(&self) -> SelectorState {
        let filter_text = match &*self.phase.borrow() {
            Phase::Open { filter, .. } => filter.clone(),
            Phase::Closed => String::new(),
        };
        SelectorState {
            is_open: self.is_open(),
            filter_text,
            committed_value: self.committed.clone(),
        }
    }

    /// Options matching the current filter, in option order.
    ///
    /// While closed the filter is empty, so every option is a candidate.
    pub fn candidates(&self) -> Vec<&ComboOption> {
        match &*self.phase.borrow() {
            Phase::Open { matches, .. } => {
                matches.iter().filter_map(|&i| self.options.get(i)).collect()
            }
            Phase::Closed => self.options.iter().collect(),
        }
    }

    pub fn listing(&self) -> Listing<'_> {
        if !self.is_open() {
            return Listing::Closed;
        }
        let candidates = self.candidates();
        if candidates.is_empty() {
            Listing::NoResults
        } else {
            Listing::Matches(candidates)
        }
    }

    /// True while open with a filter that matches nothing.
    pub fn is_no_results(&self) -> bool {
        matches!(self.listing(), Listing::NoResults)
    }

    /// Position of the highlighted candidate, if the dropdown has any.
    pub fn highlight_index(&self) -> Option<usize> {
        match &*self.phase.borrow() {
            Phase::Open {
                matches, highlight, ..
            } if !matches.is_empty() => Some(*highlight),
            _ => None,
        }
    }

    pub fn highlighted(&self) -> Option<&ComboOption> {
        let index = self.highlight_index()?;
        self.candidates().get(index).copied()
    }
}
