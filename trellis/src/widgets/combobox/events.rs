//! Event handling for the Combobox widget.

use std::rc::Rc;

use log::{debug, trace, warn};
use trellis_dom::{Document, Key, Modifiers};

use super::filter::filter_options;
use super::state::{Combobox, EventResult, Phase};

impl Combobox {
    /// ID of the input element inside the rendered combobox.
    pub fn input_id(&self) -> String {
        format!("{}-input", self.id)
    }

    /// ID of the dropdown row for candidate `index`.
    pub fn option_id(&self, index: usize) -> String {
        format!("{}-opt-{}", self.id, index)
    }

    /// Open the dropdown with an empty filter.
    ///
    /// Registers a listener on `doc` that dismisses the dropdown when an
    /// activation lands outside the combobox root. The listener is released
    /// as soon as the combobox closes or is dropped.
    pub fn focus(&mut self, doc: &Document) -> EventResult {
        if self.disabled || self.is_open() {
            return EventResult::Ignored;
        }

        let weak = Rc::downgrade(&self.phase);
        let root_id = self.id.clone();
        let listener = doc.on_activation(move |activation| {
            // Dropdown rows may not be mounted yet when the first click lands.
            let own_target = activation
                .target
                .as_deref()
                .is_some_and(|target| is_own_id(&root_id, target));
            if own_target || activation.is_within(&root_id) {
                return;
            }
            let Some(phase) = weak.upgrade() else {
                return;
            };
            match phase.try_borrow_mut() {
                Ok(mut phase) => {
                    if phase.is_open() {
                        debug!(
                            "Combobox {} dismissed by outside activation target={:?}",
                            root_id, activation.target
                        );
                        // Dropping the Open phase releases this listener.
                        *phase = Phase::Closed;
                    }
                }
                Err(_) => warn!("Combobox {} busy, outside activation ignored", root_id),
            }
        });

        debug!(
            "Combobox::focus id={} options={} listener={}",
            self.id,
            self.options.len(),
            listener.id()
        );
        *self.phase.borrow_mut() = Phase::Open {
            filter: String::new(),
            matches: filter_options(&self.options, ""),
            highlight: 0,
            listener,
        };
        EventResult::Consumed
    }

    /// Replace the filter text. Ignored while closed.
    pub fn input(&mut self, text: impl Into<String>) -> EventResult {
        if self.disabled {
            return EventResult::Ignored;
        }
        let text = text.into();
        self.update_filter(|filter| *filter = text)
    }

    /// Close without committing. A no-op while already closed.
    pub fn dismiss(&mut self) -> EventResult {
        let mut phase = self.phase.borrow_mut();
        if !phase.is_open() {
            return EventResult::Ignored;
        }
        debug!("Combobox::dismiss id={}", self.id);
        *phase = Phase::Closed;
        EventResult::Dismissed
    }

    /// Commit the option with `value`. Ignored while closed or when no
    /// option carries that value.
    pub fn select(&mut self, value: &str) -> EventResult {
        if self.disabled || !self.is_open() {
            return EventResult::Ignored;
        }
        match self.options.iter().position(|option| option.value == value) {
            Some(index) => self.commit(index),
            None => {
                warn!("Combobox {}: select of unknown value {:?}", self.id, value);
                EventResult::Ignored
            }
        }
    }

    /// Commit the candidate at `index` within the filtered list.
    pub fn select_candidate(&mut self, index: usize) -> EventResult {
        if self.disabled {
            return EventResult::Ignored;
        }
        let option_index = match &*self.phase.borrow() {
            Phase::Open { matches, .. } => matches.get(index).copied(),
            Phase::Closed => None,
        };
        match option_index {
            Some(option_index) => self.commit(option_index),
            None => EventResult::Ignored,
        }
    }

    /// Handle a key press.
    ///
    /// Closed: Enter or Down opens. Open: characters and Backspace edit the
    /// filter, Up/Down move the highlight, Enter commits the highlighted
    /// candidate, Escape dismisses.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers, doc: &Document) -> EventResult {
        // Ignore keys with ctrl/alt modifiers
        if self.disabled || modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        if !self.is_open() {
            return match key {
                Key::Enter | Key::Down => self.focus(doc),
                _ => EventResult::Ignored,
            };
        }

        match key {
            Key::Char(c) => self.update_filter(|filter| filter.push(c)),
            Key::Backspace => self.update_filter(|filter| {
                filter.pop();
            }),
            Key::Up => self.move_highlight(-1),
            Key::Down => self.move_highlight(1),
            Key::Home => self.move_highlight(isize::MIN),
            Key::End => self.move_highlight(isize::MAX),
            Key::Enter => match self.highlight_index() {
                Some(index) => self.select_candidate(index),
                None => EventResult::Ignored,
            },
            Key::Escape => self.dismiss(),
            _ => EventResult::Ignored,
        }
    }

    /// Handle an activation on an element inside the combobox.
    ///
    /// Clicking the input opens the dropdown; clicking a dropdown row
    /// commits that candidate. Outside activations are handled by the
    /// document listener registered in [`focus`](Self::focus).
    pub fn handle_click(&mut self, target: &str, doc: &Document) -> EventResult {
        if self.disabled {
            return EventResult::Ignored;
        }
        if target == self.input_id() {
            return self.focus(doc);
        }

        let prefix = format!("{}-opt-", self.id);
        match target
            .strip_prefix(&prefix)
            .and_then(|index| index.parse::<usize>().ok())
        {
            Some(index) => self.select_candidate(index),
            None => EventResult::Ignored,
        }
    }

    fn update_filter(&mut self, edit: impl FnOnce(&mut String)) -> EventResult {
        let mut phase = self.phase.borrow_mut();
        let Phase::Open {
            filter,
            matches,
            highlight,
            ..
        } = &mut *phase
        else {
            return EventResult::Ignored;
        };

        edit(filter);
        *matches = filter_options(&self.options, filter);
        *highlight = 0;
        trace!(
            "Combobox {} filter={:?} matches={}",
            self.id,
            filter,
            matches.len()
        );
        EventResult::Consumed
    }

    fn move_highlight(&mut self, delta: isize) -> EventResult {
        let mut phase = self.phase.borrow_mut();
        let Phase::Open {
            matches, highlight, ..
        } = &mut *phase
        else {
            return EventResult::Ignored;
        };
        if matches.is_empty() {
            return EventResult::Ignored;
        }

        let max = matches.len() - 1;
        *highlight = highlight.saturating_add_signed(delta).min(max);
        EventResult::Consumed
    }

    fn commit(&mut self, option_index: usize) -> EventResult {
        let Some(option) = self.options.get(option_index) else {
            return EventResult::Ignored;
        };
        let value = option.value.clone();

        debug!(
            "Combobox::commit id={} value={} label={}",
            self.id, value, option.label
        );
        self.committed = value.clone();
        *self.phase.borrow_mut() = Phase::Closed;

        // No borrow is held here, so the handler may call back into the host freely.
        if let Some(handler) = self.on_change.as_mut() {
            handler(&value);
        }
        EventResult::Committed(value)
    }
}

/// Whether `target` is the root or one of the part IDs rendered under it.
fn is_own_id(root_id: &str, target: &str) -> bool {
    let Some(rest) = target.strip_prefix(root_id) else {
        return false;
    };
    let Some(part) = rest.strip_prefix('-') else {
        return rest.is_empty();
    };
    match part {
        "label" | "input" | "dropdown" | "empty" => true,
        _ => part
            .strip_prefix("opt-")
            .is_some_and(|index| index.parse::<usize>().is_ok()),
    }
}
