use std::cell::RefCell;
use std::rc::Rc;

use trellis::widgets::combobox::{
    ComboOption, Combobox, EventResult, Listing, NO_RESULTS_TEXT, SelectorState, filter_options,
};
use trellis_dom::{Content, Document, Element, Key, Modifiers, find_element};

fn alpha_beta() -> Vec<ComboOption> {
    vec![
        ComboOption::new("a", "Alpha"),
        ComboOption::new("b", "Beta"),
    ]
}

fn countries() -> Vec<ComboOption> {
    vec![
        ComboOption::new("de", "Germany"),
        ComboOption::new("gb", "United Kingdom"),
        ComboOption::new("us", "United States"),
        ComboOption::new("ca", "Canada"),
    ]
}

/// A combobox whose change events are recorded.
fn recording(options: Vec<ComboOption>) -> (Combobox, Rc<RefCell<Vec<String>>>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    let combo = Combobox::new("combo", options).on_change(move |value| {
        sink.borrow_mut().push(value.to_string());
    });
    (combo, changes)
}

/// Mount a page with the combobox next to an unrelated element.
fn mount(doc: &mut Document, combo: &Combobox) {
    doc.mount(
        Element::col()
            .id("page")
            .child(combo.element())
            .child(Element::text("elsewhere").id("elsewhere").clickable(true)),
    );
}

fn key(combo: &mut Combobox, key: Key, doc: &Document) -> EventResult {
    combo.handle_key(key, Modifiers::new(), doc)
}

// ============================================================================
// State machine
// ============================================================================

#[test]
fn test_initial_state() {
    let combo = Combobox::new("combo", alpha_beta()).value("b");

    assert_eq!(
        combo.state(),
        SelectorState {
            is_open: false,
            filter_text: String::new(),
            committed_value: "b".into(),
        }
    );
    assert_eq!(combo.display_text(), "Beta");
    assert_eq!(combo.listing(), Listing::Closed);
}

#[test]
fn test_focus_opens_with_empty_filter() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", alpha_beta()).value("a");

    assert_eq!(combo.focus(&doc), EventResult::Consumed);
    assert!(combo.is_open());
    // Filter starts empty, not pre-filled with the current label
    assert_eq!(combo.state().filter_text, "");
    assert_eq!(combo.display_text(), "");
    assert_eq!(combo.candidates().len(), 2);
}

#[test]
fn test_focus_while_open_is_ignored() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", alpha_beta());

    combo.focus(&doc);
    combo.input("al");
    assert_eq!(combo.focus(&doc), EventResult::Ignored);
    assert_eq!(combo.state().filter_text, "al");
    assert_eq!(doc.listener_count(), 1);
}

#[test]
fn test_typing_filters_candidates() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", alpha_beta());
    combo.focus(&doc);

    combo.input("al");
    assert_eq!(combo.candidates(), vec![&ComboOption::new("a", "Alpha")]);
    assert!(!combo.is_no_results());

    combo.input("z");
    assert!(combo.candidates().is_empty());
    assert!(combo.is_no_results());
    assert_eq!(combo.listing(), Listing::NoResults);
}

#[test]
fn test_input_while_closed_is_ignored() {
    let mut combo = Combobox::new("combo", alpha_beta());
    assert_eq!(combo.input("al"), EventResult::Ignored);
    assert_eq!(combo.state().filter_text, "");
}

#[test]
fn test_candidates_match_filter_property() {
    let doc = Document::new();
    let options = countries();
    let mut combo = Combobox::new("combo", options.clone());
    combo.focus(&doc);

    for query in ["", "u", "UNITED", "an", "king", "x", "a", "States"] {
        combo.input(query);
        let expected: Vec<&ComboOption> = options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&query.to_lowercase()))
            .collect();
        assert_eq!(combo.candidates(), expected, "query {query:?}");
        assert_eq!(
            filter_options(&options, query).len(),
            expected.len(),
            "query {query:?}"
        );
    }
}

#[test]
fn test_select_commits_and_notifies_once() {
    let doc = Document::new();
    let (mut combo, changes) = recording(alpha_beta());

    combo.focus(&doc);
    combo.input("be");
    assert_eq!(combo.select("b"), EventResult::Committed("b".into()));

    assert!(!combo.is_open());
    assert_eq!(combo.selected_value(), "b");
    assert_eq!(combo.display_text(), "Beta");
    assert_eq!(*changes.borrow(), vec!["b".to_string()]);
}

#[test]
fn test_select_unknown_value_is_ignored() {
    let doc = Document::new();
    let (mut combo, changes) = recording(alpha_beta());

    combo.focus(&doc);
    assert_eq!(combo.select("nope"), EventResult::Ignored);
    assert!(combo.is_open());
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_select_while_closed_is_ignored() {
    let (mut combo, changes) = recording(alpha_beta());
    assert_eq!(combo.select("a"), EventResult::Ignored);
    assert_eq!(combo.select_candidate(0), EventResult::Ignored);
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_dismiss_keeps_committed_value() {
    let doc = Document::new();
    let (mut combo, changes) = recording(alpha_beta());
    combo.set_value("a");

    combo.focus(&doc);
    combo.input("bet");
    assert_eq!(combo.dismiss(), EventResult::Dismissed);

    assert_eq!(combo.selected_value(), "a");
    assert_eq!(combo.display_text(), "Alpha");
    assert_eq!(combo.state().filter_text, "");
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_dismiss_while_closed_is_noop() {
    let (mut combo, changes) = recording(alpha_beta());
    combo.set_value("a");
    let before = combo.state();

    assert_eq!(combo.dismiss(), EventResult::Ignored);
    assert_eq!(combo.dismiss(), EventResult::Ignored);
    assert_eq!(combo.state(), before);
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_reopen_starts_with_fresh_filter() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", alpha_beta());

    combo.focus(&doc);
    combo.input("be");
    combo.dismiss();
    combo.focus(&doc);
    assert_eq!(combo.state().filter_text, "");
    assert_eq!(combo.candidates().len(), 2);
}

#[test]
fn test_unknown_committed_value_displays_empty() {
    let combo = Combobox::new("combo", alpha_beta()).value("zzz");
    assert_eq!(combo.display_text(), "");
    assert_eq!(combo.committed_label(), None);
}

#[test]
fn test_set_value_does_not_emit() {
    let (mut combo, changes) = recording(alpha_beta());
    combo.set_value("b");
    assert_eq!(combo.display_text(), "Beta");
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_set_options_refilters_open_dropdown() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", alpha_beta());
    combo.focus(&doc);
    combo.input("a");
    assert_eq!(combo.candidates().len(), 2);

    combo.set_options([("c", "Gamma"), ("d", "Delta")]);
    assert_eq!(combo.candidates().len(), 2);
    combo.input("del");
    assert_eq!(combo.candidates(), vec![&ComboOption::new("d", "Delta")]);
}

#[test]
fn test_options_are_not_mutated() {
    let doc = Document::new();
    let options = countries();
    let mut combo = Combobox::new("combo", options.clone());

    combo.focus(&doc);
    combo.input("united");
    combo.select_candidate(1);
    assert_eq!(combo.options(), options.as_slice());
}

#[test]
fn test_disabled_ignores_everything() {
    let doc = Document::new();
    let (combo, changes) = recording(alpha_beta());
    let mut combo = combo.disabled(true);

    assert_eq!(combo.focus(&doc), EventResult::Ignored);
    assert_eq!(key(&mut combo, Key::Enter, &doc), EventResult::Ignored);
    assert!(!combo.is_open());
    assert_eq!(doc.listener_count(), 0);
    assert!(changes.borrow().is_empty());
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_keys_edit_filter() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", alpha_beta());
    combo.focus(&doc);

    key(&mut combo, Key::Char('b'), &doc);
    key(&mut combo, Key::Char('x'), &doc);
    assert!(combo.is_no_results());

    key(&mut combo, Key::Backspace, &doc);
    assert_eq!(combo.state().filter_text, "b");
    assert_eq!(combo.candidates(), vec![&ComboOption::new("b", "Beta")]);
}

#[test]
fn test_arrow_keys_move_highlight_and_clamp() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", countries());
    combo.focus(&doc);
    assert_eq!(combo.highlight_index(), Some(0));

    key(&mut combo, Key::Up, &doc);
    assert_eq!(combo.highlight_index(), Some(0));

    for _ in 0..10 {
        key(&mut combo, Key::Down, &doc);
    }
    assert_eq!(combo.highlight_index(), Some(3));
    assert_eq!(combo.highlighted(), Some(&ComboOption::new("ca", "Canada")));

    key(&mut combo, Key::Home, &doc);
    assert_eq!(combo.highlight_index(), Some(0));
}

#[test]
fn test_typing_resets_highlight() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", countries());
    combo.focus(&doc);

    key(&mut combo, Key::Down, &doc);
    key(&mut combo, Key::Down, &doc);
    key(&mut combo, Key::Char('u'), &doc);
    assert_eq!(combo.highlight_index(), Some(0));
}

#[test]
fn test_enter_commits_highlighted() {
    let doc = Document::new();
    let (mut combo, changes) = recording(countries());
    combo.focus(&doc);

    combo.input("united");
    key(&mut combo, Key::Down, &doc);
    assert_eq!(
        key(&mut combo, Key::Enter, &doc),
        EventResult::Committed("us".into())
    );
    assert_eq!(combo.display_text(), "United States");
    assert_eq!(*changes.borrow(), vec!["us".to_string()]);
}

#[test]
fn test_enter_with_no_results_does_nothing() {
    let doc = Document::new();
    let (mut combo, changes) = recording(countries());
    combo.focus(&doc);
    combo.input("zz");

    assert_eq!(key(&mut combo, Key::Enter, &doc), EventResult::Ignored);
    assert!(combo.is_open());
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_escape_dismisses() {
    let doc = Document::new();
    let (mut combo, changes) = recording(countries());
    combo.focus(&doc);
    combo.input("ger");

    assert_eq!(key(&mut combo, Key::Escape, &doc), EventResult::Dismissed);
    assert!(!combo.is_open());
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_closed_keys() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", countries());

    assert_eq!(key(&mut combo, Key::Char('x'), &doc), EventResult::Ignored);
    assert_eq!(key(&mut combo, Key::Escape, &doc), EventResult::Ignored);
    assert_eq!(key(&mut combo, Key::Down, &doc), EventResult::Consumed);
    assert!(combo.is_open());
}

#[test]
fn test_ctrl_keys_ignored() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", countries());
    combo.focus(&doc);

    assert_eq!(
        combo.handle_key(Key::Char('a'), Modifiers::ctrl(), &doc),
        EventResult::Ignored
    );
    assert_eq!(combo.state().filter_text, "");
}

// ============================================================================
// Outside activation
// ============================================================================

#[test]
fn test_listener_only_while_open() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", alpha_beta());
    assert_eq!(doc.listener_count(), 0);

    combo.focus(&doc);
    assert_eq!(doc.listener_count(), 1);

    combo.dismiss();
    assert_eq!(doc.listener_count(), 0);

    combo.focus(&doc);
    combo.select("a");
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn test_drop_while_open_releases_listener() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", alpha_beta());
    combo.focus(&doc);
    assert_eq!(doc.listener_count(), 1);

    drop(combo);
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn test_outside_activation_dismisses() {
    let mut doc = Document::new();
    let (mut combo, changes) = recording(alpha_beta());
    combo.set_value("a");

    combo.focus(&doc);
    combo.input("be");
    mount(&mut doc, &combo);

    doc.activate(Some("elsewhere"));
    assert!(!combo.is_open());
    assert_eq!(combo.selected_value(), "a");
    assert_eq!(doc.listener_count(), 0);
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_activation_with_no_target_dismisses() {
    let mut doc = Document::new();
    let mut combo = Combobox::new("combo", alpha_beta());
    combo.focus(&doc);
    mount(&mut doc, &combo);

    doc.activate(None);
    assert!(!combo.is_open());
}

#[test]
fn test_inside_activation_keeps_open() {
    let mut doc = Document::new();
    let mut combo = Combobox::new("combo", alpha_beta());
    combo.focus(&doc);
    mount(&mut doc, &combo);

    doc.activate(Some("combo-input"));
    assert!(combo.is_open());
    doc.activate(Some("combo-dropdown"));
    assert!(combo.is_open());
    assert_eq!(doc.listener_count(), 1);
}

#[test]
fn test_activating_unmounted_option_commits() {
    let mut doc = Document::new();
    let (mut combo, changes) = recording(alpha_beta());
    // Mounted closed, so the dropdown rows are not in the document yet.
    mount(&mut doc, &combo);
    combo.focus(&doc);

    let activation = doc.activate(Some("combo-opt-0"));
    assert!(activation.path.is_empty());
    assert!(combo.is_open());

    assert_eq!(
        combo.handle_click("combo-opt-0", &doc),
        EventResult::Committed("a".into())
    );
    assert_eq!(*changes.borrow(), vec!["a".to_string()]);
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn test_outside_activation_only_closes_owner() {
    let mut doc = Document::new();
    let mut first = Combobox::new("first", alpha_beta());
    let mut second = Combobox::new("second", alpha_beta());

    first.focus(&doc);
    first.dismiss();
    second.focus(&doc);
    doc.mount(
        Element::row()
            .id("page")
            .child(first.element())
            .child(second.element()),
    );

    doc.activate(Some("second-input"));
    assert!(second.is_open());

    doc.activate(Some("first-input"));
    assert!(!second.is_open());
    assert_eq!(doc.listener_count(), 0);
}

// ============================================================================
// Clicks and rendering
// ============================================================================

#[test]
fn test_click_input_opens_and_click_option_commits() {
    let doc = Document::new();
    let (mut combo, changes) = recording(countries());

    assert_eq!(combo.handle_click("combo-input", &doc), EventResult::Consumed);
    combo.input("united");
    assert_eq!(
        combo.handle_click("combo-opt-0", &doc),
        EventResult::Committed("gb".into())
    );
    assert_eq!(*changes.borrow(), vec!["gb".to_string()]);
}

#[test]
fn test_click_unrelated_target_ignored() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", countries());
    combo.focus(&doc);

    assert_eq!(combo.handle_click("combo-opt-99", &doc), EventResult::Ignored);
    assert_eq!(combo.handle_click("combo-opt-x", &doc), EventResult::Ignored);
    assert_eq!(combo.handle_click("other", &doc), EventResult::Ignored);
    assert!(combo.is_open());
}

#[test]
fn test_element_closed_shows_label_or_placeholder() {
    let combo = Combobox::new("combo", alpha_beta()).placeholder("Pick one");
    let root = combo.element();
    let input = find_element(&root, "combo-input").expect("input rendered");
    assert_eq!(input.content, Content::Text("Pick one".into()));
    assert_eq!(input.get_data("placeholder").map(String::as_str), Some("true"));
    assert!(find_element(&root, "combo-dropdown").is_none());

    let combo = combo.value("a").label("Letter");
    let root = combo.element();
    let input = find_element(&root, "combo-input").expect("input rendered");
    assert_eq!(input.content, Content::Text("Alpha".into()));
    assert!(find_element(&root, "combo-label").is_some());
}

#[test]
fn test_element_open_lists_candidates() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", countries()).value("us");
    combo.focus(&doc);
    combo.input("united");

    let root = combo.element();
    let first = find_element(&root, "combo-opt-0").expect("first row");
    let second = find_element(&root, "combo-opt-1").expect("second row");
    assert_eq!(first.get_data("value").map(String::as_str), Some("gb"));
    assert_eq!(first.get_data("highlighted").map(String::as_str), Some("true"));
    assert_eq!(second.get_data("selected").map(String::as_str), Some("true"));
    assert_eq!(second.text_content(), "United States");
    assert!(find_element(&root, "combo-opt-2").is_none());
}

#[test]
fn test_element_no_results() {
    let doc = Document::new();
    let mut combo = Combobox::new("combo", countries());
    combo.focus(&doc);
    combo.input("zz");

    let root = combo.element();
    let empty = find_element(&root, "combo-empty").expect("no-results row");
    assert_eq!(empty.content, Content::Text(NO_RESULTS_TEXT.into()));
    assert!(find_element(&root, "combo-opt-0").is_none());
}
