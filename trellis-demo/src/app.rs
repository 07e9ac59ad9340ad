//! The host view: owns the data and the selected team, drives the widgets.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{
    Event as CtEvent, KeyEventKind, MouseButton as CtMouseButton, MouseEvent, MouseEventKind,
};
use log::debug;
use serde_json::Value;
use trellis::widgets::combobox::{Combobox, EventResult};
use trellis::widgets::grid::{ColumnSpec, GridModel, layout_lines};
use trellis_dom::{Content, Direction, Document, Element, Key, LayoutResult, Modifiers, Rect};

use crate::fixture::Fixture;

const COMBO_ID: &str = "team";
const CLEAR_ID: &str = "clear";
const HELP_TEXT: &str = "Tab open/close · type to filter · Up/Down move · Enter select · \
                         Esc or click outside to dismiss · Ctrl+Q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct DemoApp {
    doc: Document,
    fixture: Fixture,
    columns: Vec<ColumnSpec<Value>>,
    team: Combobox,
    /// Canonical selection; the combobox reports into it and reads it back.
    selected: Rc<RefCell<String>>,
    layout: LayoutResult,
}

impl DemoApp {
    pub fn new(fixture: Fixture) -> Self {
        let selected = Rc::new(RefCell::new(String::new()));
        let sink = selected.clone();
        let team = Combobox::new(COMBO_ID, fixture.options.iter().cloned())
            .label("Team")
            .placeholder(fixture.placeholder.as_str())
            .on_change(move |value| {
                debug!("Team changed to {}", value);
                *sink.borrow_mut() = value.to_string();
            });

        Self {
            doc: Document::new(),
            columns: fixture.column_specs(),
            fixture,
            team,
            selected,
            layout: LayoutResult::new(),
        }
    }

    pub fn handle(&mut self, event: CtEvent) -> Flow {
        match event {
            CtEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                let key = Key::from(key_event.code);
                let modifiers = Modifiers::from(key_event.modifiers);
                if modifiers.ctrl && matches!(key, Key::Char('c') | Key::Char('q')) {
                    return Flow::Quit;
                }

                let result = match key {
                    Key::Tab if self.team.is_open() => self.team.dismiss(),
                    Key::Tab => self.team.focus(&self.doc),
                    _ => self.team.handle_key(key, modifiers, &self.doc),
                };
                log_result(result);
            }
            CtEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(CtMouseButton::Left),
                column,
                row,
                ..
            }) => self.click(column, row),
            _ => {}
        }
        Flow::Continue
    }

    fn click(&mut self, x: u16, y: u16) {
        // Listeners (the open combobox) see the activation first.
        let activation = self.doc.click(&self.layout, x, y);
        match activation.target.as_deref() {
            Some(CLEAR_ID) => {
                self.selected.borrow_mut().clear();
            }
            Some(target) if activation.is_within(self.team.id()) => {
                let result = self.team.handle_click(target, &self.doc);
                log_result(result);
            }
            _ => {}
        }
    }

    /// Rebuild the view, lay it out one element per line, and mount it.
    pub fn render(&mut self, width: u16) -> Vec<String> {
        let selected = self.selected.borrow().clone();
        self.team.set_value(selected.as_str());

        let root = self.view(&selected);
        let mut lines = Vec::new();
        let mut layout = LayoutResult::new();
        self.flow(&root, width, &mut lines, &mut layout);

        self.doc.mount(root);
        self.layout = layout;
        lines
    }

    fn view(&self, selected: &str) -> Element {
        let rows = self.fixture.rows_for(selected);
        let model = GridModel::new(&self.columns, &rows);
        let grid = Element::col().id("grid").children(
            layout_lines(&model)
                .into_iter()
                .enumerate()
                .map(|(i, line)| Element::text(line).id(format!("grid-line-{i}"))),
        );

        Element::col()
            .id("page")
            .child(Element::text("trellis demo: team directory").id("title"))
            .child(Element::text("").id("spacer-top"))
            .child(self.team.element())
            .child(Element::text("[ clear filter ]").id(CLEAR_ID).clickable(true))
            .child(Element::text("").id("spacer-grid"))
            .child(grid)
            .child(
                Element::text(format!(
                    "{} of {} members",
                    rows.len(),
                    self.fixture.rows.len()
                ))
                .id("count"),
            )
            .child(
                Element::text(HELP_TEXT).id("help"),
            )
    }

    /// Stack column children vertically; a text or row element takes one line.
    fn flow(
        &self,
        element: &Element,
        width: u16,
        lines: &mut Vec<String>,
        layout: &mut LayoutResult,
    ) {
        let top = lines.len() as u16;
        match (&element.content, element.direction) {
            (Content::None, _) => return,
            (Content::Text(_), _) | (Content::Children(_), Direction::Row) => {
                lines.push(self.decorate(element));
            }
            (Content::Children(children), Direction::Column) => {
                for child in children {
                    self.flow(child, width, lines, layout);
                }
            }
        }
        let height = lines.len() as u16 - top;
        layout.insert(element.id.clone(), Rect::new(0, top, width, height));
    }

    fn decorate(&self, element: &Element) -> String {
        let text = element.text_content();
        if element.id == self.team.input_id() {
            let arrow = if self.team.is_open() { "▴" } else { "▾" };
            return format!("[ {text} {arrow} ]");
        }
        if element.get_data("state").is_some() {
            return format!("    ({text})");
        }
        if element.get_data("value").is_some() {
            let marker = if element.get_data("highlighted").is_some() {
                "›"
            } else {
                " "
            };
            let check = if element.get_data("selected").is_some() {
                " ✓"
            } else {
                ""
            };
            return format!("  {marker} {text}{check}");
        }
        text
    }
}

fn log_result(result: EventResult) {
    if result != EventResult::Ignored {
        debug!("Combobox event: {:?}", result);
    }
}
