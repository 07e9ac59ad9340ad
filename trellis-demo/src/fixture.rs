//! Host data: the options, column layout and rows the demo shows.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use trellis::widgets::combobox::ComboOption;
use trellis::widgets::grid::{Cell, ColumnSpec};
use trellis_dom::{Element, TextAlign};

use crate::error::DemoError;

const SAMPLE: &str = include_str!("../fixtures/sample.json");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl From<ColumnAlign> for TextAlign {
    fn from(align: ColumnAlign) -> Self {
        match align {
            ColumnAlign::Left => TextAlign::Left,
            ColumnAlign::Center => TextAlign::Center,
            ColumnAlign::Right => TextAlign::Right,
        }
    }
}

/// A field column as written in the fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnConfig {
    pub header: String,
    pub field: String,
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default)]
    pub align: ColumnAlign,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub placeholder: String,
    pub options: Vec<ComboOption>,
    pub columns: Vec<ColumnConfig>,
    pub rows: Vec<Value>,
}

impl Fixture {
    /// The fixture bundled with the demo.
    pub fn sample() -> Result<Self, DemoError> {
        Self::parse(SAMPLE, "<built-in sample>")
    }

    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = fs::read_to_string(path).map_err(|source| DemoError::ReadFixture {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    fn parse(text: &str, origin: &str) -> Result<Self, DemoError> {
        serde_json::from_str(text).map_err(|source| DemoError::ParseFixture {
            origin: origin.to_string(),
            source,
        })
    }

    /// Field columns from the fixture, followed by a computed status badge.
    pub fn column_specs(&self) -> Vec<ColumnSpec<Value>> {
        let mut columns: Vec<ColumnSpec<Value>> = self
            .columns
            .iter()
            .map(|config| {
                let mut column =
                    ColumnSpec::<Value>::field(config.header.as_str(), config.field.as_str())
                        .align(config.align.into());
                if let Some(width) = config.width {
                    column = column.width(width);
                }
                column
            })
            .collect();
        columns.push(ColumnSpec::computed("Status", status_badge));
        columns
    }

    /// Rows belonging to `team`, or every row when `team` is empty.
    pub fn rows_for(&self, team: &str) -> Vec<Value> {
        self.rows
            .iter()
            .filter(|row| team.is_empty() || row["team"].as_str() == Some(team))
            .cloned()
            .collect()
    }
}

fn status_badge(row: &Value) -> Cell {
    let status = row["status"].as_str().unwrap_or("unknown");
    let dot = match status {
        "active" => "●",
        "away" => "◐",
        _ => "○",
    };
    Element::row()
        .child(Element::text(dot))
        .child(Element::text(status.to_uppercase()))
        .into()
}
