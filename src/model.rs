//! Data model for a table image render.
//!
//! A request is a title plus an ordered list of sub-tables. Requests are
//! built fresh per render by the caller (see [`crate::tables`] for the
//! box-score and standings shapes) and are never stored.

use serde::{Deserialize, Serialize};

/// Everything needed to render one image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    /// Title drawn centered on the first line
    pub title: Option<String>,
    /// Sub-tables, stacked top to bottom in this order
    pub sections: Vec<TableSection>,
    /// Lower bound for the canvas width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
}

/// One sub-table: an optional centered subtitle followed by a grid of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSection {
    /// Subtitle drawn centered above the grid
    pub subtitle: Option<String>,
    /// Grid rows; the first row is usually the header
    pub rows: Vec<Vec<String>>,
}

impl RenderRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Append a section, builder style.
    pub fn with_section(mut self, section: TableSection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn with_min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Parse a request from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The title, if present and non-empty.
    pub fn title_text(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    /// True when there is no title and no section has any row.
    /// Such a request renders nothing.
    pub fn is_blank(&self) -> bool {
        self.title_text().is_none() && self.sections.iter().all(|s| s.rows.is_empty())
    }
}

impl TableSection {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { subtitle: None, rows }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Build a section from anything string-like, mostly for literals.
    pub fn from_cells<R, C>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// The subtitle, if present and non-empty.
    pub fn subtitle_text(&self) -> Option<&str> {
        non_empty(self.subtitle.as_deref())
    }

    /// Column count of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// True when rows disagree on their column count.
    pub fn is_ragged(&self) -> bool {
        let columns = self.column_count();
        self.rows.iter().any(|row| row.len() != columns)
    }

    /// Cell text at (row, column); missing cells of short rows read as empty.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map_or("", String::as_str)
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}
