//! Table - a tabular snapshot of documents for list views.
//!
//! A [`DocumentTable`] holds copies taken from
//! [`DocumentRepository::find_all`](crate::DocumentRepository::find_all). It is
//! rebuilt after every mutation rather than kept in sync.

use std::cmp::Ordering;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::document::Document;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Id,
    Title,
    Authors,
    Published,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Id, Column::Title, Column::Authors, Column::Published];

    pub fn from_index(index: usize) -> Option<Column> {
        Self::ALL.get(index).copied()
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "Id",
            Column::Title => "Title",
            Column::Authors => "Author(s)",
            Column::Published => "Published",
        }
    }

    fn compare(self, a: &Document, b: &Document) -> Ordering {
        match self {
            Column::Id => a.id().cmp(&b.id()),
            Column::Title => a.title().cmp(b.title()),
            Column::Authors => a.authors().cmp(b.authors()),
            Column::Published => a.published().cmp(&b.published()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Rows of document copies with display formatting for each [`Column`].
#[derive(Debug, Clone)]
pub struct DocumentTable {
    rows: Vec<Document>,
    date_format: String,
}

impl DocumentTable {
    pub fn new(rows: Vec<Document>) -> Self {
        Self::with_date_format(rows, DEFAULT_DATE_FORMAT)
    }

    pub fn with_date_format(rows: Vec<Document>, date_format: impl Into<String>) -> Self {
        Self {
            rows,
            date_format: date_format.into(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        Column::ALL.len()
    }

    pub fn header(&self, column: Column) -> &'static str {
        column.header()
    }

    pub fn document(&self, row: usize) -> Option<&Document> {
        self.rows.get(row)
    }

    pub fn rows(&self) -> &[Document] {
        &self.rows
    }

    /// Display text of one cell, or `None` when the row is out of range.
    pub fn cell(&self, row: usize, column: Column) -> Option<String> {
        let doc = self.rows.get(row)?;
        let text = match column {
            Column::Id => doc.id().to_string(),
            Column::Title => doc.title().to_string(),
            Column::Authors => doc.authors_display(),
            Column::Published => self.format_date(doc),
        };
        Some(text)
    }

    /// Title and body of a row, for a detail pane next to the table.
    pub fn preview(&self, row: usize) -> Option<(&str, &str)> {
        self.rows.get(row).map(|d| (d.title(), d.body()))
    }

    /// Stable sort of the rows by one column.
    pub fn sort(&mut self, column: Column, order: SortOrder) {
        self.rows.sort_by(|a, b| {
            let ord = column.compare(a, b);
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
    }

    fn format_date(&self, doc: &Document) -> String {
        let published = doc.published();
        let mut out = String::new();
        // An invalid format string surfaces as fmt::Error here rather than a panic in to_string.
        match write!(out, "{}", published.format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => published.format(DEFAULT_DATE_FORMAT).to_string(),
        }
    }
}
