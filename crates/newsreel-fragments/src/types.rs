//! Fragment pipeline types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single news fragment parsed from one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsEntry {
    /// Issue number parsed from the file name
    pub issue_number: u64,
    /// Trimmed fragment text
    pub description: String,
    /// Source file, `None` for entries built programmatically
    pub path: Option<PathBuf>,
}

impl NewsEntry {
    /// Create a new entry
    pub fn new(issue_number: u64, description: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self {
            issue_number,
            description: description.into(),
            path,
        }
    }
}

/// A titled grouping of fragments with a numeric display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTitle {
    /// Display order parsed from the directory name
    pub sort_index: u32,
    /// Human-readable title
    pub title: String,
    /// Source directory, `None` for synthetic sections
    pub path: Option<PathBuf>,
}

impl SectionTitle {
    /// Create a new section title
    pub fn new(sort_index: u32, title: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self {
            sort_index,
            title: title.into(),
            path,
        }
    }
}

/// One section paired with its collected entries, both in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatheredSection {
    /// The section heading
    pub section: SectionTitle,
    /// Entries sorted ascending by issue number
    pub entries: Vec<NewsEntry>,
}

impl GatheredSection {
    /// Check if the section has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
