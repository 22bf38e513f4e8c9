//! Section discovery
//!
//! Sections are immediate subdirectories named `<index> <title>`. Anything
//! else (support directories, scratch space) is skipped silently — unlike
//! entry files, a non-matching directory name is not an error.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use crate::types::SectionTitle;
use crate::Result;

/// Regex for section directory names
static SECTION_DIR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<index>\d+)\s+(?P<title>.+)$").expect("Invalid regex"));

/// Discover all titled sections directly inside `dir`.
///
/// Returns sections sorted ascending by sort index, ties broken by title.
/// An empty result is not an error.
#[instrument(fields(dir = %dir.display()))]
pub fn discover_sections(dir: &Path) -> Result<Vec<SectionTitle>> {
    let mut sections = Vec::new();

    for dirent in std::fs::read_dir(dir)? {
        let dirent = dirent?;
        let path = dirent.path();
        if !path.is_dir() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(caps) = SECTION_DIR_REGEX.captures(name) else {
            debug!(name, "skipping non-section directory");
            continue;
        };
        let Ok(sort_index) = caps["index"].parse::<u32>() else {
            debug!(name, "skipping directory with oversized index");
            continue;
        };

        sections.push(SectionTitle {
            sort_index,
            title: caps["title"].trim().to_string(),
            path: Some(path),
        });
    }

    sections.sort_by(|a, b| {
        a.sort_index
            .cmp(&b.sort_index)
            .then_with(|| a.title.cmp(&b.title))
    });

    debug!(count = sections.len(), "discovered sections");
    Ok(sections)
}
