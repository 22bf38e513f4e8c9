//! Entry collection
//!
//! Collects every qualifying entry file from one directory, fail-fast on
//! the first malformed file. Filesystem iteration order is OS-dependent,
//! so the result is always sorted explicitly.

use std::path::Path;

use tracing::{debug, instrument};

use crate::entry::parse_entry;
use crate::types::NewsEntry;
use crate::Result;

/// Collect all news entries directly inside `dir`.
///
/// Subdirectories are not descended into. A file named `README.md` (any
/// letter case) is skipped; every other file must parse as an entry, and a
/// single bad file aborts the whole collection with no partial result.
/// Entries come back sorted ascending by issue number, ties broken by
/// file name.
#[instrument(fields(dir = %dir.display()))]
pub fn collect_entries(dir: &Path) -> Result<Vec<NewsEntry>> {
    let mut entries = Vec::new();

    for dirent in std::fs::read_dir(dir)? {
        let dirent = dirent?;
        let path = dirent.path();
        if path.is_dir() {
            continue;
        }

        if path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.eq_ignore_ascii_case("README.md"))
        {
            debug!(path = %path.display(), "skipping README");
            continue;
        }

        entries.push(parse_entry(&path)?);
    }

    entries.sort_by(|a, b| {
        a.issue_number
            .cmp(&b.issue_number)
            .then_with(|| a.path.cmp(&b.path))
    });

    debug!(count = entries.len(), "collected news entries");
    Ok(entries)
}
