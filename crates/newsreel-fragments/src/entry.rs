//! News entry parsing
//!
//! Entry files are named `<issue>.md` or `<issue>-<slug>.md` and hold the
//! fragment text as strict UTF-8 without a byte-order mark.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use newsreel_core::error::FragmentError;

use crate::types::NewsEntry;
use crate::Result;

/// Regex for entry file names
static ENTRY_FILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<issue>\d+)(-[^/]*)?\.md$").expect("Invalid regex"));

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Parse one news fragment file into a [`NewsEntry`].
///
/// The issue number comes from the file name; the description is the
/// trimmed file content. A name that does not match the entry grammar, a
/// non-UTF-8 body, or a leading byte-order mark is a fatal error — the BOM
/// is rejected, never stripped.
#[instrument(fields(path = %path.display()))]
pub fn parse_entry(path: &Path) -> Result<NewsEntry> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| FragmentError::BadFileName(path.to_path_buf()))?;

    let caps = ENTRY_FILE_REGEX
        .captures(file_name)
        .ok_or_else(|| FragmentError::BadFileName(path.to_path_buf()))?;

    let issue_number: u64 = caps["issue"]
        .parse()
        .map_err(|_| FragmentError::BadFileName(path.to_path_buf()))?;

    let bytes = std::fs::read(path)?;
    if bytes.starts_with(UTF8_BOM) {
        return Err(FragmentError::BomPresent(path.to_path_buf()));
    }
    let text =
        std::str::from_utf8(&bytes).map_err(|_| FragmentError::NotUtf8(path.to_path_buf()))?;

    debug!(issue_number, "parsed news entry");
    Ok(NewsEntry {
        issue_number,
        description: text.trim().to_string(),
        path: Some(path.to_path_buf()),
    })
}
