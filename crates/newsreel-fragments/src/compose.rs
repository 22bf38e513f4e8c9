//! Changelog composition
//!
//! Splices freshly rendered news into an existing changelog document under
//! a new dated version heading. Pure in its inputs; the caller supplies
//! the date so the result is reproducible.

use chrono::NaiveDate;
use tracing::{debug, instrument};

use newsreel_core::error::FragmentError;

use crate::Result;

/// Compose the updated changelog document.
///
/// `existing` must start with a level-1 `# ` title line; a document with a
/// different shape is an error rather than a guess. The result is the
/// title, a blank line, a `## <version> (<day> <month> <year>)` heading
/// (no leading zero on the day), the trimmed news, two blank lines, then
/// the trimmed remainder of the original document, untouched.
#[instrument(skip(news, existing))]
pub fn compose_changelog(
    version: &str,
    news: &str,
    existing: &str,
    date: NaiveDate,
) -> Result<String> {
    let (title, rest) = existing.split_once('\n').unwrap_or((existing, ""));
    let title = title.trim_end();
    if !title.starts_with("# ") {
        return Err(FragmentError::MalformedChangelog(
            "expected a level-1 title on the first line".to_string(),
        ));
    }

    let stamp = date.format("%-d %B %Y").to_string();
    debug!(stamp, "composing new version heading");

    Ok(format!(
        "{}\n\n## {} ({})\n\n{}\n\n\n{}",
        title,
        version,
        stamp,
        news.trim(),
        rest.trim()
    ))
}
