//! Markdown rendering
//!
//! Pure string builders: one bullet per entry with an issue link, one
//! level-3 heading per section.

use tracing::{debug, instrument};

use newsreel_core::config::GithubConfig;

use crate::types::{GatheredSection, NewsEntry};

/// Render one entry as a Markdown bullet with its issue link
pub fn entry_markdown(entry: &NewsEntry, github: &GithubConfig) -> String {
    format!(
        "- {} ([#{}]({}))",
        entry.description,
        entry.issue_number,
        github.issue_url(entry.issue_number)
    )
}

/// Render the gathered sections as the body of one changelog version.
///
/// Each section contributes a `### <title>` heading followed by its entry
/// bullets; sections are separated by a blank line. A section with no
/// entries still emits its heading.
#[instrument(skip(gathered, github), fields(sections = gathered.len()))]
pub fn changelog_markdown(gathered: &[GatheredSection], github: &GithubConfig) -> String {
    let blocks: Vec<String> = gathered
        .iter()
        .map(|gs| {
            let mut block = format!("### {}", gs.section.title);
            if !gs.entries.is_empty() {
                block.push_str("\n\n");
                let bullets: Vec<String> = gs
                    .entries
                    .iter()
                    .map(|entry| entry_markdown(entry, github))
                    .collect();
                block.push_str(&bullets.join("\n"));
            }
            block
        })
        .collect();

    let output = blocks.join("\n\n");
    debug!(output_len = output.len(), "changelog body rendered");
    output
}
