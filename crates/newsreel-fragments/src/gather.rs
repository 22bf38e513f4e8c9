//! Gathering
//!
//! Composes section discovery and entry collection into one ordered
//! structure, the input to rendering and cleanup.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::collect::collect_entries;
use crate::sections::discover_sections;
use crate::types::{GatheredSection, SectionTitle};
use crate::Result;

/// Title used when loose entries are gathered without any section
const FALLBACK_TITLE: &str = "Changes";

/// Gather all sections under `root` with their entries.
///
/// One result per discovered section, in section order; sections with no
/// entries are kept. When `root` has no section subdirectories at all, its
/// loose entry files are gathered into a single synthetic section with no
/// backing path.
#[instrument(fields(root = %root.display()))]
pub fn gather(root: &Path) -> Result<Vec<GatheredSection>> {
    let sections = discover_sections(root)?;

    if sections.is_empty() {
        let entries = collect_entries(root)?;
        if entries.is_empty() {
            debug!("no sections and no loose entries");
            return Ok(Vec::new());
        }
        info!(count = entries.len(), "gathered loose entries without sections");
        return Ok(vec![GatheredSection {
            section: SectionTitle::new(0, FALLBACK_TITLE, None),
            entries,
        }]);
    }

    let mut gathered = Vec::with_capacity(sections.len());
    for section in sections {
        let entries = match &section.path {
            Some(dir) => collect_entries(dir)?,
            None => Vec::new(),
        };
        gathered.push(GatheredSection { section, entries });
    }

    info!(
        sections = gathered.len(),
        entries = gathered.iter().map(|g| g.entries.len()).sum::<usize>(),
        "gathered news fragments"
    );
    Ok(gathered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_gather_two_sections() {
        let temp = TempDir::new().unwrap();
        let fixes = temp.path().join("2 Fixes");
        std::fs::create_dir(&fixes).unwrap();
        std::fs::write(fixes.join("1.md"), "Fix 1").unwrap();
        std::fs::write(fixes.join("3.md"), "Fix 2").unwrap();
        let enhancements = temp.path().join("1 Enhancements");
        std::fs::create_dir(&enhancements).unwrap();
        std::fs::write(enhancements.join("2.md"), "Enhancement 1").unwrap();
        std::fs::write(enhancements.join("4.md"), "Enhancement 2").unwrap();

        let gathered = gather(temp.path()).unwrap();
        assert_eq!(gathered.len(), 2);

        assert_eq!(gathered[0].section.title, "Enhancements");
        assert_eq!(gathered[0].entries.len(), 2);
        assert_eq!(gathered[0].entries[0].description, "Enhancement 1");
        assert_eq!(gathered[0].entries[1].description, "Enhancement 2");

        assert_eq!(gathered[1].section.title, "Fixes");
        assert_eq!(gathered[1].entries.len(), 2);
        assert_eq!(gathered[1].entries[0].description, "Fix 1");
        assert_eq!(gathered[1].entries[1].description, "Fix 2");
    }

    #[test]
    fn test_empty_section_kept() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("1 Enhancements")).unwrap();

        let gathered = gather(temp.path()).unwrap();
        assert_eq!(gathered.len(), 1);
        assert!(gathered[0].is_empty());
    }

    #[test]
    fn test_loose_entries_fallback() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("45.md"), "45").unwrap();
        std::fs::write(temp.path().join("123.md"), "123").unwrap();

        let gathered = gather(temp.path()).unwrap();
        assert_eq!(gathered.len(), 1);
        assert!(gathered[0].section.path.is_none());
        assert_eq!(gathered[0].entries.len(), 2);
        assert_eq!(gathered[0].entries[0].issue_number, 45);
        assert_eq!(gathered[0].entries[1].issue_number, 123);
    }

    #[test]
    fn test_empty_root() {
        let temp = TempDir::new().unwrap();
        assert!(gather(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_bad_entry_aborts_gather() {
        let temp = TempDir::new().unwrap();
        let fixes = temp.path().join("1 Fixes");
        std::fs::create_dir(&fixes).unwrap();
        std::fs::write(fixes.join("bunk.md"), "Hello, world!").unwrap();

        assert!(gather(temp.path()).is_err());
    }
}
