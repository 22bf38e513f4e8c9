//! Fragment cleanup
//!
//! Once a release has folded the fragments into the changelog, their
//! source files are removed from version control. The removal primitive
//! is a trait so the pipeline stays free of git machinery.

use std::path::Path;

use tracing::{info, instrument};

use crate::types::GatheredSection;
use crate::Result;

/// Removes one consumed fragment file from version control
pub trait FragmentRemover {
    /// Remove the tracked file at `path`
    fn remove(&mut self, path: &Path) -> Result<()>;
}

/// Remove every gathered entry's source file from version control.
///
/// The remover is invoked exactly once per entry, in traversal order.
/// The first failure propagates immediately; already-removed entries stay
/// removed.
#[instrument(skip(gathered, remover), fields(sections = gathered.len()))]
pub fn cleanup(gathered: &[GatheredSection], remover: &mut dyn FragmentRemover) -> Result<()> {
    let mut removed = 0usize;

    for gs in gathered {
        for entry in &gs.entries {
            if let Some(path) = &entry.path {
                remover.remove(path)?;
                removed += 1;
            }
        }
    }

    info!(removed, "removed consumed news fragments");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gather::gather;
    use crate::types::{NewsEntry, SectionTitle};
    use newsreel_core::error::FragmentError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingRemover {
        removed: Vec<PathBuf>,
    }

    impl FragmentRemover for RecordingRemover {
        fn remove(&mut self, path: &Path) -> Result<()> {
            self.removed.push(path.to_path_buf());
            Ok(())
        }
    }

    struct FailingRemover {
        calls: usize,
    }

    impl FragmentRemover for FailingRemover {
        fn remove(&mut self, path: &Path) -> Result<()> {
            self.calls += 1;
            Err(FragmentError::RemoveFailed {
                path: path.to_path_buf(),
                reason: "nope".to_string(),
            })
        }
    }

    #[test]
    fn test_cleanup_removes_gathered_entry() {
        let temp = TempDir::new().unwrap();
        let fixes = temp.path().join("2 Fixes");
        std::fs::create_dir(&fixes).unwrap();
        std::fs::write(fixes.join("1.md"), "Fix 1").unwrap();

        let gathered = gather(temp.path()).unwrap();
        assert_eq!(gathered.len(), 1);

        let mut remover = RecordingRemover::default();
        cleanup(&gathered, &mut remover).unwrap();

        assert_eq!(remover.removed.len(), 1);
        assert_eq!(
            remover.removed[0],
            gathered[0].entries[0].path.clone().unwrap()
        );
    }

    #[test]
    fn test_cleanup_traversal_order() {
        let first = PathBuf::from("1 A/1.md");
        let second = PathBuf::from("1 A/2.md");
        let third = PathBuf::from("2 B/3.md");
        let gathered = vec![
            GatheredSection {
                section: SectionTitle::new(1, "A", None),
                entries: vec![
                    NewsEntry::new(1, "one", Some(first.clone())),
                    NewsEntry::new(2, "two", Some(second.clone())),
                ],
            },
            GatheredSection {
                section: SectionTitle::new(2, "B", None),
                entries: vec![NewsEntry::new(3, "three", Some(third.clone()))],
            },
        ];

        let mut remover = RecordingRemover::default();
        cleanup(&gathered, &mut remover).unwrap();

        assert_eq!(remover.removed, [first, second, third]);
    }

    #[test]
    fn test_first_failure_stops_cleanup() {
        let gathered = vec![GatheredSection {
            section: SectionTitle::new(1, "A", None),
            entries: vec![
                NewsEntry::new(1, "one", Some(PathBuf::from("1 A/1.md"))),
                NewsEntry::new(2, "two", Some(PathBuf::from("1 A/2.md"))),
            ],
        }];

        let mut remover = FailingRemover { calls: 0 };
        assert!(cleanup(&gathered, &mut remover).is_err());
        assert_eq!(remover.calls, 1);
    }
}
