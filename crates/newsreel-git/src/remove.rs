//! Tracked-file removal, the equivalent of `git rm`

use std::path::Path;

use tracing::{info, instrument};

use newsreel_core::error::{FragmentError, GitError};
use newsreel_fragments::FragmentRemover;

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Remove a tracked file from the index and the working tree.
    ///
    /// `path` may be absolute or relative to the current directory; it
    /// must resolve inside the repository working tree.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn rm(&self, path: &Path) -> Result<()> {
        let workdir = self.repo.workdir().ok_or(GitError::NoWorkingTree)?;
        let workdir = std::fs::canonicalize(workdir).map_err(|e| GitError::RemoveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let absolute = std::fs::canonicalize(path).map_err(|e| GitError::RemoveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let relative = absolute
            .strip_prefix(&workdir)
            .map_err(|_| GitError::OutsideWorkTree(path.to_path_buf()))?;

        let mut index = self.repo.index()?;
        index.remove_path(relative)?;
        index.write()?;

        std::fs::remove_file(&absolute).map_err(|e| GitError::RemoveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        info!(path = %relative.display(), "removed file from version control");
        Ok(())
    }
}

impl FragmentRemover for GitRepo {
    fn remove(&mut self, path: &Path) -> std::result::Result<(), FragmentError> {
        self.rm(path).map_err(|e| FragmentError::RemoveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use tempfile::TempDir;

    fn setup_repo_with_fragment() -> (TempDir, GitRepo, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();

        let fragment_dir = temp.path().join("news").join("1 Fixes");
        std::fs::create_dir_all(&fragment_dir).unwrap();
        let fragment = fragment_dir.join("42.md");
        std::fs::write(&fragment, "Fixed the thing").unwrap();

        let sig = Signature::now("Test", "test@example.com").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("news/1 Fixes/42.md")).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "Add fragment", &tree, &[])
            .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        (temp, git_repo, fragment)
    }

    #[test]
    fn test_rm_deletes_file_and_index_entry() {
        let (_temp, repo, fragment) = setup_repo_with_fragment();

        repo.rm(&fragment).unwrap();

        assert!(!fragment.exists());
        let index = repo.repo.index().unwrap();
        assert!(index.get_path(Path::new("news/1 Fixes/42.md"), 0).is_none());
    }

    #[test]
    fn test_rm_outside_worktree() {
        let (_temp, repo, _fragment) = setup_repo_with_fragment();

        let elsewhere = TempDir::new().unwrap();
        let stray = elsewhere.path().join("1.md");
        std::fs::write(&stray, "stray").unwrap();

        let err = repo.rm(&stray).unwrap_err();
        assert!(matches!(err, GitError::OutsideWorkTree(_)));
        assert!(stray.exists());
    }

    #[test]
    fn test_remover_trait_maps_errors() {
        let (_temp, mut repo, fragment) = setup_repo_with_fragment();

        FragmentRemover::remove(&mut repo, &fragment).unwrap();
        assert!(!fragment.exists());

        // Second removal fails: the file is gone.
        let err = FragmentRemover::remove(&mut repo, &fragment).unwrap_err();
        assert!(matches!(err, FragmentError::RemoveFailed { .. }));
    }
}
