//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Top-level Newsreel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub project the issue links point to
    pub github: GithubConfig,

    /// Changelog file configuration
    pub changelog: ChangelogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github: GithubConfig::default(),
            changelog: ChangelogConfig::default(),
        }
    }
}

/// GitHub organization and repository used to build issue URLs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Organization name (e.g. "Microsoft")
    pub organization: String,

    /// Repository name (e.g. "vscode-python")
    pub repository: String,
}

impl GithubConfig {
    /// URL of the issue with the given number
    pub fn issue_url(&self, issue_number: u64) -> String {
        format!(
            "https://github.com/{}/{}/issues/{}",
            self.organization, self.repository, issue_number
        )
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            organization: defaults::DEFAULT_ORGANIZATION.to_string(),
            repository: defaults::DEFAULT_REPOSITORY.to_string(),
        }
    }
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file to update (relative to the working directory)
    pub file: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(defaults::DEFAULT_CHANGELOG_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.organization, "Microsoft");
        assert_eq!(config.github.repository, "vscode-python");
        assert_eq!(config.changelog.file, PathBuf::from("CHANGELOG.md"));
    }

    #[test]
    fn test_issue_url() {
        let github = GithubConfig::default();
        assert_eq!(
            github.issue_url(42),
            "https://github.com/Microsoft/vscode-python/issues/42"
        );
    }
}
