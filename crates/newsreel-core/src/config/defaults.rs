//! Default configuration values

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "newsreel.toml";

/// Alternative (hidden) configuration file name
pub const ALT_CONFIG_FILE: &str = ".newsreel.toml";

/// Default GitHub organization for issue links
pub const DEFAULT_ORGANIZATION: &str = "Microsoft";

/// Default GitHub repository for issue links
pub const DEFAULT_REPOSITORY: &str = "vscode-python";

/// Default changelog file name
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![DEFAULT_CONFIG_FILE, ALT_CONFIG_FILE]
}
