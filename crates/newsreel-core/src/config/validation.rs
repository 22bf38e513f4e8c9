//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_github(config)?;
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_github(config: &Config) -> Result<()> {
    if config.github.organization.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "github.organization".to_string(),
            message: "organization cannot be empty".to_string(),
        }
        .into());
    }

    if config.github.repository.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "github.repository".to_string(),
            message: "repository cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
