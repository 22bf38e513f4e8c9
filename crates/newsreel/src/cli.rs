//! CLI definition and command handling

use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{ArgGroup, Parser};
use console::style;
use tracing::info;

use newsreel_core::config::load_config_or_default;
use newsreel_fragments::{changelog_markdown, cleanup, compose_changelog, gather};
use newsreel_git::GitRepo;

use crate::output;

/// Newsreel - gather news fragments into a Markdown changelog
#[derive(Debug, Parser)]
#[command(name = "newsreel")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").args(["dry_run", "interim", "finalize"])))]
pub struct Cli {
    /// Directory holding the news fragments
    pub directory: PathBuf,

    /// Preview the rendered news without writing anything (default)
    #[arg(long)]
    pub dry_run: bool,

    /// Compose and write the changelog, keeping the fragments
    #[arg(long)]
    pub interim: bool,

    /// Compose and write the changelog, then remove the consumed
    /// fragments from version control
    #[arg(long = "final")]
    pub finalize: bool,

    /// Changelog file to update (defaults to the configured file)
    #[arg(long, value_name = "FILE")]
    pub update: Option<PathBuf>,

    /// Version label for the new changelog heading
    #[arg(long = "for-version", value_name = "VERSION")]
    pub for_version: Option<String>,

    /// Output format for previews
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        info!(directory = %self.directory.display(), dry_run = self.dry_run, interim = self.interim, finalize = self.finalize, "gathering news fragments");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let gathered = gather(&self.directory)?;
        let news = changelog_markdown(&gathered, &config.github);

        if !(self.interim || self.finalize) {
            match self.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&gathered)?),
                OutputFormat::Text => println!("{}", news),
            }
            return Ok(());
        }

        let version = self
            .for_version
            .clone()
            .unwrap_or_else(|| "Unreleased".to_string());
        let changelog_path = self
            .update
            .clone()
            .unwrap_or_else(|| cwd.join(&config.changelog.file));

        let existing = std::fs::read_to_string(&changelog_path)
            .with_context(|| format!("reading changelog {}", changelog_path.display()))?;
        let today = Local::now().date_naive();
        let updated = compose_changelog(&version, &news, &existing, today)?;
        std::fs::write(&changelog_path, updated)
            .with_context(|| format!("writing changelog {}", changelog_path.display()))?;

        if !self.quiet {
            output::success(&format!(
                "Changelog for {} written to {}",
                style(&version).green().bold(),
                style(changelog_path.display()).cyan()
            ));
        }

        if self.finalize {
            let mut repo = GitRepo::discover(&self.directory)?;
            cleanup(&gathered, &mut repo)?;

            if !self.quiet {
                let count: usize = gathered.iter().map(|g| g.entries.len()).sum();
                output::success(&format!("Removed {} consumed fragment(s)", count));
            }
        }

        Ok(())
    }
}
