//! Newsreel Fragments - news-fragment gathering and changelog rendering
//!
//! This crate implements the whole fragment pipeline: parsing entry files,
//! collecting them per directory, discovering titled sections, gathering
//! everything into one ordered structure, rendering Markdown, splicing the
//! result into an existing changelog, and cleaning up consumed fragments.

pub mod cleanup;
pub mod collect;
pub mod compose;
pub mod entry;
pub mod gather;
pub mod render;
pub mod sections;
pub mod types;

pub use cleanup::{cleanup, FragmentRemover};
pub use collect::collect_entries;
pub use compose::compose_changelog;
pub use entry::parse_entry;
pub use gather::gather;
pub use render::{changelog_markdown, entry_markdown};
pub use sections::discover_sections;
pub use types::{GatheredSection, NewsEntry, SectionTitle};

/// Result type for fragment operations
pub type Result<T> = std::result::Result<T, newsreel_core::error::FragmentError>;
