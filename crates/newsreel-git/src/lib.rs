//! Newsreel Git - git operations for the newsreel changelog tool
//!
//! This crate wraps the repository handle and provides the version-control
//! removal primitive the fragment cleanup drives.

mod remove;
mod repository;

pub use repository::{GitRepo, Result};
