//! Newsreel Core - errors and configuration for the newsreel changelog tool
//!
//! This crate provides the error types and configuration loading shared by
//! the fragment pipeline, the git layer, and the CLI.

pub mod config;
pub mod error;

pub use config::{load_config_or_default, Config};
pub use error::{FragmentError, NewsreelError, Result};
