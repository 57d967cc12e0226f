pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod package;
pub mod ui;

pub use analyzer::{classify, BumpClassifier};
pub use boundary::{resolve_boundary, Boundary};
pub use domain::{apply_bump, format_version, parse_version, BumpCategory, CommitRecord, Version};
pub use error::{AutoversionError, Result};
