//! User interface module - status output for the CLI.
//!
//! - `formatter` - Styled messages, commit analysis and version transitions
//! - `logging` - Diagnostic `tracing` output controlled by `-v` / `RUST_LOG`

pub mod formatter;
pub mod logging;

pub use formatter::{
    display_boundary_warning, display_bump_transition, display_commit_analysis, display_error,
    display_status, display_success,
};
