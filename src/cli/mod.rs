//! CLI-facing workflow, decoupled from argument parsing

pub mod orchestration;

pub use orchestration::{
    determine_bump, determine_next_version, tag_prefix_for, AutoversionArgs, BumpOutcome,
    NextVersionOutcome,
};
