//! Formatting functions for user-facing output.
//!
//! Everything here writes to stderr: stdout is reserved for the machine-readable
//! result (a bump category or a version) so the CLI can be used in scripts.

use crate::analyzer::BumpClassifier;
use crate::boundary::{Boundary, BoundaryWarning};
use crate::domain::{BumpCategory, CommitRecord, Version};
use console::style;
use std::path::Path;

/// Commits shown before the list is summarised
const MAX_LISTED_COMMITS: usize = 10;

/// Characters of a commit message shown per line
const MAX_MESSAGE_CHARS: usize = 60;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning with a yellow warning icon.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Truncate a message to at most `MAX_MESSAGE_CHARS` characters.
pub fn shorten_message(message: &str) -> String {
    if message.chars().count() > MAX_MESSAGE_CHARS {
        let short: String = message.chars().take(MAX_MESSAGE_CHARS).collect();
        format!("{}…", short)
    } else {
        message.to_string()
    }
}

/// One numbered line of the commit analysis, e.g. `  1. [minor] a1b2c3d ✨ add feature`
pub fn format_commit_line(
    index: usize,
    commit: &CommitRecord,
    category: Option<BumpCategory>,
) -> String {
    let label = match category {
        Some(category) => category.as_str(),
        None => "-",
    };
    format!(
        "  {}. [{}] {} {}",
        index + 1,
        label,
        commit.revision,
        shorten_message(&commit.message)
    )
}

/// Display the commits in range with the category each one was attributed to.
///
/// Shows up to 10 commits; the remainder is summarised as a count.
pub fn display_commit_analysis(
    commits: &[CommitRecord],
    classifier: &BumpClassifier,
    src: &Path,
    boundary: &Boundary,
) {
    let since = match boundary {
        Boundary::None => "the beginning of history".to_string(),
        Boundary::Tag(tag) => format!("tag '{}'", tag),
    };
    eprintln!(
        "\n{}",
        style(format!(
            "Analyzing commits on '{}' since {}",
            src.display(),
            since
        ))
        .bold()
    );
    eprintln!(
        "{}",
        style(format!("{} commit(s):", commits.len())).underlined()
    );

    for (i, commit) in commits.iter().take(MAX_LISTED_COMMITS).enumerate() {
        eprintln!(
            "{}",
            format_commit_line(i, commit, classifier.categorize(&commit.message))
        );
    }

    if commits.len() > MAX_LISTED_COMMITS {
        eprintln!(
            "  ... and {} more commits",
            commits.len() - MAX_LISTED_COMMITS
        );
    }
}

/// Display the version transition, e.g. `Bumping from 0.4.2 ➡️ 0.5.2 (minor)`
pub fn display_bump_transition(current: &Version, next: &Version, bump: BumpCategory) {
    eprintln!(
        "{} Bumping from {} ➡️  {} ({})",
        style("→").yellow(),
        style(current).red(),
        style(next).green(),
        bump
    );
}
