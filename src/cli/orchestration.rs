//! Main workflow orchestration logic
//!
//! Wires the pieces together independently of clap: tag listing, boundary
//! resolution, log retrieval, classification and version resolution. Every
//! step that touches git goes through [VersionControl], so the whole workflow
//! runs against [crate::git::MockRepository] in tests.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::analyzer::BumpClassifier;
use crate::boundary::{resolve_boundary, Boundary, BoundaryWarning};
use crate::domain::{BumpCategory, CommitRecord, TagPrefix, Version};
use crate::error::{AutoversionError, Result};
use crate::git::VersionControl;

/// Arguments for the bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct AutoversionArgs {
    /// Package source directory; also the path filter for the log
    pub src: PathBuf,

    /// Tag prefix override; defaults to "<package name>-"
    pub tag_prefix: Option<String>,

    /// Fail when no commit in a non-empty range carries a marker
    pub strict: bool,
}

impl AutoversionArgs {
    pub fn new(src: impl Into<PathBuf>) -> Self {
        AutoversionArgs {
            src: src.into(),
            tag_prefix: None,
            strict: true,
        }
    }

    fn prefix(&self) -> Result<TagPrefix> {
        match &self.tag_prefix {
            Some(prefix) => Ok(TagPrefix::new(prefix.clone())),
            None => tag_prefix_for(&self.src),
        }
    }
}

/// Result of classifying the commits since the last release
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub boundary: Boundary,
    pub commits: Vec<CommitRecord>,
    pub bump: BumpCategory,
    pub warnings: Vec<BoundaryWarning>,
}

/// Result of resolving the next version
#[derive(Debug, Clone, PartialEq)]
pub struct NextVersionOutcome {
    pub analysis: BumpOutcome,
    pub current: Version,
    pub next: Version,
}

/// Tag prefix for the package at `src`: its directory name followed by "-".
pub fn tag_prefix_for(src: &Path) -> Result<TagPrefix> {
    let name = match src.file_name() {
        Some(name) => name.to_os_string(),
        None => src
            .canonicalize()?
            .file_name()
            .map(|name| name.to_os_string())
            .ok_or_else(|| {
                AutoversionError::package(format!(
                    "cannot derive a package name from '{}'",
                    src.display()
                ))
            })?,
    };

    let name = name.to_str().ok_or_else(|| {
        AutoversionError::package(format!("package name of '{}' is not UTF-8", src.display()))
    })?;

    Ok(TagPrefix::for_package(name))
}

/// Classify the package's commits since its most recent release tag.
///
/// # Returns
/// * `Ok(BumpOutcome)` - boundary used, commits in range, resulting bump and warnings
/// * `Err(TagQuery | LogQuery)` - the VCS could not be queried
/// * `Err(Classification)` - strict mode and no commit carries a marker
pub fn determine_bump<V: VersionControl + ?Sized>(
    vcs: &V,
    classifier: &BumpClassifier,
    args: &AutoversionArgs,
) -> Result<BumpOutcome> {
    info!(package = %args.src.display(), "getting autoversion for package");

    let prefix = args.prefix()?;
    let tags = vcs.list_tags(&prefix)?;
    let boundary = resolve_boundary(&tags);
    info!(boundary = %boundary, tags = tags.len(), "resolved boundary");

    let commits = vcs.list_commits(&boundary, &args.src)?;
    let bump = classifier.classify(&commits, args.strict)?;
    info!(bump = %bump, commits = commits.len(), "found version bump");

    let mut warnings = Vec::new();
    if commits.is_empty() {
        warnings.push(BoundaryWarning::NoNewCommits {
            boundary: boundary.clone(),
        });
    } else if commits
        .iter()
        .all(|commit| classifier.categorize(&commit.message).is_none())
    {
        warnings.push(BoundaryWarning::NoRecognizedMarker {
            commit_count: commits.len(),
        });
    }

    Ok(BumpOutcome {
        boundary,
        commits,
        bump,
        warnings,
    })
}

/// Classify the package's commits and apply the resulting bump to `current`.
pub fn determine_next_version<V: VersionControl + ?Sized>(
    vcs: &V,
    classifier: &BumpClassifier,
    args: &AutoversionArgs,
    current: Version,
) -> Result<NextVersionOutcome> {
    let analysis = determine_bump(vcs, classifier, args)?;
    let next = current.bump(analysis.bump)?;
    info!(from = %current, to = %next, "bumping version");

    Ok(NextVersionOutcome {
        analysis,
        current,
        next,
    })
}
