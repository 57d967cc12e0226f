//! Version-control queries behind a narrow interface
//!
//! The classification and resolution core never talks to git directly. It
//! asks a [VersionControl] implementation for two things: the package's
//! release tags and the commits since a boundary. Implementations:
//!
//! - [repository::Git2Repository]: libgit2 via the `git2` crate (default)
//! - [command::GitCommand]: shells out to the `git` binary
//! - [mock::MockRepository]: in-memory fixtures for tests
//!
//! ```rust
//! # use autoversion::git::VersionControl;
//! # use autoversion::boundary::resolve_boundary;
//! # use autoversion::domain::TagPrefix;
//! # use std::path::Path;
//! # fn example<V: VersionControl>(vcs: &V) -> autoversion::Result<()> {
//! let tags = vcs.list_tags(&TagPrefix::for_package("mypkg"))?;
//! let commits = vcs.list_commits(&resolve_boundary(&tags), Path::new("mypkg"))?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::GitCommand;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::boundary::Boundary;
use crate::domain::{CommitRecord, TagPrefix};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Source of release tags and commit history
pub trait VersionControl {
    /// List tags starting with `prefix`, most recent version first.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names sorted by descending version
    /// * `Err(TagQuery)` - If the tags cannot be listed
    fn list_tags(&self, prefix: &TagPrefix) -> Result<Vec<String>>;

    /// List commits after `boundary` (exclusive) up to HEAD that touch `path`.
    ///
    /// # Returns
    /// * `Ok(Vec<CommitRecord>)` - Commits newest first
    /// * `Err(LogQuery)` - If the history cannot be read
    fn list_commits(&self, boundary: &Boundary, path: &Path) -> Result<Vec<CommitRecord>>;
}

/// Which [VersionControl] implementation the CLI uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// libgit2, no git binary needed
    #[default]
    Git2,
    /// The `git` executable on PATH
    GitCli,
}

/// Open the selected backend rooted at `path`
pub fn open_backend(backend: Backend, path: &Path) -> Result<Box<dyn VersionControl>> {
    match backend {
        Backend::Git2 => Ok(Box::new(Git2Repository::open(path)?)),
        Backend::GitCli => Ok(Box::new(GitCommand::new(path))),
    }
}

impl<V: VersionControl + ?Sized> VersionControl for Box<V> {
    fn list_tags(&self, prefix: &TagPrefix) -> Result<Vec<String>> {
        (**self).list_tags(prefix)
    }

    fn list_commits(&self, boundary: &Boundary, path: &Path) -> Result<Vec<CommitRecord>> {
        (**self).list_commits(boundary, path)
    }
}
