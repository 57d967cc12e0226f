use crate::boundary::Boundary;
use crate::domain::{CommitRecord, TagPrefix};
use crate::error::{AutoversionError, Result};
use crate::git::VersionControl;
use git2::{Commit, DiffOptions, Oid, Repository as Git2Repo, Sort};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Length of the abbreviated revision shown next to each commit
const SHORT_HASH_LEN: usize = 7;

/// libgit2-backed [VersionControl]
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover the git repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref()).map_err(|e| {
            AutoversionError::tag_query(format!(
                "Not in a git repository ({}): {}",
                path.as_ref().display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Turn a path given relative to the working directory into a pathspec
    /// relative to the repository root.
    fn pathspec(&self, path: &Path) -> Result<PathBuf> {
        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| AutoversionError::log_query("bare repositories are not supported"))?;
        let workdir = workdir.canonicalize()?;

        let absolute = path.canonicalize().map_err(|e| {
            AutoversionError::log_query(format!("cannot resolve '{}': {}", path.display(), e))
        })?;

        absolute
            .strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                AutoversionError::log_query(format!(
                    "'{}' is outside repository at '{}'",
                    path.display(),
                    workdir.display()
                ))
            })
    }

    fn tag_commit_oid(&self, tag: &str) -> Result<Oid> {
        let object = self
            .repo
            .revparse_single(&format!("refs/tags/{}", tag))
            .map_err(|e| {
                AutoversionError::log_query(format!("unknown revision '{}': {}", tag, e.message()))
            })?;

        let commit = object.peel_to_commit().map_err(|e| {
            AutoversionError::log_query(format!(
                "tag '{}' does not point to a commit: {}",
                tag,
                e.message()
            ))
        })?;

        Ok(commit.id())
    }

    /// Whether `commit` changed anything under `pathspec`.
    ///
    /// A merge counts only when it differs from every parent, matching the
    /// default history simplification of `git log -- <path>`.
    fn touches(
        &self,
        commit: &Commit<'_>,
        pathspec: &Path,
    ) -> std::result::Result<bool, git2::Error> {
        let tree = commit.tree()?;

        let changed_against = |parent_tree: Option<&git2::Tree<'_>>| {
            let mut opts = DiffOptions::new();
            if !pathspec.as_os_str().is_empty() {
                opts.pathspec(pathspec);
            }
            self.repo
                .diff_tree_to_tree(parent_tree, Some(&tree), Some(&mut opts))
                .map(|diff| diff.deltas().len() > 0)
        };

        if commit.parent_count() == 0 {
            return changed_against(None);
        }

        for parent in commit.parents() {
            let parent_tree = parent.tree()?;
            if !changed_against(Some(&parent_tree))? {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

impl VersionControl for Git2Repository {
    fn list_tags(&self, prefix: &TagPrefix) -> Result<Vec<String>> {
        let glob = prefix.glob();
        debug!(pattern = %glob, "listing tags");

        let tags = self
            .repo
            .tag_names(Some(&glob))
            .map_err(|e| AutoversionError::tag_query(e.message().to_string()))?;

        let names: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();
        Ok(prefix.sort_descending(names))
    }

    fn list_commits(&self, boundary: &Boundary, path: &Path) -> Result<Vec<CommitRecord>> {
        let pathspec = self.pathspec(path)?;
        debug!(boundary = %boundary, pathspec = %pathspec.display(), "walking history");

        let log_err = |e: git2::Error| AutoversionError::log_query(e.message().to_string());

        let mut revwalk = self.repo.revwalk().map_err(log_err)?;
        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
            .map_err(log_err)?;
        revwalk.push_head().map_err(log_err)?;

        if let Some(tag) = boundary.tag() {
            revwalk.hide(self.tag_commit_oid(tag)?).map_err(log_err)?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(log_err)?;
            let commit = self.repo.find_commit(oid).map_err(log_err)?;

            if !self.touches(&commit, &pathspec).map_err(log_err)? {
                continue;
            }

            let hash = oid.to_string();
            commits.push(CommitRecord::new(
                &hash[..SHORT_HASH_LEN],
                commit.summary().unwrap_or_default(),
            ));
        }

        Ok(commits)
    }
}
