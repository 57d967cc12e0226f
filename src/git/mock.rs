use crate::boundary::Boundary;
use crate::domain::{CommitRecord, TagPrefix};
use crate::error::{AutoversionError, Result};
use crate::git::VersionControl;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
struct MockCommit {
    record: CommitRecord,
    paths: Vec<PathBuf>,
}

/// In-memory linear history for testing without a git repository
#[derive(Debug, Default)]
pub struct MockRepository {
    /// Oldest first
    history: Vec<MockCommit>,
    tags: HashMap<String, usize>,
    tag_error: Option<String>,
    log_error: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit touching `paths`; returns its position in history
    pub fn add_commit<P: AsRef<Path>>(&mut self, record: CommitRecord, paths: &[P]) -> usize {
        self.history.push(MockCommit {
            record,
            paths: paths.iter().map(|p| p.as_ref().to_path_buf()).collect(),
        });
        self.history.len() - 1
    }

    /// Add a tag pointing at the commit at `position`
    pub fn add_tag(&mut self, name: impl Into<String>, position: usize) {
        self.tags.insert(name.into(), position);
    }

    /// Make every `list_tags` call fail with `message`
    pub fn fail_tags(&mut self, message: impl Into<String>) {
        self.tag_error = Some(message.into());
    }

    /// Make every `list_commits` call fail with `message`
    pub fn fail_log(&mut self, message: impl Into<String>) {
        self.log_error = Some(message.into());
    }
}

fn touches(commit: &MockCommit, path: &Path) -> bool {
    if path.as_os_str().is_empty() || path == Path::new(".") {
        return true;
    }
    commit.paths.iter().any(|p| p.starts_with(path))
}

impl VersionControl for MockRepository {
    fn list_tags(&self, prefix: &TagPrefix) -> Result<Vec<String>> {
        if let Some(message) = &self.tag_error {
            return Err(AutoversionError::tag_query(message.clone()));
        }
        Ok(prefix.sort_descending(self.tags.keys().cloned().collect()))
    }

    fn list_commits(&self, boundary: &Boundary, path: &Path) -> Result<Vec<CommitRecord>> {
        if let Some(message) = &self.log_error {
            return Err(AutoversionError::log_query(message.clone()));
        }

        let start = match boundary {
            Boundary::None => 0,
            Boundary::Tag(tag) => {
                let position = self.tags.get(tag).ok_or_else(|| {
                    AutoversionError::log_query(format!("unknown revision '{}'", tag))
                })?;
                position + 1
            }
        };

        Ok(self
            .history
            .iter()
            .skip(start)
            .rev()
            .filter(|commit| touches(commit, path))
            .map(|commit| commit.record.clone())
            .collect())
    }
}
