use crate::boundary::Boundary;
use crate::domain::{CommitRecord, TagPrefix};
use crate::error::{AutoversionError, Result};
use crate::git::VersionControl;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// [VersionControl] that runs the `git` executable
pub struct GitCommand {
    workdir: PathBuf,
}

impl GitCommand {
    /// Run git commands from `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        GitCommand {
            workdir: workdir.into(),
        }
    }

    /// Arguments of the tag listing query
    pub fn tag_args(prefix: &TagPrefix) -> Vec<String> {
        vec![
            "tag".to_string(),
            "--list".to_string(),
            prefix.glob(),
            "--sort=-v:refname".to_string(),
        ]
    }

    /// Arguments of the log query
    pub fn log_args(boundary: &Boundary, path: &Path) -> Vec<String> {
        let mut args = vec!["log".to_string()];
        if let Some(range) = boundary.revision_range() {
            args.push(range);
        }
        args.push("--oneline".to_string());
        args.push("--".to_string());
        args.push(path.display().to_string());
        args
    }

    fn run(&self, args: &[String]) -> std::io::Result<Output> {
        debug!(workdir = %self.workdir.display(), command = %args.join(" "), "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
    }
}

fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!(
        "git exited with code {}: {}",
        output.status.code().unwrap_or(-1),
        stderr.trim()
    )
}

impl VersionControl for GitCommand {
    fn list_tags(&self, prefix: &TagPrefix) -> Result<Vec<String>> {
        let output = self
            .run(&Self::tag_args(prefix))
            .map_err(|e| AutoversionError::tag_query(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            return Err(AutoversionError::tag_query(failure_message(&output)));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .trim()
            .lines()
            .map(str::to_string)
            .collect())
    }

    fn list_commits(&self, boundary: &Boundary, path: &Path) -> Result<Vec<CommitRecord>> {
        let output = self
            .run(&Self::log_args(boundary, path))
            .map_err(|e| AutoversionError::log_query(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            return Err(AutoversionError::log_query(failure_message(&output)));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(CommitRecord::parse_log(&stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_args() {
        let args = GitCommand::tag_args(&TagPrefix::for_package("pkg"));
        assert_eq!(args, vec!["tag", "--list", "pkg-*", "--sort=-v:refname"]);
    }

    #[test]
    fn test_log_args_without_boundary() {
        let args = GitCommand::log_args(&Boundary::None, Path::new("pkg"));
        assert_eq!(args, vec!["log", "--oneline", "--", "pkg"]);
    }

    #[test]
    fn test_log_args_with_boundary() {
        let boundary = Boundary::Tag("pkg-1.2.0".to_string());
        let args = GitCommand::log_args(&boundary, Path::new("pkg"));
        assert_eq!(args, vec!["log", "pkg-1.2.0..HEAD", "--oneline", "--", "pkg"]);
    }

    #[test]
    fn test_missing_workdir_is_tag_query_error() {
        let vcs = GitCommand::new("/nonexistent/path/for/autoversion");
        let err = vcs.list_tags(&TagPrefix::for_package("pkg")).unwrap_err();
        assert!(matches!(err, AutoversionError::TagQuery(_)));
    }

    #[test]
    fn test_missing_workdir_is_log_query_error() {
        let vcs = GitCommand::new("/nonexistent/path/for/autoversion");
        let err = vcs
            .list_commits(&Boundary::None, Path::new("pkg"))
            .unwrap_err();
        assert!(matches!(err, AutoversionError::LogQuery(_)));
    }
}
