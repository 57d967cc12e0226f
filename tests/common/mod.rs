#![allow(dead_code)]

use git2::{Commit, Oid, Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Fresh repository in a temporary directory
pub fn init_repo() -> (TempDir, Repository) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let repo = Repository::init(dir.path()).expect("init repository");
    (dir, repo)
}

/// Write `content` to `rel` and commit it on HEAD with `message`
pub fn commit_file(repo: &Repository, rel: &str, content: &str, message: &str) -> Oid {
    let root = repo.workdir().expect("non-bare repository").to_path_buf();
    let file = root.join(rel);
    fs::create_dir_all(file.parent().expect("file has a parent")).unwrap();
    fs::write(&file, content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(rel)).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

    let sig = Signature::now("Test", "test@example.com").unwrap();
    let parents: Vec<Commit<'_>> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => vec![],
    };
    let parent_refs: Vec<&Commit<'_>> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

pub fn tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).unwrap();
    repo.tag_lightweight(name, &object, false).unwrap();
}

/// Repository holding package `pkg` released as pkg-0.4.2, followed by a
/// feature and a fix inside the package and a breaking change outside it.
pub fn released_package_repo() -> (TempDir, Repository) {
    let (dir, repo) = init_repo();
    let release = commit_file(
        &repo,
        "pkg/__init__.py",
        "\"\"\"Sample package.\"\"\"\n\n__version__ = \"0.4.2\"\n",
        "🎉 initial release",
    );
    tag(&repo, "pkg-0.4.2", release);
    commit_file(&repo, "pkg/core.py", "def run():\n    pass\n", "✨ add feature");
    commit_file(&repo, "pkg/core.py", "def run():\n    return 1\n", "🐛 fix bug");
    commit_file(&repo, "tools/build.sh", "echo build\n", "💥 rework build tooling");
    (dir, repo)
}

pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
