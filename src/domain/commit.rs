/// A single log entry reduced to the text the classifier looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub revision: String,
    pub message: String,
}

impl CommitRecord {
    pub fn new(revision: impl Into<String>, message: impl Into<String>) -> Self {
        CommitRecord {
            revision: revision.into(),
            message: message.into(),
        }
    }

    /// Parse a `git log --oneline` line ("revision-id commit-message").
    ///
    /// Everything after the first space is the message; a line without a
    /// space yields an empty message, which no taxonomy category matches.
    pub fn from_oneline(line: &str) -> Self {
        match line.split_once(' ') {
            Some((revision, message)) => CommitRecord::new(revision, message),
            None => CommitRecord::new(line, ""),
        }
    }

    /// Parse every non-empty line of `git log --oneline` output
    pub fn parse_log(output: &str) -> Vec<Self> {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(CommitRecord::from_oneline)
            .collect()
    }
}
