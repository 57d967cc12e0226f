use std::fmt;

/// Point in history that delimits the commits considered "new since last release"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Boundary {
    /// No prior release tag: the whole history is in scope
    None,
    /// Only commits after this tag are in scope
    Tag(String),
}

impl Boundary {
    pub fn tag(&self) -> Option<&str> {
        match self {
            Boundary::None => None,
            Boundary::Tag(tag) => Some(tag),
        }
    }

    /// Revision range for `git log` ("tag..HEAD"), or `None` for the whole history
    pub fn revision_range(&self) -> Option<String> {
        self.tag().map(|tag| format!("{}..HEAD", tag))
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::None => f.write_str("none"),
            Boundary::Tag(tag) => f.write_str(tag),
        }
    }
}

/// Pick the boundary from tags already sorted most recent first.
///
/// No sorting happens here; the tag lister is responsible for ordering.
pub fn resolve_boundary(available_tags: &[String]) -> Boundary {
    match available_tags.first() {
        Some(tag) => Boundary::Tag(tag.clone()),
        None => Boundary::None,
    }
}

/// Non-fatal conditions reported to the user while resolving a version.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No commits touched the package since the boundary
    NoNewCommits { boundary: Boundary },
    /// Commits exist but none carries a marker; strict mode is off so patch is assumed
    NoRecognizedMarker { commit_count: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits { boundary } => match boundary {
                Boundary::None => write!(f, "No commits found for the package, not bumping"),
                Boundary::Tag(tag) => {
                    write!(f, "No new commits since tag '{}', not bumping", tag)
                }
            },
            BoundaryWarning::NoRecognizedMarker { commit_count } => {
                write!(
                    f,
                    "None of the {} commit(s) carries a recognized emoji, defaulting to patch",
                    commit_count
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_boundary_takes_first() {
        let tags = vec!["pkg-2.1.0".to_string(), "pkg-1.9.0".to_string()];
        assert_eq!(resolve_boundary(&tags), Boundary::Tag("pkg-2.1.0".to_string()));
    }

    #[test]
    fn test_resolve_boundary_empty() {
        assert_eq!(resolve_boundary(&[]), Boundary::None);
    }

    #[test]
    fn test_revision_range() {
        assert_eq!(Boundary::None.revision_range(), None);
        assert_eq!(
            Boundary::Tag("pkg-1.0.0".to_string()).revision_range(),
            Some("pkg-1.0.0..HEAD".to_string())
        );
    }

    #[test]
    fn test_boundary_display() {
        assert_eq!(Boundary::None.to_string(), "none");
        assert_eq!(Boundary::Tag("pkg-1.0.0".into()).to_string(), "pkg-1.0.0");
    }
}
