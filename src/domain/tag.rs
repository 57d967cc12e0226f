use std::cmp::Ordering;

/// Tag naming scheme for a package (e.g., "mypkg-" for tags like "mypkg-1.2.0")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPrefix {
    pub prefix: String,
}

impl TagPrefix {
    /// Create a prefix from a package name, appending the "-" separator
    pub fn for_package(package: &str) -> Self {
        TagPrefix {
            prefix: format!("{}-", package),
        }
    }

    /// Use `prefix` verbatim
    pub fn new(prefix: impl Into<String>) -> Self {
        TagPrefix {
            prefix: prefix.into(),
        }
    }

    /// Glob accepted by `git tag --list` and libgit2's `tag_names`
    pub fn glob(&self) -> String {
        format!("{}*", self.prefix)
    }

    pub fn matches(&self, tag: &str) -> bool {
        tag.starts_with(&self.prefix)
    }

    /// Extract the version part of a tag (e.g., "mypkg-1.2.3" -> "1.2.3")
    pub fn version_part<'a>(&self, tag: &'a str) -> Option<&'a str> {
        tag.strip_prefix(self.prefix.as_str())
    }

    /// Sort tags most recent first, like `git tag --sort=-v:refname`.
    ///
    /// Tags whose version part parses as semver are ordered by that version;
    /// the rest follow in descending name order. Tags outside the prefix are dropped.
    pub fn sort_descending(&self, tags: Vec<String>) -> Vec<String> {
        let mut keyed: Vec<(Option<semver::Version>, String)> = tags
            .into_iter()
            .filter(|tag| self.matches(tag))
            .map(|tag| {
                let version = self
                    .version_part(&tag)
                    .and_then(|v| semver::Version::parse(v).ok());
                (version, tag)
            })
            .collect();

        keyed.sort_by(|(va, ta), (vb, tb)| match (va, vb) {
            (Some(a), Some(b)) => b.cmp(a).then_with(|| tb.cmp(ta)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => tb.cmp(ta),
        });

        keyed.into_iter().map(|(_, tag)| tag).collect()
    }
}
