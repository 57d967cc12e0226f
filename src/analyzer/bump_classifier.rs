use crate::domain::{BumpCategory, CommitRecord, EmojiTaxonomy};
use crate::error::{AutoversionError, Result};

/// Classifies commit ranges into a bump category using an emoji taxonomy
#[derive(Debug, Clone, Default)]
pub struct BumpClassifier {
    taxonomy: EmojiTaxonomy,
}

impl BumpClassifier {
    /// Create a classifier over the given taxonomy
    pub fn new(taxonomy: EmojiTaxonomy) -> Self {
        BumpClassifier { taxonomy }
    }

    pub fn taxonomy(&self) -> &EmojiTaxonomy {
        &self.taxonomy
    }

    /// Category a single commit message is attributed to, if any
    pub fn categorize(&self, message: &str) -> Option<BumpCategory> {
        self.taxonomy.match_prefix(message)
    }

    /// Reduce a commit range to one bump category.
    ///
    /// The most severe category hit by any commit wins. A non-empty range with
    /// no recognized marker is an error in strict mode and a patch bump
    /// otherwise; an empty range means nothing to release.
    pub fn classify(&self, commits: &[CommitRecord], strict: bool) -> Result<BumpCategory> {
        let mut bump_major = false;
        let mut bump_minor = false;
        let mut bump_patch = false;

        for commit in commits {
            match self.categorize(&commit.message) {
                Some(BumpCategory::Major) => bump_major = true,
                Some(BumpCategory::Minor) => bump_minor = true,
                Some(BumpCategory::Patch) => bump_patch = true,
                Some(BumpCategory::None) | None => {}
            }
        }

        if bump_major {
            Ok(BumpCategory::Major)
        } else if bump_minor {
            Ok(BumpCategory::Minor)
        } else if bump_patch {
            Ok(BumpCategory::Patch)
        } else if commits.is_empty() {
            Ok(BumpCategory::None)
        } else if strict {
            Err(AutoversionError::Classification)
        } else {
            Ok(BumpCategory::Patch)
        }
    }
}

/// Classify with the default gitmoji taxonomy
pub fn classify(commits: &[CommitRecord], strict: bool) -> Result<BumpCategory> {
    BumpClassifier::default().classify(commits, strict)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commits(lines: &[&str]) -> Vec<CommitRecord> {
        lines.iter().map(|l| CommitRecord::from_oneline(l)).collect()
    }

    #[test]
    fn test_classify_major() {
        let range = commits(&["a1 ✨ add feature", "b2 💥 drop old api", "c3 🐛 fix bug"]);
        assert_eq!(classify(&range, true).unwrap(), BumpCategory::Major);
    }

    #[test]
    fn test_major_wins_regardless_of_position() {
        let mut range = commits(&["a1 🐛 fix", "b2 ✨ feature", "c3 📝 docs"]);
        for position in 0..=range.len() {
            let mut with_major = range.clone();
            with_major.insert(position, CommitRecord::new("ff", "💥 breaking"));
            assert_eq!(classify(&with_major, false).unwrap(), BumpCategory::Major);
        }
        range.push(CommitRecord::new("ee", "plain message"));
        assert_eq!(classify(&range, true).unwrap(), BumpCategory::Minor);
    }

    #[test]
    fn test_classify_minor() {
        let range = commits(&["a1 ✨ add feature", "b2 🐛 fix bug"]);
        assert_eq!(classify(&range, true).unwrap(), BumpCategory::Minor);
    }

    #[test]
    fn test_classify_patch() {
        let range = commits(&["a1 🐛 fix bug", "b2 🔖 release", "c3 update deps"]);
        assert_eq!(classify(&range, true).unwrap(), BumpCategory::Patch);
    }

    #[test]
    fn test_classify_empty_is_none_in_both_modes() {
        assert_eq!(classify(&[], true).unwrap(), BumpCategory::None);
        assert_eq!(classify(&[], false).unwrap(), BumpCategory::None);
    }

    #[test]
    fn test_unrecognized_range_strict() {
        let range = commits(&["a1 update readme", "b2 🎨 format"]);
        assert!(matches!(
            classify(&range, true),
            Err(AutoversionError::Classification)
        ));
    }

    #[test]
    fn test_unrecognized_range_lenient_defaults_to_patch() {
        let range = commits(&["a1 update readme", "b2 🎨 format"]);
        assert_eq!(classify(&range, false).unwrap(), BumpCategory::Patch);
    }

    #[test]
    fn test_unmarked_commits_are_ignored() {
        let range = commits(&["a1 wip", "b2 ✨ feature", "c3 merge branch 'main'"]);
        assert_eq!(classify(&range, true).unwrap(), BumpCategory::Minor);
    }

    #[test]
    fn test_categorize() {
        let classifier = BumpClassifier::default();
        assert_eq!(classifier.categorize("♻️ refactor"), Some(BumpCategory::Minor));
        assert_eq!(classifier.categorize("🔒️ patch cve"), Some(BumpCategory::Patch));
        assert_eq!(classifier.categorize("refactor ♻️"), None);
    }

    #[test]
    fn test_custom_taxonomy_classifier() {
        let taxonomy = EmojiTaxonomy::new(vec![(BumpCategory::Minor, vec!["🚀".to_string()])])
            .unwrap();
        let classifier = BumpClassifier::new(taxonomy);

        let range = commits(&["a1 🚀 launch", "b2 💥 not a marker here"]);
        assert_eq!(classifier.classify(&range, true).unwrap(), BumpCategory::Minor);
    }
}
