use crate::domain::BumpCategory;
use crate::error::{AutoversionError, Result};
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// Order in which a single message is tested against the categories.
///
/// Only observable when a leading character belongs to several classes
/// (the U+FE0F variation selector is in both the minor and patch sets).
pub const PRECEDENCE: [BumpCategory; 3] =
    [BumpCategory::Major, BumpCategory::Minor, BumpCategory::Patch];

pub const MAJOR_GLYPHS: &[&str] = &["💥"];
pub const MINOR_GLYPHS: &[&str] = &["✨", "🏗️", "♻️", "⚡️", "👽️"];
pub const PATCH_GLYPHS: &[&str] = &[
    "🚑️", "🔒️", "🐛", "🥅", "🔐", "📌", "🔧", "🌐", "💬", "📝", "🔖",
];

static GITMOJI: LazyLock<EmojiTaxonomy> = LazyLock::new(|| {
    let entries = PRECEDENCE
        .iter()
        .zip([MAJOR_GLYPHS, MINOR_GLYPHS, PATCH_GLYPHS])
        .map(|(category, glyphs)| (*category, glyphs.iter().map(|g| g.to_string()).collect()))
        .collect();
    EmojiTaxonomy::new(entries).expect("gitmoji table is valid")
});

/// Marker glyphs for one bump category, matched as a character class
#[derive(Debug, Clone)]
struct MarkerClass {
    category: BumpCategory,
    glyphs: Vec<String>,
    /// `^[...]+` over every code point of the glyphs; `None` for an empty class
    pattern: Option<Regex>,
}

impl MarkerClass {
    fn new(category: BumpCategory, glyphs: Vec<String>) -> Result<Self> {
        let chars: BTreeSet<char> = glyphs.iter().flat_map(|g| g.chars()).collect();
        let pattern = if chars.is_empty() {
            None
        } else {
            let class: String = chars
                .iter()
                .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
                .collect();
            let pattern = Regex::new(&format!("^[{}]+", class)).map_err(|e| {
                AutoversionError::config(format!(
                    "invalid marker glyphs for '{}': {}",
                    category, e
                ))
            })?;
            Some(pattern)
        };

        Ok(MarkerClass {
            category,
            glyphs,
            pattern,
        })
    }

    fn matches(&self, message: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(message))
    }
}

/// Table mapping bump categories to the emoji that mark them at the start of a
/// commit message.
///
/// A message belongs to a category when it begins with one or more characters
/// drawn from that category's glyphs, so chained markers like "🐛🔧 fix" match.
#[derive(Debug, Clone)]
pub struct EmojiTaxonomy {
    classes: Vec<MarkerClass>,
}

impl EmojiTaxonomy {
    /// Build a taxonomy from per-category glyph lists.
    ///
    /// # Returns
    /// * `Err(Config)` - a glyph is empty, listed under `none`, or repeated across categories
    pub fn new(entries: Vec<(BumpCategory, Vec<String>)>) -> Result<Self> {
        let mut owners: HashMap<&str, BumpCategory> = HashMap::new();
        for (category, glyphs) in &entries {
            if *category == BumpCategory::None && !glyphs.is_empty() {
                return Err(AutoversionError::config(
                    "marker glyphs cannot be assigned to the 'none' category",
                ));
            }
            for glyph in glyphs {
                if glyph.is_empty() {
                    return Err(AutoversionError::config(format!(
                        "empty marker glyph in '{}' category",
                        category
                    )));
                }
                if let Some(owner) = owners.insert(glyph.as_str(), *category) {
                    if owner != *category {
                        return Err(AutoversionError::config(format!(
                            "glyph '{}' is listed under both '{}' and '{}'",
                            glyph, owner, category
                        )));
                    }
                }
            }
        }

        let mut by_category: HashMap<BumpCategory, Vec<String>> = HashMap::new();
        for (category, glyphs) in entries {
            by_category.entry(category).or_default().extend(glyphs);
        }

        let classes = PRECEDENCE
            .iter()
            .map(|category| {
                let glyphs = by_category.remove(category).unwrap_or_default();
                MarkerClass::new(*category, glyphs)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(EmojiTaxonomy { classes })
    }

    /// The gitmoji-based default table
    pub fn gitmoji() -> Self {
        GITMOJI.clone()
    }

    /// Whether `message` starts with a marker of `category`
    pub fn matches(&self, category: BumpCategory, message: &str) -> bool {
        self.classes
            .iter()
            .find(|class| class.category == category)
            .is_some_and(|class| class.matches(message))
    }

    /// First category, in precedence order, whose markers prefix `message`
    pub fn match_prefix(&self, message: &str) -> Option<BumpCategory> {
        self.classes
            .iter()
            .find(|class| class.matches(message))
            .map(|class| class.category)
    }

    pub fn glyphs(&self, category: BumpCategory) -> &[String] {
        self.classes
            .iter()
            .find(|class| class.category == category)
            .map(|class| class.glyphs.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for EmojiTaxonomy {
    fn default() -> Self {
        Self::gitmoji()
    }
}
