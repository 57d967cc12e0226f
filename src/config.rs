use crate::domain::taxonomy::{MAJOR_GLYPHS, MINOR_GLYPHS, PATCH_GLYPHS};
use crate::domain::{BumpCategory, EmojiTaxonomy};
use crate::error::{AutoversionError, Result};
use crate::git::Backend;
use crate::package::DEFAULT_INIT_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "autoversion.toml";

/// Represents the complete configuration for autoversion.
///
/// Contains the marker taxonomy, behavior options and package layout.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,

    #[serde(default)]
    pub package: PackageConfig,
}

fn to_strings(glyphs: &[&str]) -> Vec<String> {
    glyphs.iter().map(|g| g.to_string()).collect()
}

fn default_major_glyphs() -> Vec<String> {
    to_strings(MAJOR_GLYPHS)
}

fn default_minor_glyphs() -> Vec<String> {
    to_strings(MINOR_GLYPHS)
}

fn default_patch_glyphs() -> Vec<String> {
    to_strings(PATCH_GLYPHS)
}

/// Marker glyphs per bump category.
///
/// Each list replaces the gitmoji default for its category when present.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TaxonomyConfig {
    #[serde(default = "default_major_glyphs")]
    pub major: Vec<String>,

    #[serde(default = "default_minor_glyphs")]
    pub minor: Vec<String>,

    #[serde(default = "default_patch_glyphs")]
    pub patch: Vec<String>,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        TaxonomyConfig {
            major: default_major_glyphs(),
            minor: default_minor_glyphs(),
            patch: default_patch_glyphs(),
        }
    }
}

impl TaxonomyConfig {
    /// Build the taxonomy, rejecting glyphs listed under more than one category
    pub fn to_taxonomy(&self) -> Result<EmojiTaxonomy> {
        EmojiTaxonomy::new(vec![
            (BumpCategory::Major, self.major.clone()),
            (BumpCategory::Minor, self.minor.clone()),
            (BumpCategory::Patch, self.patch.clone()),
        ])
    }
}

fn default_strict() -> bool {
    true
}

/// Runtime behavior that does not change how commits are matched
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Fail when no commit in a non-empty range carries a marker
    #[serde(default = "default_strict")]
    pub strict: bool,

    #[serde(default)]
    pub backend: Backend,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            strict: default_strict(),
            backend: Backend::default(),
        }
    }
}

fn default_init_file() -> String {
    DEFAULT_INIT_FILE.to_string()
}

/// Where the version declaration lives inside a package
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PackageConfig {
    #[serde(default = "default_init_file")]
    pub init_file: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        PackageConfig {
            init_file: default_init_file(),
        }
    }
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| AutoversionError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `autoversion.toml` in current directory
/// 3. `.autoversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(Config)` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let read = |path: &Path| {
        fs::read_to_string(path).map_err(|e| {
            AutoversionError::config(format!("cannot read {}: {}", path.display(), e))
        })
    };

    let local = Path::new(CONFIG_FILE_NAME);
    let config_str = if let Some(path) = config_path {
        read(Path::new(path))?
    } else if local.exists() {
        read(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            read(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
