//! Reading and writing the `__version__` declaration of a Python package.

use crate::domain::Version;
use crate::error::{AutoversionError, Result};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::info;

pub const DEFAULT_INIT_FILE: &str = "__init__.py";

const DECLARATION_PATTERN: &str = r#"__version__\s*=\s*["']([^"']+)["']"#;

static DECLARATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DECLARATION_PATTERN).expect("declaration pattern is valid"));

/// Version string of the first `__version__ = "..."` assignment in `content`
pub fn find_version_declaration(content: &str) -> Option<String> {
    DECLARATION_RE
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Replace every `__version__` assignment with `__version__ = "<version>"`.
///
/// Returns `None` when `content` holds no declaration.
pub fn replace_version_declaration(content: &str, version: &str) -> Option<String> {
    if !DECLARATION_RE.is_match(content) {
        return None;
    }

    let replacement = format!("__version__ = \"{}\"", version);
    Some(
        DECLARATION_RE
            .replace_all(content, NoExpand(&replacement))
            .into_owned(),
    )
}

/// A Python package directory whose initialisation file declares its version
#[derive(Debug, Clone)]
pub struct PythonPackage {
    root: PathBuf,
    init_file: PathBuf,
}

impl PythonPackage {
    /// Open the package at `src`.
    ///
    /// # Returns
    /// * `Ok(PythonPackage)` - `src` is a directory containing `init_file_name`
    /// * `Err(Package)` - `src` is not a directory or the init file is missing
    pub fn open(src: impl AsRef<Path>, init_file_name: &str) -> Result<Self> {
        let root = src.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(AutoversionError::package(format!(
                "{} is not a valid directory.",
                root.display()
            )));
        }

        let init_file = root.join(init_file_name);
        if !init_file.is_file() {
            return Err(AutoversionError::package(format!(
                "{} is not a python package, missing `{}`.",
                root.display(),
                init_file_name
            )));
        }

        Ok(PythonPackage { root, init_file })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn init_file(&self) -> &Path {
        &self.init_file
    }

    /// Read and parse the declared version
    pub fn read_version(&self) -> Result<Version> {
        let content = fs::read_to_string(&self.init_file)?;
        let declared = find_version_declaration(&content)
            .ok_or_else(|| AutoversionError::missing_declaration(&self.init_file))?;
        Version::parse(&declared)
    }

    /// Rewrite the declaration in place, keeping the rest of the file intact.
    ///
    /// The file is left untouched when it has no declaration.
    pub fn write_version(&self, version: &Version) -> Result<()> {
        let content = fs::read_to_string(&self.init_file)?;
        let updated = replace_version_declaration(&content, &version.to_string())
            .ok_or_else(|| AutoversionError::missing_declaration(&self.init_file))?;

        fs::write(&self.init_file, updated)?;
        info!(file = %self.init_file.display(), version = %version, "updated version declaration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn package_with(content: &str) -> (TempDir, PythonPackage) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_INIT_FILE), content).unwrap();
        let package = PythonPackage::open(dir.path(), DEFAULT_INIT_FILE).unwrap();
        (dir, package)
    }

    #[test]
    fn test_find_declaration_quotes_and_spacing() {
        assert_eq!(
            find_version_declaration("__version__ = \"1.2.3\""),
            Some("1.2.3".to_string())
        );
        assert_eq!(
            find_version_declaration("__version__='0.0.1'"),
            Some("0.0.1".to_string())
        );
        assert_eq!(find_version_declaration("VERSION = '1.0.0'"), None);
    }

    #[test]
    fn test_replace_declaration_reuses_compiled_pattern() {
        let content = "__version__ = '0.1.0'\n__version__ =\"0.1.0\"\n";
        for _ in 0..3 {
            assert_eq!(
                replace_version_declaration(content, "0.2.0").as_deref(),
                Some("__version__ = \"0.2.0\"\n__version__ = \"0.2.0\"\n")
            );
        }
        assert_eq!(replace_version_declaration("import os\n", "0.2.0"), None);
        assert_eq!(DECLARATION_RE.as_str(), DECLARATION_PATTERN);
    }

    #[test]
    fn test_read_version() {
        let (_dir, package) = package_with("\"\"\"Docs.\"\"\"\n\n__version__ = \"0.4.2\"\n");
        assert_eq!(package.read_version().unwrap(), Version::new(0, 4, 2));
    }

    #[test]
    fn test_read_version_missing_declaration() {
        let (_dir, package) = package_with("import os\n");
        let err = package.read_version().unwrap_err();
        assert!(matches!(err, AutoversionError::MissingDeclaration { .. }));
    }

    #[test]
    fn test_read_version_bad_format() {
        let (_dir, package) = package_with("__version__ = \"1.2\"\n");
        let err = package.read_version().unwrap_err();
        assert!(matches!(err, AutoversionError::Format(_)));
    }

    #[test]
    fn test_write_version_preserves_surroundings() {
        let original = "# header\nimport sys\n\n__version__ = '0.4.2'  # managed\n\ndef main():\n    pass\n";
        let (dir, package) = package_with(original);

        package.write_version(&Version::new(0, 5, 2)).unwrap();

        let written = fs::read_to_string(dir.path().join(DEFAULT_INIT_FILE)).unwrap();
        assert_eq!(
            written,
            "# header\nimport sys\n\n__version__ = \"0.5.2\"  # managed\n\ndef main():\n    pass\n"
        );
        assert_eq!(package.read_version().unwrap(), Version::new(0, 5, 2));
    }

    #[test]
    fn test_write_version_missing_declaration_leaves_file() {
        let original = "import os\n";
        let (dir, package) = package_with(original);

        let err = package.write_version(&Version::new(1, 0, 0)).unwrap_err();
        assert!(matches!(err, AutoversionError::MissingDeclaration { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join(DEFAULT_INIT_FILE)).unwrap(),
            original
        );
    }

    #[test]
    fn test_open_requires_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = PythonPackage::open(dir.path().join("missing"), DEFAULT_INIT_FILE).unwrap_err();
        assert!(err.to_string().contains("is not a valid directory"));
    }

    #[test]
    fn test_open_requires_init_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PythonPackage::open(dir.path(), DEFAULT_INIT_FILE).unwrap_err();
        assert!(err.to_string().contains("missing `__init__.py`"));
    }
}
