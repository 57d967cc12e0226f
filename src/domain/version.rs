use crate::error::{AutoversionError, Result};
use std::fmt;
use std::str::FromStr;

/// Three-component package version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string of exactly three dot-delimited non-negative integers
    /// (e.g., "1.2.3" -> Version(1,2,3))
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() != 3 {
            return Err(AutoversionError::format(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                raw
            )));
        }

        let major = parse_component(parts[0], "major", raw)?;
        let minor = parse_component(parts[1], "minor", raw)?;
        let patch = parse_component(parts[2], "patch", raw)?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Increment the component selected by `bump`.
    ///
    /// Lower-order components are left untouched: `1.2.3` bumped by minor is
    /// `1.3.3`, not `1.3.0`. `BumpCategory::None` returns the version unchanged.
    ///
    /// # Returns
    /// * `Err(Format)` - the selected component is already at `u32::MAX`
    pub fn bump(&self, bump: BumpCategory) -> Result<Self> {
        let mut next = *self;
        let (component, name) = match bump {
            BumpCategory::Major => (&mut next.major, "major"),
            BumpCategory::Minor => (&mut next.minor, "minor"),
            BumpCategory::Patch => (&mut next.patch, "patch"),
            BumpCategory::None => return Ok(next),
        };
        *component = component.checked_add(1).ok_or_else(|| {
            AutoversionError::format(format!("{} version of {} cannot be incremented", name, self))
        })?;
        Ok(next)
    }
}

fn parse_component(part: &str, name: &str, raw: &str) -> Result<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AutoversionError::format(format!(
            "Invalid {} version '{}' in '{}'",
            name, part, raw
        )));
    }

    part.parse::<u32>().map_err(|_| {
        AutoversionError::format(format!(
            "{} version '{}' in '{}' is out of range",
            name, part, raw
        ))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = AutoversionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Severity of the version increment derived from a commit range.
///
/// Variants are declared in ascending severity so the derived ordering gives
/// `None < Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BumpCategory {
    None,
    Patch,
    Minor,
    Major,
}

impl BumpCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpCategory::None => "none",
            BumpCategory::Patch => "patch",
            BumpCategory::Minor => "minor",
            BumpCategory::Major => "major",
        }
    }
}

impl fmt::Display for BumpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpCategory {
    type Err = AutoversionError;

    /// Accepts the four category names; an empty string means no bump.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "none" => Ok(BumpCategory::None),
            "patch" => Ok(BumpCategory::Patch),
            "minor" => Ok(BumpCategory::Minor),
            "major" => Ok(BumpCategory::Major),
            other => Err(AutoversionError::BumpCategory(other.to_string())),
        }
    }
}

/// Parse a version string, failing with a format error on anything but `X.Y.Z`.
pub fn parse_version(raw: &str) -> Result<Version> {
    Version::parse(raw)
}

/// Render a version as "major.minor.patch".
pub fn format_version(version: &Version) -> String {
    version.to_string()
}

/// Apply a bump given in its textual forms, as received from a caller or CLI.
///
/// # Returns
/// * `Ok(Version)` - `current` with exactly one component incremented (or unchanged for none)
/// * `Err(Format)` - `current` is not three dot-delimited non-negative integers
/// * `Err(BumpCategory)` - `bump` is not one of none/patch/minor/major
pub fn apply_bump(current: &str, bump: &str) -> Result<Version> {
    let version = Version::parse(current)?;
    let bump = bump.parse::<BumpCategory>()?;
    version.bump(bump)
}
