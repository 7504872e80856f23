//! Structured semantic version value

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::compare::compare;
use crate::version_parser::{self, FormatError};

/// A single prerelease identifier
///
/// Numeric identifiers always sort below alphanumeric ones at the same
/// position, which is what the derived ordering gives us.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identifier {
    /// All-digit identifier, e.g. the `1` in `1.0.0-alpha.1`
    Numeric(u64),
    /// Identifier with at least one non-digit, e.g. `alpha` or `rc-1`
    AlphaNumeric(String),
}

impl Identifier {
    /// Check if this is a numeric identifier
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    /// Get the numeric value, if any
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Identifier::Numeric(n) => Some(*n),
            Identifier::AlphaNumeric(_) => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Identifier {
    fn from(n: u64) -> Self {
        Identifier::Numeric(n)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::AlphaNumeric(s.to_string())
    }
}

/// A fully resolved semantic version
///
/// Equality and hashing are structural, so two versions that only differ in
/// build metadata are not `==`. Use [`crate::equals`] for precedence equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<Identifier>,
    build: Vec<String>,
}

impl Version {
    /// Create a release version without prerelease or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Replace the prerelease identifiers
    pub fn with_prerelease(mut self, prerelease: Vec<Identifier>) -> Self {
        self.prerelease = prerelease;
        self
    }

    /// Replace the build identifiers
    pub fn with_build(mut self, build: Vec<String>) -> Self {
        self.build = build;
        self
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> &[Identifier] {
        &self.prerelease
    }

    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Check if this version carries prerelease identifiers
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Check if `other` has the same major.minor.patch triple
    pub fn same_release(&self, other: &Version) -> bool {
        self.major == other.major && self.minor == other.minor && self.patch == other.patch
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::new(0, 0, 0)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Precedence order, with build metadata as the final tie-break so that
    /// `Ord` stays consistent with structural `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other).then_with(|| self.build.cmp(&other.build))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            f.write_str("-")?;
            for (i, id) in self.prerelease.iter().enumerate() {
                if i > 0 {
                    f.write_str(".")?;
                }
                write!(f, "{}", id)?;
            }
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        version_parser::parse(s)
    }
}

/// Format a version in its canonical `major.minor.patch[-pre][+build]` form
pub fn format(version: &Version) -> String {
    version.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");

        let v = Version::new(1, 0, 0)
            .with_prerelease(vec!["alpha".into(), 1.into()])
            .with_build(vec!["build".to_string(), "007".to_string()]);
        assert_eq!(v.to_string(), "1.0.0-alpha.1+build.007");

        let v = Version::new(0, 0, 1).with_build(vec!["sha".to_string()]);
        assert_eq!(format(&v), "0.0.1+sha");
    }

    #[test]
    fn test_round_trip() {
        for input in [
            "0.0.0",
            "1.2.3",
            "1.2.3-alpha",
            "1.2.3-alpha.1",
            "1.2.3-0.3.7",
            "1.2.3-x.7.z.92",
            "1.0.0+20130313144700",
            "1.0.0-beta+exp.sha.5114f85",
            "1.0.0+21AF26D3----117B344092BD",
            "1.0.0-rc-1+build.01",
        ] {
            let v: Version = input.parse().unwrap();
            assert_eq!(v.to_string(), input);
            assert_eq!(format(&v).parse::<Version>().unwrap(), v);
        }
    }

    #[test]
    fn test_ord_uses_build_as_tie_break() {
        let a: Version = "1.0.0+a".parse().unwrap();
        let b: Version = "1.0.0+b".parse().unwrap();
        assert_eq!(compare(&a, &b), Ordering::Equal);
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_identifier_order() {
        assert!(Identifier::Numeric(99) < Identifier::AlphaNumeric("0a".to_string()));
        assert!(Identifier::Numeric(2) < Identifier::Numeric(10));
        assert!(Identifier::from("alpha") < Identifier::from("beta"));
        assert!(Identifier::from("Beta") < Identifier::from("alpha"));
    }
}
