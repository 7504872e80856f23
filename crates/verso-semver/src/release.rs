//! Release types and version increments

use std::fmt;
use std::str::FromStr;

use crate::version::{Identifier, Version};
use crate::version_parser::{parse_build, parse_prerelease, FormatError};

/// Kind of release step between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
    PreMajor,
    PreMinor,
    PrePatch,
    PreRelease,
    /// Bump the prerelease only, never touching major.minor.patch
    Pre,
}

impl ReleaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
            ReleaseType::PreMajor => "premajor",
            ReleaseType::PreMinor => "preminor",
            ReleaseType::PrePatch => "prepatch",
            ReleaseType::PreRelease => "prerelease",
            ReleaseType::Pre => "pre",
        }
    }

    /// Get all supported release type names
    pub fn supported() -> &'static [&'static str] {
        &[
            "major",
            "minor",
            "patch",
            "premajor",
            "preminor",
            "prepatch",
            "prerelease",
            "pre",
        ]
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(ReleaseType::Major),
            "minor" => Ok(ReleaseType::Minor),
            "patch" => Ok(ReleaseType::Patch),
            "premajor" => Ok(ReleaseType::PreMajor),
            "preminor" => Ok(ReleaseType::PreMinor),
            "prepatch" => Ok(ReleaseType::PrePatch),
            "prerelease" => Ok(ReleaseType::PreRelease),
            "pre" => Ok(ReleaseType::Pre),
            _ => Err(FormatError::InvalidIdentifier {
                input: s.to_string(),
            }),
        }
    }
}

/// Optional inputs for [`increment`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncrementOptions {
    /// Prerelease identifier to use, e.g. `beta`
    pub prerelease: Option<String>,
    /// Build metadata replacing the current one, e.g. `sha.5114f85`
    pub build: Option<String>,
}

fn bump(value: u64, input: &Version, component: &'static str) -> Result<u64, FormatError> {
    value.checked_add(1).ok_or_else(|| FormatError::OutOfRange {
        input: input.to_string(),
        component,
    })
}

fn bump_prerelease_number(
    prerelease: &[Identifier],
    input: &Version,
) -> Result<Vec<Identifier>, FormatError> {
    let mut values = prerelease.to_vec();
    match values.iter().rposition(Identifier::is_numeric) {
        Some(index) => {
            if let Identifier::Numeric(n) = values[index] {
                values[index] = Identifier::Numeric(bump(n, input, "prerelease identifier")?);
            }
        }
        None => values.push(Identifier::Numeric(0)),
    }
    Ok(values)
}

fn bump_prerelease(
    prerelease: &[Identifier],
    id: Option<&[Identifier]>,
    input: &Version,
) -> Result<Vec<Identifier>, FormatError> {
    let values = bump_prerelease_number(prerelease, input)?;
    let Some(id) = id else {
        return Ok(values);
    };

    // 1.2.0-beta.foobar or 1.2.0-beta bumps to 1.2.0-beta.0
    let keeps_id = values.len() > id.len()
        && values.starts_with(id)
        && values[id.len()].is_numeric();
    if keeps_id {
        Ok(values)
    } else {
        let mut reset = id.to_vec();
        reset.push(Identifier::Numeric(0));
        Ok(reset)
    }
}

/// Return the version that results from applying `release` to `version`
pub fn increment(
    version: &Version,
    release: ReleaseType,
    options: &IncrementOptions,
) -> Result<Version, FormatError> {
    let id = options
        .prerelease
        .as_deref()
        .map(parse_prerelease)
        .transpose()?;
    let id = id.as_deref();
    let build = match options.build.as_deref() {
        Some(build) => parse_build(build)?,
        None => version.build().to_vec(),
    };

    let (major, minor, patch) = (version.major(), version.minor(), version.patch());
    let has_prerelease = version.is_prerelease();

    let next = match release {
        ReleaseType::PreMajor => Version::new(bump(major, version, "major")?, 0, 0)
            .with_prerelease(bump_prerelease(&[], id, version)?),
        ReleaseType::PreMinor => Version::new(major, bump(minor, version, "minor")?, 0)
            .with_prerelease(bump_prerelease(&[], id, version)?),
        ReleaseType::PrePatch => Version::new(major, minor, bump(patch, version, "patch")?)
            .with_prerelease(bump_prerelease(&[], id, version)?),
        ReleaseType::PreRelease if !has_prerelease => {
            Version::new(major, minor, bump(patch, version, "patch")?)
                .with_prerelease(bump_prerelease(&[], id, version)?)
        }
        ReleaseType::PreRelease | ReleaseType::Pre => Version::new(major, minor, patch)
            .with_prerelease(bump_prerelease(version.prerelease(), id, version)?),
        ReleaseType::Major => {
            // 1.0.0-5 releases as 1.0.0, 1.1.0 bumps to 2.0.0
            if minor == 0 && patch == 0 && has_prerelease {
                Version::new(major, 0, 0)
            } else {
                Version::new(bump(major, version, "major")?, 0, 0)
            }
        }
        ReleaseType::Minor => {
            if patch == 0 && has_prerelease {
                Version::new(major, minor, 0)
            } else {
                Version::new(major, bump(minor, version, "minor")?, 0)
            }
        }
        ReleaseType::Patch => {
            if has_prerelease {
                Version::new(major, minor, patch)
            } else {
                Version::new(major, minor, bump(patch, version, "patch")?)
            }
        }
    };

    Ok(next.with_build(build))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inc(version: &str, release: &str, prerelease: Option<&str>) -> String {
        let options = IncrementOptions {
            prerelease: prerelease.map(str::to_string),
            build: None,
        };
        increment(
            &version.parse().unwrap(),
            release.parse().unwrap(),
            &options,
        )
        .unwrap()
        .to_string()
    }

    #[test]
    fn test_release_type_names() {
        for name in ReleaseType::supported() {
            let release: ReleaseType = name.parse().unwrap();
            assert_eq!(release.to_string(), *name);
        }
        assert!("minorr".parse::<ReleaseType>().is_err());
    }

    #[test]
    fn test_increment_release() {
        assert_eq!(inc("1.2.3", "major", None), "2.0.0");
        assert_eq!(inc("1.2.3", "minor", None), "1.3.0");
        assert_eq!(inc("1.2.3", "patch", None), "1.2.4");
        assert_eq!(inc("1.0.0-5", "major", None), "1.0.0");
        assert_eq!(inc("1.1.0-5", "major", None), "2.0.0");
        assert_eq!(inc("1.2.0-5", "minor", None), "1.2.0");
        assert_eq!(inc("1.2.1-5", "minor", None), "1.3.0");
        assert_eq!(inc("1.2.3-5", "patch", None), "1.2.3");
    }

    #[test]
    fn test_increment_prerelease() {
        assert_eq!(inc("1.2.3", "premajor", None), "2.0.0-0");
        assert_eq!(inc("1.2.3", "preminor", None), "1.3.0-0");
        assert_eq!(inc("1.2.3", "prepatch", None), "1.2.4-0");
        assert_eq!(inc("1.2.3", "prerelease", None), "1.2.4-0");
        assert_eq!(inc("1.2.3-0", "prerelease", None), "1.2.3-1");
        assert_eq!(inc("1.2.3-alpha.0.b", "prerelease", None), "1.2.3-alpha.1.b");
        assert_eq!(inc("1.2.3-alpha", "prerelease", None), "1.2.3-alpha.0");
        assert_eq!(inc("1.2.3-alpha.1", "pre", None), "1.2.3-alpha.2");
    }

    #[test]
    fn test_increment_with_identifier() {
        assert_eq!(inc("1.2.3", "premajor", Some("beta")), "2.0.0-beta.0");
        assert_eq!(inc("1.2.3", "prerelease", Some("beta")), "1.2.4-beta.0");
        assert_eq!(inc("1.2.3-beta.1", "prerelease", Some("beta")), "1.2.3-beta.2");
        assert_eq!(inc("1.2.3-alpha.1", "prerelease", Some("beta")), "1.2.3-beta.0");
        assert_eq!(inc("1.2.3-beta", "prerelease", Some("beta")), "1.2.3-beta.0");
        assert_eq!(inc("1.2.3-beta.foo", "prerelease", Some("beta")), "1.2.3-beta.0");
        assert_eq!(inc("1.2.3-rc.1", "pre", Some("rc")), "1.2.3-rc.2");
    }

    #[test]
    fn test_increment_build() {
        let version: Version = "1.2.3+old".parse().unwrap();
        let kept = increment(&version, ReleaseType::Patch, &IncrementOptions::default()).unwrap();
        assert_eq!(kept.to_string(), "1.2.4+old");

        let options = IncrementOptions {
            prerelease: None,
            build: Some("sha.5114f85".to_string()),
        };
        let replaced = increment(&version, ReleaseType::Minor, &options).unwrap();
        assert_eq!(replaced.to_string(), "1.3.0+sha.5114f85");
    }

    #[test]
    fn test_increment_errors() {
        let max = Version::new(u64::MAX, 0, 0);
        assert!(matches!(
            increment(&max, ReleaseType::Major, &IncrementOptions::default()),
            Err(FormatError::OutOfRange { component: "major", .. })
        ));

        let options = IncrementOptions {
            prerelease: Some("be ta".to_string()),
            build: None,
        };
        assert!(matches!(
            increment(&Version::new(1, 0, 0), ReleaseType::PreMajor, &options),
            Err(FormatError::InvalidIdentifier { .. })
        ));
    }
}
