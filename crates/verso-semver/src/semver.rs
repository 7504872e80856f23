//! Semver facade providing string based version operations

use std::cmp::Ordering;

use crate::compare::compare;
use crate::range::{self, Range};
use crate::version::Version;
use crate::version_parser;

/// Main facade for semantic versioning operations on raw strings
///
/// Inputs that fail to parse are treated as non-matching rather than errors.
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range
    pub fn satisfies(version: &str, range: &str) -> bool {
        let Some(version) = version_parser::try_parse(version) else {
            return false;
        };
        let Some(range) = range::try_parse_range(range) else {
            return false;
        };
        range.satisfies(&version)
    }

    /// Return all versions that satisfy the given range
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let Some(range) = range::try_parse_range(range) else {
            return Vec::new();
        };

        versions
            .iter()
            .filter(|v| {
                version_parser::try_parse(v)
                    .map(|version| range.satisfies(&version))
                    .unwrap_or(false)
            })
            .map(|v| v.to_string())
            .collect()
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((version_parser::try_parse(v)?, i)))
            .collect();

        // Stable, so equal precedence keeps input order
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }

    /// Highest version satisfying the range, as written in the input
    pub fn max_satisfying(versions: &[&str], range: &str) -> Option<String> {
        Self::pick_satisfying(versions, range, Ordering::Greater)
    }

    /// Lowest version satisfying the range, as written in the input
    pub fn min_satisfying(versions: &[&str], range: &str) -> Option<String> {
        Self::pick_satisfying(versions, range, Ordering::Less)
    }

    fn pick_satisfying(versions: &[&str], range: &str, wanted: Ordering) -> Option<String> {
        let range: Range = range::try_parse_range(range)?;
        let mut best: Option<(Version, &str)> = None;

        for &raw in versions {
            let Some(version) = version_parser::try_parse(raw) else {
                continue;
            };
            if !range.satisfies(&version) {
                continue;
            }
            let replace = match &best {
                None => true,
                Some((current, _)) => {
                    let ordering = compare(&version, current);
                    ordering == wanted || (wanted == Ordering::Greater && ordering == Ordering::Equal)
                }
            };
            if replace {
                best = Some((version, raw));
            }
        }

        best.map(|(_, raw)| raw.to_string())
    }

    /// Canonical form of a version, or `None` if it does not parse
    pub fn valid(version: &str) -> Option<String> {
        version_parser::try_parse(version).map(|v| v.to_string())
    }
}
