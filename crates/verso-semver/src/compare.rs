//! Version precedence

use std::cmp::Ordering;

use crate::release::ReleaseType;
use crate::version::{Identifier, Version};

/// Compare two versions by SemVer 2.0.0 precedence
///
/// Build metadata never takes part in the comparison.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major()
        .cmp(&b.major())
        .then_with(|| a.minor().cmp(&b.minor()))
        .then_with(|| a.patch().cmp(&b.patch()))
        .then_with(|| compare_prerelease(a.prerelease(), b.prerelease()))
}

/// Compare prerelease lists; an empty list is a release and ranks highest
pub(crate) fn compare_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Element-wise, numeric below alphanumeric, shorter prefix first
        (false, false) => a.cmp(b),
    }
}

/// Check if a == b in precedence
pub fn equals(a: &Version, b: &Version) -> bool {
    compare(a, b) == Ordering::Equal
}

/// Check if a != b in precedence
pub fn not_equals(a: &Version, b: &Version) -> bool {
    compare(a, b) != Ordering::Equal
}

/// Check if a < b
pub fn less_than(a: &Version, b: &Version) -> bool {
    compare(a, b) == Ordering::Less
}

/// Check if a <= b
pub fn less_or_equal(a: &Version, b: &Version) -> bool {
    compare(a, b) != Ordering::Greater
}

/// Check if a > b
pub fn greater_than(a: &Version, b: &Version) -> bool {
    compare(a, b) == Ordering::Greater
}

/// Check if a >= b
pub fn greater_or_equal(a: &Version, b: &Version) -> bool {
    compare(a, b) != Ordering::Less
}

/// Describe the most significant difference between two versions
///
/// Returns `None` when both have the same precedence.
pub fn difference(a: &Version, b: &Version) -> Option<ReleaseType> {
    let has_prerelease = a.is_prerelease() || b.is_prerelease();

    if a.major() != b.major() {
        return Some(if has_prerelease {
            ReleaseType::PreMajor
        } else {
            ReleaseType::Major
        });
    }
    if a.minor() != b.minor() {
        return Some(if has_prerelease {
            ReleaseType::PreMinor
        } else {
            ReleaseType::Minor
        });
    }
    if a.patch() != b.patch() {
        return Some(if has_prerelease {
            ReleaseType::PrePatch
        } else {
            ReleaseType::Patch
        });
    }
    if a.prerelease() != b.prerelease() {
        return Some(ReleaseType::PreRelease);
    }
    None
}
