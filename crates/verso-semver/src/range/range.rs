//! Normalized ranges and their evaluation

use std::fmt;
use std::str::FromStr;

use super::Comparator;
use crate::compare::compare;
use crate::version::Version;
use crate::version_parser::FormatError;

/// AND-combined comparators
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComparatorSet {
    comparators: Vec<Comparator>,
}

impl ComparatorSet {
    pub fn new(comparators: Vec<Comparator>) -> Self {
        ComparatorSet { comparators }
    }

    pub fn comparators(&self) -> &[Comparator] {
        &self.comparators
    }

    /// Check if the set contains the wildcard comparator
    pub fn has_any(&self) -> bool {
        self.comparators.iter().any(Comparator::is_any)
    }

    /// Check if `version` satisfies every comparator of the set
    ///
    /// A prerelease only matches when some comparator of this set names the
    /// same major.minor.patch with a prerelease of its own.
    pub fn test(&self, version: &Version) -> bool {
        if !self.comparators.iter().all(|c| c.test(version)) {
            return false;
        }
        if !version.is_prerelease() {
            return true;
        }
        self.comparators.iter().any(|c| match c.version() {
            Some(bound) => bound.is_prerelease() && bound.same_release(version),
            None => false,
        })
    }

    /// Check if `version` is out of this set on the high side
    fn is_below(&self, version: &Version) -> bool {
        !self.has_any()
            && !self.test(version)
            && !self.comparators.iter().any(|c| c.rejects_as_lower(version))
    }

    /// Check if `version` is out of this set on the low side
    fn is_above(&self, version: &Version) -> bool {
        !self.has_any()
            && !self.test(version)
            && !self.comparators.iter().any(|c| c.rejects_as_higher(version))
    }
}

impl fmt::Display for ComparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, comparator) in self.comparators.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", comparator)?;
        }
        Ok(())
    }
}

/// OR-combined comparator sets, the normalized form of a range expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    sets: Vec<ComparatorSet>,
}

impl Range {
    pub fn new(sets: Vec<ComparatorSet>) -> Self {
        Range { sets }
    }

    /// The range matching every release, `*`
    pub fn any() -> Self {
        Range::new(vec![ComparatorSet::new(vec![Comparator::Any])])
    }

    /// Check if this is exactly the `*` range
    pub fn is_any(&self) -> bool {
        self.sets.len() == 1 && self.sets[0].comparators() == [Comparator::Any]
    }

    pub fn sets(&self) -> &[ComparatorSet] {
        &self.sets
    }

    /// Check if `version` satisfies at least one set
    pub fn satisfies(&self, version: &Version) -> bool {
        self.sets.iter().any(|set| set.test(version))
    }

    /// Check if `version` is above every set of the range
    pub fn is_below(&self, version: &Version) -> bool {
        self.sets.iter().all(|set| set.is_below(version))
    }

    /// Check if `version` is below every set of the range
    pub fn is_above(&self, version: &Version) -> bool {
        self.sets.iter().all(|set| set.is_above(version))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, set) in self.sets.iter().enumerate() {
            if i > 0 {
                f.write_str("||")?;
            }
            write!(f, "{}", set)?;
        }
        Ok(())
    }
}

impl FromStr for Range {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_range(s)
    }
}

/// Check if `version` satisfies `range`
pub fn satisfies(version: &Version, range: &Range) -> bool {
    range.satisfies(version)
}

/// Check if `version` is higher than every version the range could match
pub fn greater_than_range(version: &Version, range: &Range) -> bool {
    range.is_below(version)
}

/// Check if `version` is lower than every version the range could match
pub fn less_than_range(version: &Version, range: &Range) -> bool {
    range.is_above(version)
}

/// Highest version of `versions` satisfying `range`
pub fn max_satisfying<'a>(versions: &'a [Version], range: &Range) -> Option<&'a Version> {
    versions
        .iter()
        .filter(|v| range.satisfies(v))
        .max_by(|a, b| compare(a, b))
}

/// Lowest version of `versions` satisfying `range`
pub fn min_satisfying<'a>(versions: &'a [Version], range: &Range) -> Option<&'a Version> {
    versions
        .iter()
        .filter(|v| range.satisfies(v))
        .min_by(|a, b| compare(a, b))
}

/// Format a range in its normalized form
pub fn format_range(range: &Range) -> String {
    range.to_string()
}
