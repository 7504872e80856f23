//! Primitive comparator: an operator applied to one version

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::Operator;
use crate::compare::compare;
use crate::version::Version;
use crate::version_parser::{self, FormatError};

/// A single primitive constraint
///
/// `Any` is the wildcard produced by `*`, `x` and friends. It matches every
/// version but never grants visibility to prereleases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Comparator {
    Any,
    Bound { operator: Operator, version: Version },
}

impl Comparator {
    /// Create a bounded comparator
    pub fn new(operator: Operator, version: Version) -> Self {
        Comparator::Bound { operator, version }
    }

    /// Check if this is the wildcard comparator
    pub fn is_any(&self) -> bool {
        matches!(self, Comparator::Any)
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Comparator::Any => None,
            Comparator::Bound { operator, .. } => Some(*operator),
        }
    }

    pub fn version(&self) -> Option<&Version> {
        match self {
            Comparator::Any => None,
            Comparator::Bound { version, .. } => Some(version),
        }
    }

    /// Check the operator against `version`, ignoring prerelease visibility
    pub fn test(&self, version: &Version) -> bool {
        match self {
            Comparator::Any => true,
            Comparator::Bound {
                operator,
                version: bound,
            } => operator.accepts(compare(version, bound)),
        }
    }

    /// Check if `version` lies entirely below what this comparator allows
    pub(crate) fn rejects_as_lower(&self, version: &Version) -> bool {
        let Comparator::Bound {
            operator,
            version: bound,
        } = self
        else {
            return false;
        };
        let ordering = compare(version, bound);
        match operator {
            Operator::Equal | Operator::GreaterOrEqual => ordering == Ordering::Less,
            Operator::Greater => ordering != Ordering::Greater,
            Operator::NotEqual | Operator::Less | Operator::LessOrEqual => false,
        }
    }

    /// Check if `version` lies entirely above what this comparator allows
    pub(crate) fn rejects_as_higher(&self, version: &Version) -> bool {
        let Comparator::Bound {
            operator,
            version: bound,
        } = self
        else {
            return false;
        };
        let ordering = compare(version, bound);
        match operator {
            Operator::Equal | Operator::LessOrEqual => ordering == Ordering::Greater,
            Operator::Less => ordering != Ordering::Less,
            Operator::NotEqual | Operator::Greater | Operator::GreaterOrEqual => false,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Any => f.write_str("*"),
            Comparator::Bound { operator, version } => write!(f, "{}{}", operator, version),
        }
    }
}

impl FromStr for Comparator {
    type Err = FormatError;

    /// Parse a primitive comparator such as `>=1.2.3`, `1.2.3` or `*`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        version_parser::check_length(s)?;
        let s = s.trim();
        if matches!(s, "" | "*" | "x" | "X") {
            return Ok(Comparator::Any);
        }

        let split = s
            .find(|c: char| !matches!(c, '<' | '>' | '=' | '!'))
            .unwrap_or(s.len());
        let (operator, version) = s.split_at(split);
        let operator: Operator = operator.parse().map_err(|_| FormatError::InvalidComparator {
            input: s.to_string(),
            reason: format!("invalid operator \"{}\"", operator),
        })?;
        let version = version_parser::parse(version).map_err(|e| FormatError::InvalidComparator {
            input: s.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Comparator::new(operator, version))
    }
}
