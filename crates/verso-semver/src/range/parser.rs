//! Range grammar and desugaring
//!
//! Every range expression is reduced to OR-combined sets of primitive
//! comparators. Caret, tilde, x-ranges and hyphen ranges never survive
//! parsing; see the per-operator functions below for the exact bounds.

use lazy_static::lazy_static;
use regex::Regex;

use super::partial::{Partial, RangeOperator, Token};
use super::{Comparator, ComparatorSet, Operator, Range};
use crate::version::Version;
use crate::version_parser::{self, FormatError};

lazy_static! {
    // Whitespace after an operator, so `>= 1.2.3` reads as `>=1.2.3`
    static ref OPERATOR_SPACE_RE: Regex = Regex::new(r"([<>=~^])\s+").unwrap();

    // OR constraint splitter
    static ref OR_RANGE_RE: Regex = Regex::new(r"\s*\|\|\s*").unwrap();

    // Hyphen range, both sides validated separately as partial versions
    static ref HYPHEN_RE: Regex = Regex::new(r"^(\S+)\s+-\s+(\S+)$").unwrap();
}

/// Parse a range expression such as `^1.2.3 || >=2.0.0 <2.4.0`
pub fn parse_range(input: &str) -> Result<Range, FormatError> {
    version_parser::check_length(input)?;
    let normalized = OPERATOR_SPACE_RE.replace_all(input, "$1");

    let sets = OR_RANGE_RE
        .split(&normalized)
        .map(|branch| parse_branch(input, branch.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Range::new(sets))
}

/// Parse a range, returning `None` instead of an error
pub fn try_parse_range(input: &str) -> Option<Range> {
    parse_range(input).ok()
}

fn invalid(input: &str, token: &str) -> FormatError {
    FormatError::InvalidRange {
        input: input.to_string(),
        token: token.to_string(),
    }
}

/// Overflow is reported as is, anything else names the offending token
fn keep_overflow(error: FormatError, input: &str, token: &str) -> FormatError {
    match error {
        FormatError::OutOfRange { .. } => error,
        _ => invalid(input, token),
    }
}

fn parse_branch(input: &str, branch: &str) -> Result<ComparatorSet, FormatError> {
    if let Some(set) = parse_hyphen_range(branch)? {
        log::trace!("Hyphen range \"{}\" desugared to \"{}\"", branch, set);
        return Ok(set);
    }

    let mut comparators = Vec::new();
    for token in branch.split_whitespace() {
        let parsed = Token::parse(token).map_err(|e| keep_overflow(e, input, token))?;
        let desugared = desugar(&parsed, token).map_err(|e| keep_overflow(e, input, token))?;
        log::trace!("Range token \"{}\" desugared to {:?}", token, desugared);
        comparators.extend(desugared);
    }

    if comparators.is_empty() {
        comparators.push(Comparator::Any);
    }
    Ok(ComparatorSet::new(comparators))
}

fn desugar(token: &Token, raw: &str) -> Result<Vec<Comparator>, FormatError> {
    let p = &token.partial;
    match token.operator {
        RangeOperator::Caret => caret(p, raw),
        RangeOperator::Tilde => tilde(p, raw),
        RangeOperator::Equal => equal(p, raw),
        RangeOperator::NotEqual => not_equal(p, raw),
        RangeOperator::Less => Ok(vec![less(p)]),
        RangeOperator::LessOrEqual => less_or_equal(p, raw),
        RangeOperator::Greater => greater(p, raw),
        RangeOperator::GreaterOrEqual => Ok(vec![greater_or_equal(p)]),
    }
}

fn next(value: u64, component: &'static str, raw: &str) -> Result<u64, FormatError> {
    value.checked_add(1).ok_or_else(|| FormatError::OutOfRange {
        input: raw.to_string(),
        component,
    })
}

fn at_least(version: Version) -> Comparator {
    Comparator::new(Operator::GreaterOrEqual, version)
}

fn below(version: Version) -> Comparator {
    Comparator::new(Operator::Less, version)
}

/// `<0.0.0`, which no version satisfies
fn nothing() -> Comparator {
    below(Version::new(0, 0, 0))
}

/// Lower bound of an exact release, keeping an explicit prerelease
fn floor_with_prerelease(p: &Partial) -> Version {
    p.floor().with_prerelease(p.prerelease.clone())
}

/// `>=M.0.0 <M+1.0.0`
fn major_range(major: u64, raw: &str) -> Result<Vec<Comparator>, FormatError> {
    Ok(vec![
        at_least(Version::new(major, 0, 0)),
        below(Version::new(next(major, "major", raw)?, 0, 0)),
    ])
}

/// `>=M.m.0 <M.m+1.0`
fn minor_range(major: u64, minor: u64, raw: &str) -> Result<Vec<Comparator>, FormatError> {
    Ok(vec![
        at_least(Version::new(major, minor, 0)),
        below(Version::new(major, next(minor, "minor", raw)?, 0)),
    ])
}

/// `^`: changes that keep the left-most non-zero field
fn caret(p: &Partial, raw: &str) -> Result<Vec<Comparator>, FormatError> {
    let (Some(major), Some(minor), Some(patch)) = (p.major, p.minor, p.patch) else {
        return match (p.major, p.minor) {
            (None, _) => Ok(vec![Comparator::Any]),
            (Some(major), None) => major_range(major, raw),
            (Some(0), Some(minor)) => minor_range(0, minor, raw),
            (Some(major), Some(minor)) => Ok(vec![
                at_least(Version::new(major, minor, 0)),
                below(Version::new(next(major, "major", raw)?, 0, 0)),
            ]),
        };
    };

    let upper = match (major, minor) {
        (0, 0) => Version::new(0, 0, next(patch, "patch", raw)?),
        (0, _) => Version::new(0, next(minor, "minor", raw)?, 0),
        _ => Version::new(next(major, "major", raw)?, 0, 0),
    };
    Ok(vec![at_least(floor_with_prerelease(p)), below(upper)])
}

/// `~`: patch-level changes, or minor-level when no minor was given
fn tilde(p: &Partial, raw: &str) -> Result<Vec<Comparator>, FormatError> {
    match (p.major, p.minor, p.patch) {
        (None, _, _) => Ok(vec![Comparator::Any]),
        (Some(major), None, _) => major_range(major, raw),
        (Some(major), Some(minor), None) => minor_range(major, minor, raw),
        (Some(major), Some(minor), Some(_)) => Ok(vec![
            at_least(floor_with_prerelease(p)),
            below(Version::new(major, next(minor, "minor", raw)?, 0)),
        ]),
    }
}

/// Bare or `=`: wildcards widen to the implied range
fn equal(p: &Partial, raw: &str) -> Result<Vec<Comparator>, FormatError> {
    match (p.major, p.minor, p.full()) {
        (None, _, _) => Ok(vec![Comparator::Any]),
        (Some(major), None, _) => major_range(major, raw),
        (Some(major), Some(minor), None) => minor_range(major, minor, raw),
        (_, _, Some(version)) => Ok(vec![Comparator::new(Operator::Equal, version)]),
    }
}

fn not_equal(p: &Partial, raw: &str) -> Result<Vec<Comparator>, FormatError> {
    match p.full() {
        Some(version) => Ok(vec![Comparator::new(Operator::NotEqual, version)]),
        None => Err(FormatError::InvalidComparator {
            input: raw.to_string(),
            reason: "wildcards are not allowed with \"!=\"".to_string(),
        }),
    }
}

fn less(p: &Partial) -> Comparator {
    match (p.major, p.minor, p.full()) {
        (None, _, _) => nothing(),
        (Some(_), None, _) | (Some(_), Some(_), None) => below(p.floor()),
        (_, _, Some(version)) => below(version),
    }
}

fn less_or_equal(p: &Partial, raw: &str) -> Result<Vec<Comparator>, FormatError> {
    let comparator = match (p.major, p.minor, p.full()) {
        (None, _, _) => Comparator::Any,
        (Some(major), None, _) => below(Version::new(next(major, "major", raw)?, 0, 0)),
        (Some(major), Some(minor), None) => below(Version::new(major, next(minor, "minor", raw)?, 0)),
        (_, _, Some(version)) => Comparator::new(Operator::LessOrEqual, version),
    };
    Ok(vec![comparator])
}

fn greater(p: &Partial, raw: &str) -> Result<Vec<Comparator>, FormatError> {
    let comparator = match (p.major, p.minor, p.full()) {
        (None, _, _) => nothing(),
        (Some(major), None, _) => at_least(Version::new(next(major, "major", raw)?, 0, 0)),
        (Some(major), Some(minor), None) => at_least(Version::new(major, next(minor, "minor", raw)?, 0)),
        (_, _, Some(version)) => Comparator::new(Operator::Greater, version),
    };
    Ok(vec![comparator])
}

fn greater_or_equal(p: &Partial) -> Comparator {
    match (p.major, p.full()) {
        (None, _) => Comparator::Any,
        (Some(_), None) => at_least(p.floor()),
        (_, Some(version)) => at_least(version),
    }
}

/// `A - B`: inclusive on both ends, partial upper ends widen to the next unit
fn parse_hyphen_range(branch: &str) -> Result<Option<ComparatorSet>, FormatError> {
    let Some(caps) = HYPHEN_RE.captures(branch) else {
        return Ok(None);
    };
    let (Ok(from), Ok(to)) = (Partial::parse(&caps[1]), Partial::parse(&caps[2])) else {
        return Ok(None);
    };

    let mut comparators = Vec::with_capacity(2);

    match (from.major, from.full()) {
        (None, _) => {}
        (Some(_), None) => comparators.push(at_least(from.floor())),
        (_, Some(version)) => comparators.push(at_least(version)),
    }

    match (to.major, to.minor, to.full()) {
        (None, _, _) => {}
        (Some(major), None, _) => {
            comparators.push(below(Version::new(next(major, "major", branch)?, 0, 0)));
        }
        (Some(major), Some(minor), None) => {
            comparators.push(below(Version::new(major, next(minor, "minor", branch)?, 0)));
        }
        (_, _, Some(version)) => comparators.push(Comparator::new(Operator::LessOrEqual, version)),
    }

    if comparators.is_empty() {
        comparators.push(Comparator::Any);
    }
    Ok(Some(ComparatorSet::new(comparators)))
}
