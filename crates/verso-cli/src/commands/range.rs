//! Range commands - range, satisfies, max, min, outside and intersects.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde_json::json;
use verso_semver::{
    greater_than_range, less_than_range, max_satisfying, min_satisfying, range_intersects, Range,
    Version,
};

use super::{parse_candidates, parse_range, parse_version};
use crate::output::{boolean, Output};

#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Range expression, e.g. "^1.2 || >=2.0.0 <2.4.0"
    pub range: String,
}

#[derive(Args, Debug)]
pub struct SatisfiesArgs {
    /// Range expression to test against
    pub range: String,

    /// Candidate versions
    #[arg(required = true)]
    pub versions: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ExtremumArgs {
    /// Range expression to test against
    pub range: String,

    /// Candidate versions
    #[arg(required = true)]
    pub versions: Vec<String>,
}

/// Side of the range to check
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Higher than every version the range matches
    Gt,
    /// Lower than every version the range matches
    Lt,
}

#[derive(Args, Debug)]
pub struct OutsideArgs {
    /// Version to check
    pub version: String,

    /// Range expression
    pub range: String,

    /// Only check one side of the range
    #[arg(long, value_enum)]
    pub direction: Option<Direction>,
}

#[derive(Args, Debug)]
pub struct IntersectsArgs {
    /// First range expression
    pub a: String,

    /// Second range expression
    pub b: String,
}

/// Comparator sets of a range as strings, one inner list per `||` branch
fn range_sets(range: &Range) -> Vec<Vec<String>> {
    range
        .sets()
        .iter()
        .map(|set| set.comparators().iter().map(ToString::to_string).collect())
        .collect()
}

/// Check if `version` falls outside `range` on the requested side
pub fn is_outside(version: &Version, range: &Range, direction: Option<Direction>) -> bool {
    match direction {
        Some(Direction::Gt) => greater_than_range(version, range),
        Some(Direction::Lt) => less_than_range(version, range),
        None => greater_than_range(version, range) || less_than_range(version, range),
    }
}

pub fn range(args: RangeArgs, output: &Output) -> Result<i32> {
    let range = parse_range(&args.range)?;
    log::debug!("Parsed \"{}\" into {} set(s)", args.range, range.sets().len());

    output.print(
        &range,
        &json!({
            "range": range.to_string(),
            "sets": range_sets(&range),
        }),
    )?;
    Ok(0)
}

pub fn satisfies(args: SatisfiesArgs, output: &Output) -> Result<i32> {
    let range = parse_range(&args.range)?;
    let matching: Vec<String> = parse_candidates(&args.versions)
        .iter()
        .filter(|version| range.satisfies(version))
        .map(ToString::to_string)
        .collect();
    log::debug!("{} of {} version(s) satisfy {}", matching.len(), args.versions.len(), range);

    output.print(
        matching.join("\n"),
        &json!({
            "range": range.to_string(),
            "versions": matching,
        }),
    )?;
    Ok(if matching.is_empty() { 1 } else { 0 })
}

fn extremum(
    args: ExtremumArgs,
    output: &Output,
    pick: for<'a> fn(&'a [Version], &Range) -> Option<&'a Version>,
) -> Result<i32> {
    let range = parse_range(&args.range)?;
    let versions = parse_candidates(&args.versions);
    let found = pick(&versions, &range).map(ToString::to_string);

    output.print(
        found.as_deref().unwrap_or_default(),
        &json!({ "version": found }),
    )?;
    Ok(if found.is_some() { 0 } else { 1 })
}

pub fn max(args: ExtremumArgs, output: &Output) -> Result<i32> {
    extremum(args, output, max_satisfying)
}

pub fn min(args: ExtremumArgs, output: &Output) -> Result<i32> {
    extremum(args, output, min_satisfying)
}

pub fn outside(args: OutsideArgs, output: &Output) -> Result<i32> {
    let version = parse_version(&args.version)?;
    let range = parse_range(&args.range)?;
    let result = is_outside(&version, &range, args.direction);

    output.print(boolean(result), &json!({ "outside": result }))?;
    Ok(if result { 0 } else { 1 })
}

pub fn intersects(args: IntersectsArgs, output: &Output) -> Result<i32> {
    let a = parse_range(&args.a)?;
    let b = parse_range(&args.b)?;
    let result = range_intersects(&a, &b);

    output.print(boolean(result), &json!({ "intersects": result }))?;
    Ok(if result { 0 } else { 1 })
}
