//! Version commands - parse, compare, diff, inc and sort.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use serde_json::{json, Value};
use std::cmp::Ordering;
use verso_semver::{
    compare, difference, increment, Identifier, IncrementOptions, ReleaseType, Semver, Version,
};

use super::{parse_candidates, parse_version};
use crate::output::Output;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version to parse, e.g. 1.2.3-beta.1+build.5
    pub version: String,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    pub a: String,

    /// Right-hand version
    pub b: String,
}

#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Left-hand version
    pub a: String,

    /// Right-hand version
    pub b: String,
}

#[derive(Args, Debug)]
pub struct IncArgs {
    /// Version to increment
    pub version: String,

    /// Release type: major, minor, patch, premajor, preminor, prepatch, prerelease or pre
    pub release: String,

    /// Prerelease identifier, e.g. beta
    #[arg(long)]
    pub preid: Option<String>,

    /// Build metadata to set on the result
    #[arg(long)]
    pub build: Option<String>,
}

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort, invalid ones are skipped
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,
}

/// JSON shape of a parsed version
#[derive(Debug, Serialize)]
pub struct VersionJson {
    pub version: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<Value>,
    pub build: Vec<String>,
}

impl From<&Version> for VersionJson {
    fn from(version: &Version) -> Self {
        VersionJson {
            version: version.to_string(),
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            prerelease: version
                .prerelease()
                .iter()
                .map(|id| match id {
                    Identifier::Numeric(n) => json!(n),
                    Identifier::AlphaNumeric(s) => json!(s),
                })
                .collect(),
            build: version.build().to_vec(),
        }
    }
}

fn ordering_value(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

pub fn parse(args: ParseArgs, output: &Output) -> Result<i32> {
    let version = parse_version(&args.version)?;
    output.print(&version, &VersionJson::from(&version))?;
    Ok(0)
}

pub fn compare_versions(args: CompareArgs, output: &Output) -> Result<i32> {
    let a = parse_version(&args.a)?;
    let b = parse_version(&args.b)?;
    let result = ordering_value(compare(&a, &b));
    log::debug!("compare({}, {}) = {}", a, b, result);

    output.print(result, &json!({ "result": result }))?;
    Ok(0)
}

pub fn diff(args: DiffArgs, output: &Output) -> Result<i32> {
    let a = parse_version(&args.a)?;
    let b = parse_version(&args.b)?;
    let release = difference(&a, &b);

    let text = release.map(|r| r.to_string()).unwrap_or_default();
    output.print(text, &json!({ "difference": release.map(|r| r.as_str()) }))?;
    Ok(0)
}

pub fn inc(args: IncArgs, output: &Output) -> Result<i32> {
    let version = parse_version(&args.version)?;
    let release: ReleaseType = args.release.parse().with_context(|| {
        format!(
            "Unknown release type, expected one of: {}",
            ReleaseType::supported().join(", ")
        )
    })?;
    let options = IncrementOptions {
        prerelease: args.preid,
        build: args.build,
    };

    let next = increment(&version, release, &options)
        .with_context(|| format!("Cannot increment {} by {}", version, release))?;
    log::debug!("{} + {} = {}", version, release, next);

    output.print(&next, &json!({ "version": next.to_string() }))?;
    Ok(0)
}

pub fn sort(args: SortArgs, output: &Output) -> Result<i32> {
    // Warn once per invalid input, the facade drops them silently
    parse_candidates(&args.versions);

    let inputs: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    let sorted = if args.reverse {
        Semver::rsort(&inputs)
    } else {
        Semver::sort(&inputs)
    };

    output.print(sorted.join("\n"), &sorted)?;
    Ok(0)
}
