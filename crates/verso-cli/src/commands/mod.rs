//! Subcommand implementations

pub mod completions;
pub mod range;
pub mod version;

use anyhow::{Context, Result};
use verso_semver::{Range, Version};

use crate::output;

/// Parse a version given on the command line
pub(crate) fn parse_version(input: &str) -> Result<Version> {
    verso_semver::parse(input).with_context(|| format!("Invalid version argument \"{}\"", input))
}

/// Parse a range given on the command line
pub(crate) fn parse_range(input: &str) -> Result<Range> {
    verso_semver::parse_range(input).with_context(|| format!("Invalid range argument \"{}\"", input))
}

/// Parse a list of candidate versions, warning about and skipping invalid ones
pub(crate) fn parse_candidates(inputs: &[String]) -> Vec<Version> {
    inputs
        .iter()
        .filter_map(|input| match verso_semver::parse(input) {
            Ok(version) => Some(version),
            Err(e) => {
                output::warn(format!("{}, skipping", e));
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_context() {
        let err = parse_version("1.2").unwrap_err();
        assert_eq!(err.to_string(), "Invalid version argument \"1.2\"");
        assert!(err.chain().nth(1).is_some());
    }

    #[test]
    fn test_parse_candidates_skips_invalid() {
        let inputs = vec!["1.0.0".to_string(), "nope".to_string(), "v2.0.0".to_string()];
        let versions = parse_candidates(&inputs);
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[1].to_string(), "2.0.0");
    }
}
