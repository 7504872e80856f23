//! Range tokens: an operator followed by a possibly partial version

use crate::version::{Identifier, Version};
use crate::version_parser::{FormatError, Scanner};

/// Operators accepted in front of a range token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RangeOperator {
    Caret,
    Tilde,
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl RangeOperator {
    /// Longest operator prefix of `input` and the byte length it spans
    fn split(input: &str) -> (RangeOperator, usize) {
        const PREFIXES: [(&str, RangeOperator); 10] = [
            ("~>", RangeOperator::Tilde),
            ("~", RangeOperator::Tilde),
            ("^", RangeOperator::Caret),
            (">=", RangeOperator::GreaterOrEqual),
            ("<=", RangeOperator::LessOrEqual),
            ("!=", RangeOperator::NotEqual),
            (">", RangeOperator::Greater),
            ("<", RangeOperator::Less),
            ("=", RangeOperator::Equal),
            ("", RangeOperator::Equal),
        ];
        PREFIXES
            .iter()
            .find(|(prefix, _)| input.starts_with(prefix))
            .map(|(prefix, op)| (*op, prefix.len()))
            .unwrap_or((RangeOperator::Equal, 0))
    }
}

/// A version whose major, minor and patch may each be a wildcard
///
/// Missing trailing fields count as wildcards, so `1.2` is `1.2.x`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Partial {
    pub(crate) major: Option<u64>,
    pub(crate) minor: Option<u64>,
    pub(crate) patch: Option<u64>,
    pub(crate) prerelease: Vec<Identifier>,
    pub(crate) build: Vec<String>,
}

impl Partial {
    /// Parse a bare partial version, allowing a `v`/`=` prefix
    pub(crate) fn parse(input: &str) -> Result<Partial, FormatError> {
        let mut scanner = Scanner::new(input);
        let partial = Self::scan(&mut scanner)?;
        if !scanner.is_done() {
            return Err(scanner.error("unexpected character"));
        }
        Ok(partial)
    }

    fn scan(scanner: &mut Scanner<'_>) -> Result<Partial, FormatError> {
        scanner.skip_while(|b| b == b'v' || b == b'=' || b.is_ascii_whitespace());

        let mut partial = Partial {
            major: scanner.number_or_wildcard("major")?,
            ..Partial::default()
        };
        if scanner.eat(b'.') {
            partial.minor = scanner.number_or_wildcard("minor")?;
            if scanner.eat(b'.') {
                partial.patch = scanner.number_or_wildcard("patch")?;
                if scanner.eat(b'-') {
                    partial.prerelease = scanner.prerelease()?;
                }
                if scanner.eat(b'+') {
                    partial.build = scanner.build()?;
                }
            }
        }
        Ok(partial)
    }

    /// The release triple with the first wildcard and every field after it zeroed
    pub(crate) fn floor(&self) -> Version {
        let minor = self.major.and(self.minor);
        let patch = minor.and(self.patch);
        Version::new(
            self.major.unwrap_or(0),
            minor.unwrap_or(0),
            patch.unwrap_or(0),
        )
    }

    /// The concrete version, including prerelease and build, when nothing is a wildcard
    pub(crate) fn full(&self) -> Option<Version> {
        match (self.major, self.minor, self.patch) {
            (Some(major), Some(minor), Some(patch)) => Some(
                Version::new(major, minor, patch)
                    .with_prerelease(self.prerelease.clone())
                    .with_build(self.build.clone()),
            ),
            _ => None,
        }
    }
}

/// One whitespace-delimited piece of a range, e.g. `^1.2` or `>=1.0.0-rc.1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) operator: RangeOperator,
    pub(crate) partial: Partial,
}

impl Token {
    pub(crate) fn parse(input: &str) -> Result<Token, FormatError> {
        let (operator, len) = RangeOperator::split(input);
        let partial = Partial::parse(&input[len..]).map_err(|e| match e {
            FormatError::OutOfRange { .. } => e,
            _ => FormatError::InvalidComparator {
                input: input.to_string(),
                reason: e.to_string(),
            },
        })?;
        Ok(Token { operator, partial })
    }
}
