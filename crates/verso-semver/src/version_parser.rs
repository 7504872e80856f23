//! Version parsing
//!
//! Versions are scanned by hand instead of matched with a regular expression.
//! The same [`Scanner`] is reused by the range grammar for partial versions
//! such as `1.2.x`.

use thiserror::Error;

use crate::version::{Identifier, Version};

/// Longest version or range string accepted by the parsers
pub const MAX_LENGTH: usize = 256;

/// Error type for version and range parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Cannot parse input as its length is too long: length is {length}, max length is {max}")]
    TooLong { length: usize, max: usize },
    #[error("Cannot parse version \"{input}\": {reason} at position {position}")]
    InvalidVersion {
        input: String,
        position: usize,
        reason: String,
    },
    #[error("Cannot parse version \"{input}\": {component} is out of range")]
    OutOfRange {
        input: String,
        component: &'static str,
    },
    #[error("Cannot parse comparator \"{input}\": {reason}")]
    InvalidComparator { input: String, reason: String },
    #[error("Cannot parse version range \"{input}\": \"{token}\" is invalid")]
    InvalidRange { input: String, token: String },
    #[error("Invalid identifier \"{input}\"")]
    InvalidIdentifier { input: String },
}

impl FormatError {
    /// The offending input, when the error carries one
    pub fn input(&self) -> Option<&str> {
        match self {
            FormatError::TooLong { .. } => None,
            FormatError::InvalidVersion { input, .. }
            | FormatError::OutOfRange { input, .. }
            | FormatError::InvalidComparator { input, .. }
            | FormatError::InvalidRange { input, .. }
            | FormatError::InvalidIdentifier { input } => Some(input),
        }
    }
}

pub(crate) fn check_length(input: &str) -> Result<(), FormatError> {
    if input.len() > MAX_LENGTH {
        return Err(FormatError::TooLong {
            length: input.len(),
            max: MAX_LENGTH,
        });
    }
    Ok(())
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Byte cursor over ASCII version grammar
pub(crate) struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Scanner {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    pub(crate) fn error(&self, reason: impl Into<String>) -> FormatError {
        FormatError::InvalidVersion {
            input: self.input.to_string(),
            position: self.pos,
            reason: reason.into(),
        }
    }

    pub(crate) fn expect(&mut self, b: u8, reason: &str) -> Result<(), FormatError> {
        if self.eat(b) {
            Ok(())
        } else {
            Err(self.error(reason))
        }
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        self.skip_while(pred);
        &self.input[start..self.pos]
    }

    /// Core version number: `0` or a digit run without a leading zero
    pub(crate) fn number(&mut self, component: &'static str) -> Result<u64, FormatError> {
        let start = self.pos;
        let digits = self.take_while(|b| b.is_ascii_digit());
        if digits.is_empty() {
            return Err(self.error(format!("expected {} version number", component)));
        }
        if digits.len() > 1 && digits.starts_with('0') {
            self.pos = start;
            return Err(self.error(format!("{} version has a leading zero", component)));
        }
        digits.parse().map_err(|_| FormatError::OutOfRange {
            input: self.input.to_string(),
            component,
        })
    }

    /// Core version number or one of the wildcards `x`, `X`, `*`
    pub(crate) fn number_or_wildcard(&mut self, component: &'static str) -> Result<Option<u64>, FormatError> {
        match self.peek() {
            Some(b'x' | b'X' | b'*') => {
                self.pos += 1;
                Ok(None)
            }
            _ => self.number(component).map(Some),
        }
    }

    /// Dot-separated prerelease identifiers
    pub(crate) fn prerelease(&mut self) -> Result<Vec<Identifier>, FormatError> {
        let mut identifiers = Vec::new();
        loop {
            let start = self.pos;
            let id = self.take_while(is_identifier_byte);
            if id.is_empty() {
                return Err(self.error("empty prerelease identifier"));
            }
            if id.bytes().all(|b| b.is_ascii_digit()) {
                if id.len() > 1 && id.starts_with('0') {
                    self.pos = start;
                    return Err(self.error("numeric prerelease identifier has a leading zero"));
                }
                let n = id.parse().map_err(|_| FormatError::OutOfRange {
                    input: self.input.to_string(),
                    component: "prerelease identifier",
                })?;
                identifiers.push(Identifier::Numeric(n));
            } else {
                identifiers.push(Identifier::AlphaNumeric(id.to_string()));
            }
            if !self.eat(b'.') {
                return Ok(identifiers);
            }
        }
    }

    /// Dot-separated build identifiers, leading zeros allowed
    pub(crate) fn build(&mut self) -> Result<Vec<String>, FormatError> {
        let mut identifiers = Vec::new();
        loop {
            let id = self.take_while(is_identifier_byte);
            if id.is_empty() {
                return Err(self.error("empty build identifier"));
            }
            identifiers.push(id.to_string());
            if !self.eat(b'.') {
                return Ok(identifiers);
            }
        }
    }
}

/// Parse a version string such as `1.2.3-beta.1+build.5`
pub fn parse(input: &str) -> Result<Version, FormatError> {
    check_length(input)?;
    let mut scanner = Scanner::new(input.trim());

    scanner.eat(b'v');
    let major = scanner.number("major")?;
    scanner.expect(b'.', "expected '.' after major version")?;
    let minor = scanner.number("minor")?;
    scanner.expect(b'.', "expected '.' after minor version")?;
    let patch = scanner.number("patch")?;

    let prerelease = if scanner.eat(b'-') {
        scanner.prerelease()?
    } else {
        Vec::new()
    };
    let build = if scanner.eat(b'+') {
        scanner.build()?
    } else {
        Vec::new()
    };

    if !scanner.is_done() {
        return Err(scanner.error("unexpected character"));
    }

    Ok(Version::new(major, minor, patch)
        .with_prerelease(prerelease)
        .with_build(build))
}

/// Parse a version, returning `None` instead of an error
pub fn try_parse(input: &str) -> Option<Version> {
    parse(input).ok()
}

/// Check if the input is a valid version
pub fn can_parse(input: &str) -> bool {
    parse(input).is_ok()
}

/// Parse a standalone dotted prerelease string such as `beta.1`
pub(crate) fn parse_prerelease(input: &str) -> Result<Vec<Identifier>, FormatError> {
    let mut scanner = Scanner::new(input);
    match scanner.prerelease() {
        Ok(ids) if scanner.is_done() => Ok(ids),
        _ => Err(FormatError::InvalidIdentifier {
            input: input.to_string(),
        }),
    }
}

/// Parse a standalone dotted build string such as `exp.sha.5114f85`
pub(crate) fn parse_build(input: &str) -> Result<Vec<String>, FormatError> {
    let mut scanner = Scanner::new(input);
    match scanner.build() {
        Ok(ids) if scanner.is_done() => Ok(ids),
        _ => Err(FormatError::InvalidIdentifier {
            input: input.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let v = parse("1.2.3").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 2, 3));
        assert!(v.prerelease().is_empty());
        assert!(v.build().is_empty());
    }

    #[test]
    fn test_parse_prerelease_and_build() {
        let v = parse("1.2.3-alpha.10.beta-2+build.007").unwrap();
        assert_eq!(
            v.prerelease(),
            &[
                Identifier::from("alpha"),
                Identifier::Numeric(10),
                Identifier::from("beta-2"),
            ]
        );
        assert_eq!(v.build(), &["build".to_string(), "007".to_string()]);

        let v = parse("1.0.0-0a.1").unwrap();
        assert_eq!(v.prerelease(), &[Identifier::from("0a"), Identifier::Numeric(1)]);
    }

    #[test]
    fn test_parse_trims_and_accepts_v_prefix() {
        assert_eq!(parse("  1.2.3\n").unwrap(), Version::new(1, 2, 3));
        assert_eq!(parse("v1.2.3").unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_fails() {
        for input in [
            "",
            "not-a-version",
            "1",
            "1.2",
            "1.2.3.4",
            "01.2.3",
            "1.02.3",
            "1.2.03",
            "1.2.3-",
            "1.2.3-01",
            "1.2.3-alpha..1",
            "1.2.3+",
            "1.2.3+build..1",
            "1.2.3-al_pha",
            "1.2.3 4",
            "V1.2.3",
            "=1.2.3",
            "1.2.x",
            "-1.2.3",
            "1.2.3.beta",
        ] {
            assert!(parse(input).is_err(), "{} should not parse", input);
        }
    }

    #[test]
    fn test_parse_error_position() {
        let err = parse("1.02.3").unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidVersion {
                input: "1.02.3".to_string(),
                position: 2,
                reason: "minor version has a leading zero".to_string(),
            }
        );
        assert_eq!(err.input(), Some("1.02.3"));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(
            parse("18446744073709551616.0.0").unwrap_err(),
            FormatError::OutOfRange {
                input: "18446744073709551616.0.0".to_string(),
                component: "major",
            }
        );
        assert!(parse("18446744073709551615.0.0").is_ok());
        assert!(matches!(
            parse("1.0.0-99999999999999999999"),
            Err(FormatError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_too_long() {
        let long = format!("1.2.3-{}", "a".repeat(MAX_LENGTH));
        assert_eq!(
            parse(&long).unwrap_err(),
            FormatError::TooLong {
                length: long.len(),
                max: MAX_LENGTH
            }
        );
        let padded = format!("1.2.3-{}", "a".repeat(MAX_LENGTH - 6));
        assert!(parse(&padded).is_ok());
    }

    #[test]
    fn test_try_parse_and_can_parse() {
        assert!(can_parse("1.2.3"));
        assert!(!can_parse("not-a-version"));
        assert!(!can_parse("1.2.3.4"));
        assert_eq!(try_parse("1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(try_parse("1.2"), None);
    }

    #[test]
    fn test_parse_standalone_identifiers() {
        assert_eq!(
            parse_prerelease("rc.1").unwrap(),
            vec![Identifier::from("rc"), Identifier::Numeric(1)]
        );
        assert!(parse_prerelease("rc.01").is_err());
        assert!(parse_prerelease("").is_err());
        assert_eq!(parse_build("001.sha").unwrap(), vec!["001", "sha"]);
        assert!(parse_build("a+b").is_err());
    }
}
