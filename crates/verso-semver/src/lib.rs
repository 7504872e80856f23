//! Semantic versioning library with npm-style range support
//!
//! This crate parses and compares SemVer 2.0.0 versions and evaluates the
//! range expressions used by npm and Deno (`^1.2.3`, `~1.2`, `1.x`,
//! `1.0.0 - 2.0.0`, `>=1.0.0 <2.0.0 || 3.x`).
//!
//! ```
//! use verso_semver::{parse, parse_range};
//!
//! let version = parse("1.4.2").unwrap();
//! let range = parse_range("^1.2 || 2.x").unwrap();
//! assert!(range.satisfies(&version));
//! assert_eq!(range.to_string(), ">=1.2.0 <2.0.0||>=2.0.0 <3.0.0");
//! ```

mod compare;
pub mod range;
mod release;
mod semver;
mod version;
mod version_parser;

pub use compare::{
    compare, difference, equals, greater_or_equal, greater_than, less_or_equal, less_than,
    not_equals,
};
pub use range::{
    comparators_satisfiable, format_range, greater_than_range, less_than_range, max_satisfying,
    min_satisfying, parse_range, range_intersects, satisfies, try_parse_range, Comparator,
    ComparatorSet, Operator, Range,
};
pub use release::{increment, IncrementOptions, ReleaseType};
pub use semver::Semver;
pub use version::{format, Identifier, Version};
pub use version_parser::{can_parse, parse, try_parse, FormatError, MAX_LENGTH};
