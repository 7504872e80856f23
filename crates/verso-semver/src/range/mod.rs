//! Range expressions
//!
//! A range is parsed once into OR-combined [`ComparatorSet`]s of primitive
//! [`Comparator`]s, and all evaluation works on that normalized form.

mod comparator;
mod intersects;
mod operator;
mod parser;
mod partial;
#[allow(clippy::module_inception)]
mod range;

pub use comparator::Comparator;
pub use intersects::{comparators_satisfiable, range_intersects};
pub use operator::Operator;
pub use parser::{parse_range, try_parse_range};
pub use range::{
    format_range, greater_than_range, less_than_range, max_satisfying, min_satisfying, satisfies,
    ComparatorSet, Range,
};
