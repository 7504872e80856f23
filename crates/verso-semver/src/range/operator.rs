//! Operator types for primitive comparators

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version_parser::FormatError;

/// Comparison operators for primitive comparators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal, written bare or as `=`
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Greater than (>)
    Greater,
    /// Greater than or equal (>=)
    GreaterOrEqual,
    /// Less than (<)
    Less,
    /// Less than or equal (<=)
    LessOrEqual,
}

impl Operator {
    /// Get the string representation of the operator
    ///
    /// `Equal` is empty since exact comparators are written as a bare version.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "",
            Operator::NotEqual => "!=",
            Operator::Greater => ">",
            Operator::GreaterOrEqual => ">=",
            Operator::Less => "<",
            Operator::LessOrEqual => "<=",
        }
    }

    /// Check if a comparison result satisfies this operator
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::Greater => ordering == Ordering::Greater,
            Operator::GreaterOrEqual => ordering != Ordering::Less,
            Operator::Less => ordering == Ordering::Less,
            Operator::LessOrEqual => ordering != Ordering::Greater,
        }
    }

    /// Lower bound operators, `>` and `>=`
    pub fn is_greater(&self) -> bool {
        matches!(self, Operator::Greater | Operator::GreaterOrEqual)
    }

    /// Upper bound operators, `<` and `<=`
    pub fn is_less(&self) -> bool {
        matches!(self, Operator::Less | Operator::LessOrEqual)
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["", "=", "!=", ">", ">=", "<", "<="]
    }
}

impl FromStr for Operator {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "=" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            ">" => Ok(Operator::Greater),
            ">=" => Ok(Operator::GreaterOrEqual),
            "<" => Ok(Operator::Less),
            "<=" => Ok(Operator::LessOrEqual),
            _ => Err(FormatError::InvalidComparator {
                input: s.to_string(),
                reason: "invalid operator".to_string(),
            }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
