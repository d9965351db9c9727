use std::fmt;

use serde::Serialize;

/// A single validation failure: which field, which rule, which bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub rule: String,
    pub bound: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        rule: impl Into<String>,
        bound: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            bound: bound.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.rule, self.bound)
    }
}

/// Explicit, reflection-free validation. Returns every violation found,
/// not just the first one.
pub trait Validate {
    fn validate(&self) -> Vec<Violation>;
}

/// Render a violation list for log and error messages.
pub fn describe_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
