use serde::Serialize;
use std::fmt;

/// A single validation failure attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

impl Violation {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Joins violations into the human-readable string returned in 400 bodies.
pub fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_semicolons() {
        let violations = vec![
            Violation::new("name", "must not be blank"),
            Violation::new("price", "must not be negative"),
        ];
        assert_eq!(
            join_violations(&violations),
            "name: must not be blank; price: must not be negative"
        );
    }
}
