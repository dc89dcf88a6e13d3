use std::fmt;

/// Categorization of prop contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropErrorKind {
    /// A required prop was missing or empty.
    Missing,
    /// A numeric prop fell outside its declared range.
    OutOfRange,
    /// Any other failed check.
    Invalid,
}

impl PropErrorKind {
    fn from_code(code: &str) -> Self {
        match code {
            "length" | "required" => PropErrorKind::Missing,
            "range" => PropErrorKind::OutOfRange,
            _ => PropErrorKind::Invalid,
        }
    }
}

impl fmt::Display for PropErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropErrorKind::Missing => write!(f, "Missing"),
            PropErrorKind::OutOfRange => write!(f, "OutOfRange"),
            PropErrorKind::Invalid => write!(f, "Invalid"),
        }
    }
}

/// A single failed check on one prop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropViolation {
    pub field: String,
    pub kind: PropErrorKind,
    pub message: String,
}

/// Every contract violation found on one component's props.
///
/// These are advisory: components still render when they are raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropError {
    pub component: &'static str,
    /// Sorted by field name.
    pub violations: Vec<PropViolation>,
}

impl PropError {
    pub fn from_validation(component: &'static str, errors: validator::ValidationErrors) -> Self {
        let mut violations = Vec::new();
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                violations.push(PropViolation {
                    field: field.to_string(),
                    kind: PropErrorKind::from_code(&err.code),
                    message,
                });
            }
        }
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        Self {
            component,
            violations,
        }
    }

    /// Violation recorded for `field`, if any.
    pub fn violation(&self, field: &str) -> Option<&PropViolation> {
        self.violations.iter().find(|v| v.field == field)
    }
}

impl fmt::Display for PropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.component)?;
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{} ({}): {}", v.field, v.kind, v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for PropError {}
