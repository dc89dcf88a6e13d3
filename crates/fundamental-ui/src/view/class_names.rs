use std::fmt;

/// Ordered class tokens: base, then modifiers, then the caller's classes.
///
/// Empty input never produces a token, so the joined string has no stray
/// spaces. Duplicates are kept; the stylesheet does not care and the order
/// stays exactly as composed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassNames(Vec<String>);

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a base class.
    pub fn base(token: impl AsRef<str>) -> Self {
        Self::new().with(token)
    }

    /// Append every whitespace-separated token of `classes`.
    pub fn with(mut self, classes: impl AsRef<str>) -> Self {
        self.0
            .extend(classes.as_ref().split_whitespace().map(str::to_string));
        self
    }

    /// Append `classes` only when `condition` holds.
    pub fn with_if(self, condition: bool, classes: impl AsRef<str>) -> Self {
        if condition {
            self.with(classes)
        } else {
            self
        }
    }

    /// Append the caller's class string, if any.
    pub fn with_opt(self, classes: Option<&str>) -> Self {
        match classes {
            Some(classes) => self.with(classes),
            None => self,
        }
    }

    /// Injected tokens followed by the existing ones.
    ///
    /// Used when a caller-supplied element takes on a component's classes: the
    /// component's tokens lead and the element's own classes keep the last word.
    pub fn merge(injected: &ClassNames, existing: &ClassNames) -> ClassNames {
        let mut tokens = injected.0.clone();
        tokens.extend(existing.0.iter().cloned());
        ClassNames(tokens)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
