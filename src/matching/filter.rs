//! Purchaser name filtering.
//!
//! Patterns match at the start of the name only (a prefix match), so `J`
//! accepts `Jane` but not `Maja`. Each name has at most one pattern; a
//! missing pattern accepts every name.

use regex::Regex;

use crate::lookup::Party;

/// A regex applied at the start of a name.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    regex: Regex,
}

impl NamePattern {
    /// Compiles `pattern` so it only matches at the start of the input.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        // Validate the bare pattern first so errors point at the user's text.
        Regex::new(pattern)?;
        let regex = Regex::new(&format!("^(?:{pattern})"))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Returns the pattern as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns `true` if the pattern matches at the start of `name`.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Optional first- and last-name constraints on the purchaser.
#[derive(Debug, Clone, Default)]
pub struct PurchaserFilter {
    first_name: Option<NamePattern>,
    last_name: Option<NamePattern>,
}

impl PurchaserFilter {
    /// Creates a filter with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrains the purchaser's first name.
    #[must_use]
    pub fn with_first_name(mut self, pattern: NamePattern) -> Self {
        self.first_name = Some(pattern);
        self
    }

    /// Constrains the purchaser's last name.
    #[must_use]
    pub fn with_last_name(mut self, pattern: NamePattern) -> Self {
        self.last_name = Some(pattern);
        self
    }

    #[must_use]
    pub const fn first_name(&self) -> Option<&NamePattern> {
        self.first_name.as_ref()
    }

    #[must_use]
    pub const fn last_name(&self) -> Option<&NamePattern> {
        self.last_name.as_ref()
    }

    /// Returns the number of configured patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.first_name.is_some()) + usize::from(self.last_name.is_some())
    }

    /// Returns true if no pattern is configured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }

    /// Returns `true` if every configured pattern matches `purchaser`.
    #[must_use]
    pub fn accepts(&self, purchaser: &Party) -> bool {
        let first_ok = self
            .first_name
            .as_ref()
            .is_none_or(|p| p.matches(purchaser.first_name()));
        let last_ok = self
            .last_name
            .as_ref()
            .is_none_or(|p| p.matches(purchaser.last_name()));

        first_ok && last_ok
    }
}
