//! Error types: configuration errors and the per-call error report.
//!
//! Two distinct taxonomies live here and must never mix:
//!
//! - **Validation failures** are data-dependent and expected. They are
//!   collected into an [`ErrorReport`] and handed back to the host; the
//!   write is rejected but nothing is raised.
//! - **Configuration errors** ([`ConfigError`]) are developer mistakes in
//!   the rule declarations. They abort the validation call immediately and
//!   are never mapped into a report.

use std::collections::BTreeMap;

use serde::Serialize;

/// Default message recorded when a rule fails and the spec declares no
/// `msg`. Intentionally anemic; hosts that want richer text set `msg`.
pub const DEFAULT_INVALID_MSG: &str = "invalid";

/// Default message recorded when the `required` check fails. Overridable
/// per model via [`ValidatorMap::required_msg`](crate::core::ValidatorMap::required_msg).
pub const DEFAULT_REQUIRED_MSG: &str = "required";

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

/// A mistake in the model's rule declarations, detected at validation time.
///
/// These indicate bugs in the application's `ValidatorMap`, not problems
/// with the data being validated. They propagate out of
/// [`Engine::validate`](crate::engine::Engine::validate) as `Err` and are
/// fatal to that validation attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A rule-spec names a rule the registry has never heard of.
    #[error("rule `{0}` is not registered")]
    UnknownRule(String),

    /// A `length` rule was declared with `min > max`.
    #[error("length: min {min} must not exceed max {max}")]
    InvalidLengthBounds {
        /// Declared lower bound.
        min: usize,
        /// Declared upper bound.
        max: usize,
    },

    /// A string `fn` reference resolved to no method on the model.
    #[error("model has no method named `{0}`")]
    UnknownMethod(String),

    /// A rule received options of a shape it cannot interpret, e.g.
    /// `length` given a regular expression.
    #[error("rule `{rule}` was given options of the wrong shape")]
    BadOptions {
        /// The rule that rejected its options.
        rule: String,
    },
}

// ============================================================================
// ERROR REPORT
// ============================================================================

/// The aggregate outcome of one validation call.
///
/// Maps each failing attribute to a single message; attributes that passed
/// have no entry, so an empty report means the write may be committed.
/// Reports are constructed fresh per call and discarded afterwards.
///
/// Iteration order is the attribute names' lexicographic order, which makes
/// per-attribute notification delivery deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorReport {
    entries: BTreeMap<String, String>,
}

impl ErrorReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if every validated attribute passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The message recorded for `attribute`, if it failed.
    #[must_use]
    pub fn message(&self, attribute: &str) -> Option<&str> {
        self.entries.get(attribute).map(String::as_str)
    }

    /// Records a failure for `attribute`. A later insert for the same
    /// attribute replaces the earlier message.
    pub fn insert(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(attribute.into(), message.into());
    }

    /// Iterates `(attribute, message)` pairs in attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(attribute, message)| (attribute.as_str(), message.as_str()))
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "validation failed for {} attribute(s):", self.len())?;
        for (attribute, message) in self.iter() {
            writeln!(f, "  {attribute}: {message}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ErrorReport {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_means_valid() {
        let report = ErrorReport::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(report.message("email"), None);
    }

    #[test]
    fn insert_and_lookup() {
        let mut report = ErrorReport::new();
        report.insert("email", "bad format");
        assert!(!report.is_empty());
        assert_eq!(report.message("email"), Some("bad format"));
    }

    #[test]
    fn later_insert_replaces_message() {
        let mut report = ErrorReport::new();
        report.insert("email", "first");
        report.insert("email", "second");
        assert_eq!(report.len(), 1);
        assert_eq!(report.message("email"), Some("second"));
    }

    #[test]
    fn iteration_is_sorted_by_attribute() {
        let mut report = ErrorReport::new();
        report.insert("zip", "invalid");
        report.insert("age", "invalid");
        let names: Vec<&str> = report.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["age", "zip"]);
    }

    #[test]
    fn serializes_as_flat_map() {
        let mut report = ErrorReport::new();
        report.insert("email", "required");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({"email": "required"}));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::UnknownRule("emial".into());
        assert_eq!(err.to_string(), "rule `emial` is not registered");

        let err = ConfigError::InvalidLengthBounds { min: 5, max: 2 };
        assert_eq!(err.to_string(), "length: min 5 must not exceed max 2");
    }
}
