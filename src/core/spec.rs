//! Rule declarations: per-attribute specs and the per-model validator map.
//!
//! A [`RuleSpec`] declares which rules one attribute must satisfy, in
//! order, plus two reserved settings that are never dispatched as rules:
//! a default failure message (`msg`) and the `required` marker, which is
//! always evaluated first and short-circuits everything else. A
//! [`ValidatorMap`] collects the specs for a whole model definition and is
//! shared read-only across instances.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::core::error::DEFAULT_REQUIRED_MSG;
use crate::core::model::Model;
use crate::rules::CardBrands;

/// A proposed attribute-write batch, as handed over by the host model.
pub type Attributes = serde_json::Map<String, Value>;

/// A custom predicate given directly in a rule-spec, invoked with the
/// model instance so it can read sibling attributes or call methods.
pub type CustomFn = Arc<dyn Fn(&dyn Model, &Value) -> bool + Send + Sync>;

// ============================================================================
// RULE OPTIONS
// ============================================================================

/// Typed options for one rule entry in a [`RuleSpec`].
///
/// Each built-in rule accepts exactly one shape and returns
/// [`ConfigError::BadOptions`](crate::core::ConfigError::BadOptions) for
/// any other; custom rules interpret their options however they like.
#[derive(Clone)]
pub enum RuleArgs {
    /// No options (rules like `url` or `email` take none).
    None,
    /// A boolean switch, e.g. `email: true`.
    Flag(bool),
    /// A numeric bound for `min` / `max`.
    Number(f64),
    /// Length bounds; `min` defaults to 0 and `max` to unbounded.
    Bounds {
        /// Inclusive lower bound on length.
        min: Option<usize>,
        /// Inclusive upper bound on length.
        max: Option<usize>,
    },
    /// A compiled regular expression for `pattern` / `matches`.
    Pattern(Regex),
    /// Enabled card brands for `creditcard`.
    Cards(CardBrands),
    /// A direct custom predicate for `fn`.
    Func(CustomFn),
    /// The name of a predicate method on the model, for `fn`.
    Method(String),
}

impl fmt::Debug for RuleArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
            Self::Number(bound) => f.debug_tuple("Number").field(bound).finish(),
            Self::Bounds { min, max } => f
                .debug_struct("Bounds")
                .field("min", min)
                .field("max", max)
                .finish(),
            Self::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Self::Cards(brands) => f.debug_tuple("Cards").field(brands).finish(),
            Self::Func(_) => write!(f, "Func(..)"),
            Self::Method(name) => f.debug_tuple("Method").field(name).finish(),
        }
    }
}

// ============================================================================
// RULE SPEC
// ============================================================================

/// The validation declaration for a single attribute.
///
/// Rules are evaluated in the order they were added, stopping at the
/// first failure. The `required` marker is not an ordinary entry: when
/// set, the presence check runs before everything else and, on failure,
/// suppresses the remaining rules entirely.
///
/// # Examples
///
/// ```rust
/// use modelguard::prelude::*;
///
/// let spec = RuleSpec::new()
///     .required()
///     .email()
///     .msg("Email must be in the right format");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSpec {
    rules: Vec<(Cow<'static, str>, RuleArgs)>,
    msg: Option<Cow<'static, str>>,
    required: bool,
}

impl RuleSpec {
    /// Creates an empty spec. An empty spec accepts every value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the attribute as required: null, `false`, and
    /// empty/whitespace-only strings are rejected before any other rule
    /// runs.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the message recorded when a rule (other than the required
    /// check) fails for this attribute. Defaults to `"invalid"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn msg(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.msg = Some(msg.into());
        self
    }

    /// Appends a rule entry by registry name. The reserved settings
    /// (`msg`, `required`) are struct fields, so no name collision with
    /// them is possible here.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, name: impl Into<Cow<'static, str>>, args: RuleArgs) -> Self {
        self.rules.push((name.into(), args));
        self
    }

    // ── sugar for the built-in rules ─────────────────────────────────────

    /// Length bounds; pass `None` to leave a side unbounded.
    #[must_use = "builder methods must be chained or built"]
    pub fn length(self, min: impl Into<Option<usize>>, max: impl Into<Option<usize>>) -> Self {
        self.rule(
            "length",
            RuleArgs::Bounds {
                min: min.into(),
                max: max.into(),
            },
        )
    }

    /// Numeric lower bound (string values are coerced).
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, bound: f64) -> Self {
        self.rule("min", RuleArgs::Number(bound))
    }

    /// Numeric upper bound (string values are coerced).
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, bound: f64) -> Self {
        self.rule("max", RuleArgs::Number(bound))
    }

    /// The value must match `pattern`.
    #[must_use = "builder methods must be chained or built"]
    pub fn matches(self, pattern: Regex) -> Self {
        self.rule("matches", RuleArgs::Pattern(pattern))
    }

    /// Strict IRI grammar requiring a top-level domain or IPv4 literal.
    #[must_use = "builder methods must be chained or built"]
    pub fn url(self) -> Self {
        self.rule("url", RuleArgs::Flag(true))
    }

    /// Same grammar as [`url`](Self::url) with the TLD optional.
    #[must_use = "builder methods must be chained or built"]
    pub fn url2(self) -> Self {
        self.rule("url2", RuleArgs::Flag(true))
    }

    /// RFC-2822-derived email grammar, TLD required.
    #[must_use = "builder methods must be chained or built"]
    pub fn email(self) -> Self {
        self.rule("email", RuleArgs::Flag(true))
    }

    /// Same grammar as [`email`](Self::email) with the TLD optional.
    #[must_use = "builder methods must be chained or built"]
    pub fn email2(self) -> Self {
        self.rule("email2", RuleArgs::Flag(true))
    }

    /// Locale-format numeric string (optional comma thousands groups).
    #[must_use = "builder methods must be chained or built"]
    pub fn number(self) -> Self {
        self.rule("number", RuleArgs::Flag(true))
    }

    /// Ten-digit US phone number, whitespace ignored.
    #[must_use = "builder methods must be chained or built"]
    pub fn phone_us(self) -> Self {
        self.rule("phoneUS", RuleArgs::Flag(true))
    }

    /// Credit-card number: Luhn checksum plus the enabled brands'
    /// prefix and length rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn creditcard(self, brands: CardBrands) -> Self {
        self.rule("creditcard", RuleArgs::Cards(brands))
    }

    /// A custom predicate invoked with the model instance and the value.
    #[must_use = "builder methods must be chained or built"]
    pub fn custom<F>(self, predicate: F) -> Self
    where
        F: Fn(&dyn Model, &Value) -> bool + Send + Sync + 'static,
    {
        self.rule("fn", RuleArgs::Func(Arc::new(predicate)))
    }

    /// A custom predicate referenced by method name, resolved against the
    /// model at validation time.
    #[must_use = "builder methods must be chained or built"]
    pub fn method(self, name: impl Into<String>) -> Self {
        self.rule("fn", RuleArgs::Method(name.into()))
    }

    // ── accessors used by the engine ─────────────────────────────────────

    /// Whether the required-first check applies.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The declared failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.msg.as_deref()
    }

    /// The rule entries in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &RuleArgs)> {
        self.rules.iter().map(|(name, args)| (name.as_ref(), args))
    }
}

// ============================================================================
// VALIDATOR MAP
// ============================================================================

/// The full attribute → [`RuleSpec`] mapping for one model definition.
///
/// Built once when the model type is defined, then shared read-only by
/// every instance. Attributes with no entry are implicitly valid.
///
/// # Examples
///
/// ```rust
/// use modelguard::prelude::*;
///
/// let validators = ValidatorMap::new()
///     .attribute("email", RuleSpec::new().required().email())
///     .attribute("age", RuleSpec::new().min(0.0).max(130.0))
///     .required_msg("this one is mandatory");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidatorMap {
    specs: std::collections::BTreeMap<String, RuleSpec>,
    required_msg: Option<Cow<'static, str>>,
}

impl ValidatorMap {
    /// Creates an empty map. With no specs, every write is valid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the spec for `name`.
    #[must_use = "builder methods must be chained or built"]
    pub fn attribute(mut self, name: impl Into<String>, spec: RuleSpec) -> Self {
        self.specs.insert(name.into(), spec);
        self
    }

    /// Overrides the message recorded for required-check failures on any
    /// attribute of this model. Defaults to `"required"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn required_msg(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.required_msg = Some(msg.into());
        self
    }

    /// The spec declared for `name`, if any.
    #[must_use]
    pub fn spec(&self, name: &str) -> Option<&RuleSpec> {
        self.specs.get(name)
    }

    /// The message to record when a required check fails.
    #[must_use]
    pub fn required_failure_msg(&self) -> &str {
        self.required_msg.as_deref().unwrap_or(DEFAULT_REQUIRED_MSG)
    }

    /// True if no attribute has a spec.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Number of attributes with specs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
