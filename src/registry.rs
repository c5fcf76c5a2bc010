//! The rule registry: a name → rule-function table.
//!
//! The registry is pure lookup state. It is seeded with the built-in
//! rules at construction and may be extended (or have entries overridden)
//! by the host application during setup, before any validation traffic
//! by contract. Lookup of an unregistered name is a fatal
//! [`ConfigError::UnknownRule`], never a silent pass: a misspelled rule
//! name in a spec must not validate as "true".

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::core::{ConfigError, Model, RuleArgs};
use crate::rules;

/// A rule-evaluation function.
///
/// Pure with respect to the registry: `(model, value, options)` in,
/// pass/fail out. `Err` is reserved for configuration mistakes (wrong
/// option shape, unresolved method names); a plain failed check is
/// `Ok(false)`.
pub type RuleFn = Arc<dyn Fn(&dyn Model, &Value, &RuleArgs) -> Result<bool, ConfigError> + Send + Sync>;

// ============================================================================
// RULE REGISTRY
// ============================================================================

/// The table of named validation rules consulted by the engine.
///
/// # Examples
///
/// ```rust
/// use modelguard::prelude::*;
///
/// let mut registry = RuleRegistry::with_builtins();
/// registry.register("even", |_model, value, _args| {
///     Ok(value.as_i64().is_some_and(|n| n % 2 == 0))
/// });
/// assert!(registry.resolve("even").is_ok());
/// ```
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<Cow<'static, str>, RuleFn>,
}

impl RuleRegistry {
    /// Creates an empty registry. Useful in tests that want full control
    /// over the rule table; production code normally starts from
    /// [`with_builtins`](Self::with_builtins).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with every built-in rule.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("required", rules::basic::required);
        registry.register("length", rules::basic::length);
        registry.register("min", rules::basic::min);
        registry.register("max", rules::basic::max);
        registry.register("pattern", rules::basic::pattern);
        registry.register("matches", rules::basic::pattern);
        registry.register("fn", rules::basic::custom);
        registry.register("url", rules::patterns::url);
        registry.register("url2", rules::patterns::url2);
        registry.register("email", rules::patterns::email);
        registry.register("email2", rules::patterns::email2);
        registry.register("number", rules::patterns::number);
        registry.register("phoneUS", rules::patterns::phone_us);
        registry.register("creditcard", rules::credit_card::creditcard);
        registry
    }

    /// Installs `rule` under `name`, replacing any previous entry.
    ///
    /// Registration is a setup-time operation: extending a registry that
    /// is already serving validation traffic is outside the contract.
    pub fn register<F>(&mut self, name: impl Into<Cow<'static, str>>, rule: F)
    where
        F: Fn(&dyn Model, &Value, &RuleArgs) -> Result<bool, ConfigError> + Send + Sync + 'static,
    {
        let name = name.into();
        let replaced = self.rules.insert(name.clone(), Arc::new(rule)).is_some();
        debug!(rule = %name, replaced, "registered validation rule");
    }

    /// Looks up the rule registered under `name`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownRule`] if nothing is registered under
    /// `name`, i.e. a configuration mistake in the caller's declarations.
    pub fn resolve(&self, name: &str) -> Result<&RuleFn, ConfigError> {
        self.rules
            .get(name)
            .ok_or_else(|| ConfigError::UnknownRule(name.to_string()))
    }

    /// True if a rule is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.rules.keys().map(Cow::as_ref).collect();
        names.sort_unstable();
        f.debug_struct("RuleRegistry").field("rules", &names).finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
