//! The validation engine: drives rule dispatch over a proposed write.
//!
//! The engine owns a [`RuleRegistry`] and evaluates a [`ValidatorMap`]
//! against an attribute batch. Two entry points cover the two host
//! postures: [`Engine::validate`] returns the raw [`ErrorReport`] for
//! hosts that route failures themselves, and [`Engine::perform_validation`]
//! additionally handles failure delivery (an error callback when one is
//! supplied, model notifications otherwise) and answers the commit/reject
//! question with a bool.
//!
//! Configuration mistakes (unknown rule names, inverted length bounds,
//! unresolved method references) abort validation with a
//! [`ConfigError`]; they never masquerade as attribute failures.

use tracing::{debug, trace};

use crate::core::{
    Attributes, ConfigError, DEFAULT_INVALID_MSG, ErrorReport, Model, Notification, RuleArgs,
    ValidatorMap,
};
use crate::registry::RuleRegistry;
use crate::rules::basic;

// ============================================================================
// OPTIONS
// ============================================================================

/// Per-call error delivery callback.
pub type ErrorCallback<'a> = Box<dyn FnMut(&dyn Model, &ErrorReport) + 'a>;

/// Per-call options for [`Engine::perform_validation`].
///
/// Supplying an error callback replaces model notifications for that call:
/// the callback is invoked exactly once with the full report and no
/// [`Notification`] is delivered.
#[derive(Default)]
pub struct ValidateOptions<'a> {
    error: Option<ErrorCallback<'a>>,
}

impl<'a> ValidateOptions<'a> {
    /// Options with no callback; failures go out as model notifications.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes failures to `callback` instead of model notifications.
    #[must_use = "builder methods must be chained or built"]
    pub fn on_error<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&dyn Model, &ErrorReport) + 'a,
    {
        self.error = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for ValidateOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidateOptions")
            .field("error", &self.error.as_ref().map(|_| ".."))
            .finish()
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Evaluates validator maps against proposed attribute writes.
///
/// # Examples
///
/// ```rust
/// use modelguard::prelude::*;
/// use serde_json::json;
///
/// let validators = ValidatorMap::new()
///     .attribute("age", RuleSpec::new().min(0.0).max(130.0));
///
/// let engine = Engine::new();
/// let mut attrs = Attributes::new();
/// attrs.insert("age".into(), json!(200));
///
/// let report = engine.validate(&(), &validators, &attrs).unwrap();
/// assert_eq!(report.message("age"), Some("invalid"));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    registry: RuleRegistry,
}

impl Engine {
    /// An engine over the built-in rule set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_builtins(),
        }
    }

    /// An engine over a caller-assembled registry.
    #[must_use]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// The engine's rule registry.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Mutable access for setup-time rule registration.
    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    /// Evaluates every declared attribute in `attributes` and collects
    /// the failures.
    ///
    /// Attributes without a spec in `validators` are skipped. For each
    /// declared attribute the `required` marker is checked first; on
    /// failure the map's required message is recorded and no further
    /// rules run for that attribute. Otherwise the spec's rules run in
    /// declaration order, stopping at the first failure, which is
    /// recorded under the spec's message (default `"invalid"`). At most
    /// one message per attribute.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from rule resolution or evaluation aborts the
    /// whole call; partial reports are never returned alongside one.
    pub fn validate(
        &self,
        model: &dyn Model,
        validators: &ValidatorMap,
        attributes: &Attributes,
    ) -> Result<ErrorReport, ConfigError> {
        let mut report = ErrorReport::new();
        for (name, value) in attributes {
            let Some(spec) = validators.spec(name) else {
                trace!(attribute = %name, "no spec declared, skipping");
                continue;
            };
            if spec.is_required() && !basic::required(model, value, &RuleArgs::None)? {
                trace!(attribute = %name, "required check failed");
                report.insert(name, validators.required_failure_msg());
                continue;
            }
            for (rule_name, args) in spec.rules() {
                let rule = self.registry.resolve(rule_name)?;
                if !rule(model, value, args)? {
                    trace!(attribute = %name, rule = %rule_name, "rule failed");
                    report.insert(name, spec.message().unwrap_or(DEFAULT_INVALID_MSG));
                    break;
                }
            }
        }
        debug!(
            attributes = attributes.len(),
            failures = report.len(),
            "validation pass complete"
        );
        Ok(report)
    }

    /// Validates and delivers failures, returning whether the write may
    /// be committed.
    ///
    /// On failure, a supplied error callback receives the full report
    /// exactly once and suppresses notifications. Without a callback the
    /// model gets one [`Notification::Failed`] followed by one
    /// [`Notification::InvalidAttribute`] per failing attribute, in
    /// report order.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] from [`validate`](Self::validate)
    /// before any delivery happens.
    pub fn perform_validation(
        &self,
        model: &dyn Model,
        validators: &ValidatorMap,
        attributes: &Attributes,
        options: &mut ValidateOptions<'_>,
    ) -> Result<bool, ConfigError> {
        let report = self.validate(model, validators, attributes)?;
        if report.is_empty() {
            return Ok(true);
        }
        if let Some(callback) = options.error.as_mut() {
            callback(model, &report);
        } else {
            model.notify(Notification::Failed { report: &report });
            for (attribute, message) in report.iter() {
                model.notify(Notification::InvalidAttribute { attribute, message });
            }
        }
        Ok(false)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
