//! Presence, length, numeric-bound, pattern, and custom rules.

use serde_json::Value;

use crate::core::{ConfigError, Model, RuleArgs};
use crate::rules::{measure, numeric, text};

// ============================================================================
// REQUIRED
// ============================================================================

/// The presence check, also run ahead of everything else for specs marked
/// `required`.
///
/// Only null, `false`, and empty or whitespace-only strings are rejected;
/// numeric zero is a present value and passes.
pub fn required(_model: &dyn Model, value: &Value, _args: &RuleArgs) -> Result<bool, ConfigError> {
    Ok(match value {
        Value::Null => false,
        Value::Bool(present) => *present,
        Value::String(s) => s.chars().any(|c| !c.is_whitespace()),
        _ => true,
    })
}

// ============================================================================
// LENGTH
// ============================================================================

/// Inclusive length bounds. `min` defaults to 0, `max` to unbounded.
///
/// # Errors
///
/// [`ConfigError::InvalidLengthBounds`] when `min > max`: inverted bounds
/// are a declaration bug, not a failed check.
pub fn length(_model: &dyn Model, value: &Value, args: &RuleArgs) -> Result<bool, ConfigError> {
    let RuleArgs::Bounds { min, max } = args else {
        return Err(ConfigError::BadOptions {
            rule: "length".into(),
        });
    };
    let min = min.unwrap_or(0);
    if let Some(max) = *max {
        if min > max {
            return Err(ConfigError::InvalidLengthBounds { min, max });
        }
    }
    let Some(len) = measure(value) else {
        return Ok(false);
    };
    Ok(len >= min && max.is_none_or(|max| len <= max))
}

// ============================================================================
// MIN / MAX
// ============================================================================

/// Numeric lower bound; string values are coerced before comparing.
pub fn min(_model: &dyn Model, value: &Value, args: &RuleArgs) -> Result<bool, ConfigError> {
    let RuleArgs::Number(bound) = args else {
        return Err(ConfigError::BadOptions { rule: "min".into() });
    };
    Ok(numeric(value).is_some_and(|n| n >= *bound))
}

/// Numeric upper bound; string values are coerced before comparing.
pub fn max(_model: &dyn Model, value: &Value, args: &RuleArgs) -> Result<bool, ConfigError> {
    let RuleArgs::Number(bound) = args else {
        return Err(ConfigError::BadOptions { rule: "max".into() });
    };
    Ok(numeric(value).is_some_and(|n| n <= *bound))
}

// ============================================================================
// PATTERN
// ============================================================================

/// The value must match the declared regular expression. Registered under
/// both `pattern` and `matches`.
pub fn pattern(_model: &dyn Model, value: &Value, args: &RuleArgs) -> Result<bool, ConfigError> {
    let RuleArgs::Pattern(regex) = args else {
        return Err(ConfigError::BadOptions {
            rule: "pattern".into(),
        });
    };
    Ok(text(value).is_some_and(|t| regex.is_match(&t)))
}

// ============================================================================
// CUSTOM ("fn")
// ============================================================================

/// A user-supplied predicate, either given directly or referenced by the
/// name of a method on the model.
///
/// # Errors
///
/// [`ConfigError::UnknownMethod`] when a named reference resolves to no
/// method on the model; a silent skip would hide the typo.
pub fn custom(model: &dyn Model, value: &Value, args: &RuleArgs) -> Result<bool, ConfigError> {
    match args {
        RuleArgs::Func(predicate) => Ok(predicate(model, value)),
        RuleArgs::Method(name) => {
            let method = model
                .method(name)
                .ok_or_else(|| ConfigError::UnknownMethod(name.clone()))?;
            Ok(method(value))
        }
        _ => Err(ConfigError::BadOptions { rule: "fn".into() }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
