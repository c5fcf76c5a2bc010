//! The built-in rule library.
//!
//! Every function here has the [`RuleFn`](crate::registry::RuleFn)
//! signature and is installed by
//! [`RuleRegistry::with_builtins`](crate::registry::RuleRegistry::with_builtins):
//!
//! - [`basic`] — `required`, `length`, `min`, `max`, `pattern`/`matches`,
//!   and the custom `fn` rule.
//! - [`patterns`] — the regex family: `url`, `url2`, `email`, `email2`,
//!   `number`, `phoneUS`.
//! - [`credit_card`] — `creditcard`: Luhn checksum plus brand
//!   prefix/length rules.
//!
//! Attribute values arrive as [`serde_json::Value`]; the coercion helpers
//! below define how non-string values participate in string- and
//! number-shaped rules. A value a rule cannot interpret fails that rule;
//! it is a data problem, not a configuration error.

use std::borrow::Cow;

use serde_json::Value;

pub mod basic;
pub mod credit_card;
pub mod patterns;

pub use credit_card::CardBrands;

/// String form of a value for regex-shaped rules.
///
/// Strings match as-is; numbers and booleans match their canonical text.
/// Null, arrays, and objects have no text form and fail the rule.
pub(crate) fn text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Numeric form of a value for `min` / `max`.
///
/// Numbers pass through; numeric strings are parsed. Everything else has
/// no numeric form and fails the rule.
pub(crate) fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Length of a value for the `length` rule.
///
/// Strings count characters; arrays and objects count elements. Other
/// values expose no length and fail the rule.
pub(crate) fn measure(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        Value::Object(fields) => Some(fields.len()),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
