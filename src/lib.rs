//! # modelguard
//!
//! A declarative attribute-validation layer for data-model frameworks.
//!
//! Consumers attach a [`ValidatorMap`](core::ValidatorMap) to a model
//! definition: a mapping from attribute name to a [`RuleSpec`](core::RuleSpec)
//! naming the rules that attribute must satisfy. Every proposed
//! attribute-write batch is checked by the [`Engine`](engine::Engine) before
//! the host commits it; failures are surfaced through a per-call error
//! callback or through structured notifications, never through panics.
//!
//! ## Quick Start
//!
//! ```rust
//! use modelguard::prelude::*;
//! use serde_json::json;
//!
//! let validators = ValidatorMap::new()
//!     .attribute("email", RuleSpec::new().required().email().msg("bad format"));
//!
//! let engine = Engine::new();
//! let mut attrs = Attributes::new();
//! attrs.insert("email".into(), json!("a@b.com"));
//!
//! let report = engine.validate(&(), &validators, &attrs).unwrap();
//! assert!(report.is_empty());
//! ```
//!
//! ## Architecture
//!
//! - [`registry::RuleRegistry`] — the name → rule-function table, seeded
//!   with the built-in rules and extensible at setup time.
//! - [`engine::Engine`] — orchestration: required-first short-circuiting,
//!   first-failure short-circuiting, error aggregation, and the
//!   callback-or-notification dispatch contract.
//! - [`rules`] — the built-in rule library: presence, length, numeric
//!   bounds, pattern/regex families, and credit-card checks.
//! - [`core::Model`] — the narrow boundary the host data model implements:
//!   attribute reads, named-method lookup, and notification delivery.
//!
//! ## Failure taxonomy
//!
//! Validation failures (data-dependent) are reported through
//! [`ErrorReport`](core::ErrorReport) and never raised. Configuration
//! errors (developer mistakes: unknown rule names, inverted length bounds,
//! unresolved method references) are returned as
//! [`ConfigError`](core::ConfigError) and abort the validation call.

pub mod core;
pub mod engine;
pub mod prelude;
pub mod registry;
pub mod rules;
