//! Core types: errors, the host-model boundary, and rule declarations.
//!
//! This module contains the vocabulary shared by the registry, the engine,
//! and the built-in rules:
//!
//! - **Errors**: [`ConfigError`], [`ErrorReport`]
//! - **Host boundary**: [`Model`], [`Notification`], [`BoundMethod`]
//! - **Declarations**: [`RuleSpec`], [`ValidatorMap`], [`RuleArgs`],
//!   [`Attributes`]

pub mod error;
pub mod model;
pub mod spec;

pub use error::{ConfigError, DEFAULT_INVALID_MSG, DEFAULT_REQUIRED_MSG, ErrorReport};
pub use model::{BoundMethod, INVALID_CHANNEL_PREFIX, Model, Notification};
pub use spec::{Attributes, CustomFn, RuleArgs, RuleSpec, ValidatorMap};
