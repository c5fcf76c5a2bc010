//! The boundary between the validation core and the host data model.
//!
//! The core deliberately knows nothing about attribute storage, change
//! events, or persistence. Everything it needs from the host is expressed
//! by the [`Model`] trait: reading attributes, looking up named predicate
//! methods (for string-referenced custom rules), and receiving
//! notifications when a write is rejected.

use std::borrow::Cow;

use serde_json::Value;

use crate::core::ErrorReport;

/// Fixed prefix for per-attribute failure channels.
///
/// Hosts whose observer bus keys on string channel names derive the
/// channel for an attribute as `"invalid:<attribute>"`, case-sensitive,
/// with no escaping applied to the attribute name.
pub const INVALID_CHANNEL_PREFIX: &str = "invalid";

/// Channel name for the aggregate failure notification.
const ERROR_CHANNEL: &str = "error";

/// A predicate method looked up by name and bound to a model instance.
pub type BoundMethod<'m> = Box<dyn Fn(&Value) -> bool + 'm>;

// ============================================================================
// MODEL TRAIT
// ============================================================================

/// Capabilities the host data model exposes to the validation core.
///
/// All methods have no-op defaults, so a host that needs none of the
/// optional capabilities (sibling-attribute reads, named methods,
/// notifications) can implement the trait with an empty body. The unit
/// type implements it that way for capability-less callers and tests.
pub trait Model {
    /// Current value of a committed attribute, if the model holds one.
    ///
    /// Custom rule functions use this to read sibling attributes; the
    /// candidate values being written are passed to rules directly and do
    /// not go through this accessor.
    fn attribute(&self, name: &str) -> Option<Value> {
        let _ = name;
        None
    }

    /// Looks up a named predicate method bound to this instance.
    ///
    /// String-referenced custom rules resolve through here; returning
    /// `None` for an unknown name surfaces as
    /// [`ConfigError::UnknownMethod`](crate::core::ConfigError::UnknownMethod).
    fn method(&self, name: &str) -> Option<BoundMethod<'_>> {
        let _ = name;
        None
    }

    /// Delivers a notification about a rejected write.
    ///
    /// The default discards it: a host with no listeners attached simply
    /// does not observe the failure, while the write is still rejected.
    fn notify(&self, notification: Notification<'_>) {
        let _ = notification;
    }
}

/// A host with no capabilities at all.
impl Model for () {}

// ============================================================================
// NOTIFICATIONS
// ============================================================================

/// A structured notification emitted when validation rejects a write and
/// no error callback was supplied for the call.
///
/// One [`Failed`](Notification::Failed) carrying the full report is
/// emitted first, followed by one
/// [`InvalidAttribute`](Notification::InvalidAttribute) per failing
/// attribute, in report order.
#[derive(Debug, Clone, Copy)]
pub enum Notification<'a> {
    /// Aggregate failure for the whole write attempt.
    Failed {
        /// Every failing attribute with its message.
        report: &'a ErrorReport,
    },
    /// One attribute's failure.
    InvalidAttribute {
        /// The failing attribute's exact name.
        attribute: &'a str,
        /// The message recorded for it.
        message: &'a str,
    },
}

impl Notification<'_> {
    /// The string channel name for hosts with name-keyed observer buses.
    ///
    /// `"error"` for the aggregate, `"invalid:<attribute>"` per attribute.
    #[must_use]
    pub fn channel(&self) -> Cow<'static, str> {
        match self {
            Self::Failed { .. } => Cow::Borrowed(ERROR_CHANNEL),
            Self::InvalidAttribute { attribute, .. } => {
                Cow::Owned(format!("{INVALID_CHANNEL_PREFIX}:{attribute}"))
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
