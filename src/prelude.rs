//! Convenience re-exports: `use modelguard::prelude::*;` pulls in
//! everything needed to declare validators and run the engine.

pub use crate::core::{
    Attributes, BoundMethod, ConfigError, CustomFn, DEFAULT_INVALID_MSG, DEFAULT_REQUIRED_MSG,
    ErrorReport, INVALID_CHANNEL_PREFIX, Model, Notification, RuleArgs, RuleSpec, ValidatorMap,
};
pub use crate::engine::{Engine, ErrorCallback, ValidateOptions};
pub use crate::registry::{RuleFn, RuleRegistry};
pub use crate::rules::CardBrands;

#[cfg(test)]
mod tests {
    use super::*;

    // A smoke test that the prelude alone supports the typical setup.
    #[test]
    fn prelude_covers_declaration_and_dispatch() {
        let validators = ValidatorMap::new()
            .attribute("email", RuleSpec::new().required().email())
            .attribute("card", RuleSpec::new().creditcard(CardBrands::all()));
        let engine = Engine::new();
        let report = engine
            .validate(&(), &validators, &Attributes::new())
            .unwrap();
        assert!(report.is_empty());
    }
}
