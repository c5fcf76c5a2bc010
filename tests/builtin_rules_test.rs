//! Built-in rules exercised through the engine, the way a host declares
//! them.

use modelguard::prelude::*;
use regex::Regex;
use rstest::rstest;
use serde_json::{Value, json};

fn check(spec: RuleSpec, value: Value) -> bool {
    let engine = Engine::new();
    let validators = ValidatorMap::new().attribute("field", spec);
    let mut attributes = Attributes::new();
    attributes.insert("field".into(), value);
    engine
        .validate(&(), &validators, &attributes)
        .unwrap()
        .is_empty()
}

#[rstest]
#[case(json!("hello"), true)]
#[case(json!(0), true)]
#[case(json!(false), false)]
#[case(json!(null), false)]
#[case(json!("   "), false)]
fn required(#[case] value: Value, #[case] valid: bool) {
    assert_eq!(check(RuleSpec::new().required(), value), valid);
}

#[rstest]
#[case(json!("abc"), true)]
#[case(json!("ab"), false)]
#[case(json!("abcdef"), false)]
fn length_bounds(#[case] value: Value, #[case] valid: bool) {
    assert_eq!(check(RuleSpec::new().length(3, 5), value), valid);
}

#[rstest]
#[case(json!(18), true)]
#[case(json!("21"), true)]
#[case(json!(12), false)]
#[case(json!("nope"), false)]
fn min_bound(#[case] value: Value, #[case] valid: bool) {
    assert_eq!(check(RuleSpec::new().min(18.0), value), valid);
}

#[rstest]
#[case(json!(100), true)]
#[case(json!(131), false)]
fn max_bound(#[case] value: Value, #[case] valid: bool) {
    assert_eq!(check(RuleSpec::new().max(130.0), value), valid);
}

#[rstest]
#[case(json!("90210"), true)]
#[case(json!(90210), true)] // numbers match their text form
#[case(json!("9021"), false)]
fn matches_pattern(#[case] value: Value, #[case] valid: bool) {
    let zip = Regex::new(r"^\d{5}$").unwrap();
    assert_eq!(check(RuleSpec::new().matches(zip), value), valid);
}

#[rstest]
#[case(json!("http://bassistance.de/jquery/plugin.php?bla=blu"), true)]
#[case(json!("http://bassistance"), false)]
fn url_rule(#[case] value: Value, #[case] valid: bool) {
    assert_eq!(check(RuleSpec::new().url(), value), valid);
}

#[rstest]
#[case(json!("http://bassistance"), true)]
#[case(json!("bassistance.de"), false)]
fn url2_rule(#[case] value: Value, #[case] valid: bool) {
    assert_eq!(check(RuleSpec::new().url2(), value), valid);
}

#[rstest]
#[case(json!("name@domain.de"), true)]
#[case(json!("name@domain"), false)]
fn email_rule(#[case] value: Value, #[case] valid: bool) {
    assert_eq!(check(RuleSpec::new().email(), value), valid);
}

#[rstest]
#[case(json!("name@domain"), true)]
#[case(json!("name"), false)]
fn email2_rule(#[case] value: Value, #[case] valid: bool) {
    assert_eq!(check(RuleSpec::new().email2(), value), valid);
}

#[rstest]
#[case(json!("1,234.56"), true)]
#[case(json!("-123"), true)]
#[case(json!("1,23"), false)]
fn number_rule(#[case] value: Value, #[case] valid: bool) {
    assert_eq!(check(RuleSpec::new().number(), value), valid);
}

#[rstest]
#[case(json!("1-704-555-1234"), true)]
#[case(json!("(704) 555-1234"), true)]
#[case(json!("123-456-7890"), false)]
fn phone_us_rule(#[case] value: Value, #[case] valid: bool) {
    assert_eq!(check(RuleSpec::new().phone_us(), value), valid);
}

#[rstest]
#[case("4111-1111-1111-1111", CardBrands::new().visa(), true)]
#[case("4111-1111-1111-1111", CardBrands::all(), true)]
#[case("4111-1111-1111-1110", CardBrands::new().visa(), false)]
#[case("4111-1111-1111-1110", CardBrands::all(), false)]
#[case("5111-1111-1111-1118", CardBrands::new().mastercard(), true)]
#[case("5111-1111-1111-1118", CardBrands::new().visa(), false)]
fn creditcard_rule(#[case] number: &str, #[case] brands: CardBrands, #[case] valid: bool) {
    assert_eq!(check(RuleSpec::new().creditcard(brands), json!(number)), valid);
}

#[test]
fn custom_predicate_reads_the_model() {
    struct Doc;
    impl Model for Doc {
        fn attribute(&self, name: &str) -> Option<Value> {
            (name == "max_len").then(|| json!(3))
        }
    }

    let spec = RuleSpec::new().custom(|model: &dyn Model, value: &Value| {
        let limit = model
            .attribute("max_len")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as usize;
        value.as_str().is_some_and(|s| s.len() <= limit)
    });

    let engine = Engine::new();
    let validators = ValidatorMap::new().attribute("tag", spec);
    let mut attributes = Attributes::new();
    attributes.insert("tag".into(), json!("ok"));
    assert!(engine.validate(&Doc, &validators, &attributes).unwrap().is_empty());

    attributes.insert("tag".into(), json!("too long"));
    assert!(!engine.validate(&Doc, &validators, &attributes).unwrap().is_empty());
}

#[test]
fn inverted_length_bounds_abort() {
    let engine = Engine::new();
    let validators = ValidatorMap::new().attribute("field", RuleSpec::new().length(5, 2));
    let mut attributes = Attributes::new();
    attributes.insert("field".into(), json!("hello"));
    let err = engine.validate(&(), &validators, &attributes).unwrap_err();
    assert_eq!(err, ConfigError::InvalidLengthBounds { min: 5, max: 2 });
}
