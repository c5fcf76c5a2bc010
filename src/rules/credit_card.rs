//! Credit-card validation: Luhn checksum plus brand prefix/length rules.
//!
//! A candidate number may contain only digits and hyphen separators.
//! After stripping separators it must pass the Luhn mod-10 checksum, and
//! its prefix and exact length must satisfy one of the brands enabled in
//! [`CardBrands`]. Brands are tried in a fixed order and the first one
//! whose prefix matches decides the outcome; later brands are never
//! consulted for that value.

use serde_json::Value;

use crate::core::{ConfigError, Model, RuleArgs};
use crate::rules::text;

// ============================================================================
// BRAND FLAGS
// ============================================================================

/// Which card brands a `creditcard` rule accepts.
///
/// The default enables nothing; chain the brand methods or use
/// [`all`](Self::all). `unknown` is a catch-all flag: when set, a number
/// whose prefix matches no enabled brand still passes.
///
/// # Examples
///
/// ```rust
/// use modelguard::rules::CardBrands;
///
/// let visa_or_mastercard = CardBrands::new().visa().mastercard();
/// let anything = CardBrands::all();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardBrands {
    mastercard: bool,
    visa: bool,
    amex: bool,
    dinersclub: bool,
    enroute: bool,
    discover: bool,
    jcb: bool,
    unknown: bool,
}

impl CardBrands {
    /// No brands enabled; every number fails until brands are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every brand enabled, including the `unknown` catch-all.
    #[must_use]
    pub fn all() -> Self {
        Self {
            mastercard: true,
            visa: true,
            amex: true,
            dinersclub: true,
            enroute: true,
            discover: true,
            jcb: true,
            unknown: true,
        }
    }

    /// Accept Mastercard (prefixes 51-55, 16 digits).
    #[must_use = "builder methods must be chained or built"]
    pub fn mastercard(mut self) -> Self {
        self.mastercard = true;
        self
    }

    /// Accept Visa (prefix 4, 16 digits).
    #[must_use = "builder methods must be chained or built"]
    pub fn visa(mut self) -> Self {
        self.visa = true;
        self
    }

    /// Accept American Express (prefixes 34/37, 15 digits).
    #[must_use = "builder methods must be chained or built"]
    pub fn amex(mut self) -> Self {
        self.amex = true;
        self
    }

    /// Accept Diners Club (prefixes 300-305/36/38, 14 digits).
    #[must_use = "builder methods must be chained or built"]
    pub fn dinersclub(mut self) -> Self {
        self.dinersclub = true;
        self
    }

    /// Accept enRoute (prefixes 2014/2149, 15 digits).
    #[must_use = "builder methods must be chained or built"]
    pub fn enroute(mut self) -> Self {
        self.enroute = true;
        self
    }

    /// Accept Discover (prefix 6011, 16 digits).
    #[must_use = "builder methods must be chained or built"]
    pub fn discover(mut self) -> Self {
        self.discover = true;
        self
    }

    /// Accept JCB (prefix 3 at 16 digits, or 2131/1800 at 15 digits).
    #[must_use = "builder methods must be chained or built"]
    pub fn jcb(mut self) -> Self {
        self.jcb = true;
        self
    }

    /// Accept numbers matching no enabled brand's prefix.
    #[must_use = "builder methods must be chained or built"]
    pub fn unknown(mut self) -> Self {
        self.unknown = true;
        self
    }
}

// ============================================================================
// LUHN CHECKSUM
// ============================================================================

/// Mod-10 digit-doubling checksum. Walking right to left, every second
/// digit is doubled (subtracting 9 when the product exceeds 9); the total
/// must be divisible by 10.
fn luhn_check(digits: &str) -> bool {
    let mut sum = 0u32;
    let mut double = false;
    for c in digits.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }
    sum % 10 == 0
}

// ============================================================================
// BRAND TABLE
// ============================================================================

const MASTERCARD_PREFIXES: [&str; 5] = ["51", "52", "53", "54", "55"];
const DINERSCLUB_PREFIXES: [&str; 8] = ["300", "301", "302", "303", "304", "305", "36", "38"];
const ENROUTE_PREFIXES: [&str; 2] = ["2014", "2149"];
const JCB15_PREFIXES: [&str; 2] = ["2131", "1800"];

fn starts_with_any(digits: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| digits.starts_with(prefix))
}

/// First enabled brand whose prefix matches decides the length check.
fn brand_check(brands: CardBrands, digits: &str) -> bool {
    let len = digits.len();
    if brands.mastercard && starts_with_any(digits, &MASTERCARD_PREFIXES) {
        return len == 16;
    }
    if brands.visa && digits.starts_with('4') {
        return len == 16;
    }
    if brands.amex && (digits.starts_with("34") || digits.starts_with("37")) {
        return len == 15;
    }
    if brands.dinersclub && starts_with_any(digits, &DINERSCLUB_PREFIXES) {
        return len == 14;
    }
    if brands.enroute && starts_with_any(digits, &ENROUTE_PREFIXES) {
        return len == 15;
    }
    if brands.discover && digits.starts_with("6011") {
        return len == 16;
    }
    if brands.jcb && digits.starts_with('3') {
        return len == 16;
    }
    if brands.jcb && starts_with_any(digits, &JCB15_PREFIXES) {
        return len == 15;
    }
    brands.unknown
}

// ============================================================================
// RULE
// ============================================================================

/// The `creditcard` rule.
///
/// Rejects immediately on any character other than digits and hyphens,
/// then checks the Luhn checksum and the enabled brands' prefix/length
/// table.
pub fn creditcard(_model: &dyn Model, value: &Value, args: &RuleArgs) -> Result<bool, ConfigError> {
    let RuleArgs::Cards(brands) = args else {
        return Err(ConfigError::BadOptions {
            rule: "creditcard".into(),
        });
    };
    let Some(raw) = text(value) else {
        return Ok(false);
    };
    if raw.chars().any(|c| !c.is_ascii_digit() && c != '-') {
        return Ok(false);
    }
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() || !luhn_check(&digits) {
        return Ok(false);
    }
    Ok(brand_check(*brands, &digits))
}

// ============================================================================
// TESTS
// ============================================================================
