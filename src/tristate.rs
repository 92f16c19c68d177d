//! # Tri-state token parsing
//!
//! Converts a case-insensitive textual token into [`TriState::True`],
//! [`TriState::False`] or [`TriState::Unknown`].
//!
//! ## Mapping
//!
//! | Lowercased token | Result    |
//! |------------------|-----------|
//! | `y`, `yes`       | `True`    |
//! | `n`, `no`        | `False`   |
//! | anything else    | `Unknown` |
//!
//! ## Entry points
//!
//! - [`parse`]: accepts anything implementing [`CaseFold`]. Non-text input
//!   fails with [`TriStateError::NotText`]; unmapped text is `Unknown`.
//! - [`parse_token`]: accepts `&str` only, so it cannot fail.
//! - [`classify`]: table lookup on a token that is already lowercased.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{diagnostics::TriStateError, value::Value};

/// Lowercased tokens that classify as [`TriState::True`].
pub const TRUE_TOKENS: [&str; 2] = ["y", "yes"];

/// Lowercased tokens that classify as [`TriState::False`].
pub const FALSE_TOKENS: [&str; 2] = ["n", "no"];

/// A boolean that may also be unset or unrecognized.
///
/// # Examples
///
/// ```rust
/// use tristate::TriState;
/// assert_eq!(TriState::from("YES"), TriState::True);
/// assert_eq!(Option::<bool>::from(TriState::Unknown), None);
/// assert_eq!(TriState::False.to_string(), "false");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    True,
    False,
    Unknown,
}

impl TriState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriState::True => "true",
            TriState::False => "false",
            TriState::Unknown => "unknown",
        }
    }

    /// Returns true unless this is `Unknown`.
    pub fn is_known(&self) -> bool {
        !matches!(self, TriState::Unknown)
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<TriState> for Option<bool> {
    fn from(state: TriState) -> Self {
        match state {
            TriState::True => Some(true),
            TriState::False => Some(false),
            TriState::Unknown => None,
        }
    }
}

impl From<bool> for TriState {
    fn from(b: bool) -> Self {
        if b {
            TriState::True
        } else {
            TriState::False
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(b: Option<bool>) -> Self {
        b.map_or(TriState::Unknown, TriState::from)
    }
}

impl From<&str> for TriState {
    fn from(token: &str) -> Self {
        parse_token(token)
    }
}

impl FromStr for TriState {
    type Err = Infallible;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Ok(parse_token(token))
    }
}

// ============================================================================
// CASE FOLDING
// ============================================================================

/// Implemented by anything that may be handed to [`parse`].
///
/// `fold_case` returns the lowercased text, or `None` when the value is not
/// text and therefore has no case-folding operation.
pub trait CaseFold {
    fn type_name(&self) -> &'static str;
    fn fold_case(&self) -> Option<String>;
}

impl CaseFold for str {
    fn type_name(&self) -> &'static str {
        "String"
    }

    fn fold_case(&self) -> Option<String> {
        Some(self.to_lowercase())
    }
}

impl CaseFold for String {
    fn type_name(&self) -> &'static str {
        "String"
    }

    fn fold_case(&self) -> Option<String> {
        self.as_str().fold_case()
    }
}

impl CaseFold for Value {
    fn type_name(&self) -> &'static str {
        Value::type_name(self)
    }

    fn fold_case(&self) -> Option<String> {
        self.as_str().and_then(CaseFold::fold_case)
    }
}

impl CaseFold for serde_json::Value {
    fn type_name(&self) -> &'static str {
        match self {
            serde_json::Value::Null => "Null",
            serde_json::Value::Bool(_) => "Bool",
            serde_json::Value::Number(_) => "Number",
            serde_json::Value::String(_) => "String",
            serde_json::Value::Array(_) => "Array",
            serde_json::Value::Object(_) => "Object",
        }
    }

    fn fold_case(&self) -> Option<String> {
        self.as_str().and_then(CaseFold::fold_case)
    }
}

/// Implements `CaseFold` for primitives that are never text.
macro_rules! impl_not_text {
    ($($ty:ty => $name:expr),* $(,)?) => {
        $(
            impl CaseFold for $ty {
                fn type_name(&self) -> &'static str {
                    $name
                }

                fn fold_case(&self) -> Option<String> {
                    None
                }
            }
        )*
    };
}

impl_not_text!(
    bool => "Bool",
    i8 => "Integer",
    i16 => "Integer",
    i32 => "Integer",
    i64 => "Integer",
    isize => "Integer",
    u8 => "Integer",
    u16 => "Integer",
    u32 => "Integer",
    u64 => "Integer",
    usize => "Integer",
    f32 => "Float",
    f64 => "Float",
);

// ============================================================================
// PARSING
// ============================================================================

/// Classifies a token that has already been lowercased.
pub fn classify(folded: &str) -> TriState {
    if TRUE_TOKENS.contains(&folded) {
        TriState::True
    } else if FALSE_TOKENS.contains(&folded) {
        TriState::False
    } else {
        trace!(target: "tristate::parse", token = %folded, "unmapped token classified as unknown");
        TriState::Unknown
    }
}

/// Parses a text token. Case-insensitive; never fails.
pub fn parse_token(token: &str) -> TriState {
    classify(&token.to_lowercase())
}

/// Parses any case-foldable value.
///
/// Fails with [`TriStateError::NotText`] when `token` is not text. Text that
/// matches neither table yields `Ok(TriState::Unknown)`.
///
/// # Examples
///
/// ```rust
/// use tristate::{parse, TriState, Value};
/// assert_eq!(parse("Yes").unwrap(), TriState::True);
/// assert_eq!(parse(&Value::from("xyz")).unwrap(), TriState::Unknown);
/// assert!(parse(&1).is_err());
/// ```
pub fn parse<T>(token: &T) -> Result<TriState, TriStateError>
where
    T: CaseFold + fmt::Display + ?Sized,
{
    match token.fold_case() {
        Some(folded) => Ok(classify(&folded)),
        None => {
            let type_name = token.type_name();
            debug!(target: "tristate::parse", type_name, "rejected non-text input");
            Err(TriStateError::not_text(token.to_string(), type_name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorType;

    #[test]
    fn tables_are_lowercase_and_disjoint() {
        for t in TRUE_TOKENS {
            assert_eq!(t, t.to_lowercase());
            assert!(!FALSE_TOKENS.contains(&t));
        }
        for f in FALSE_TOKENS {
            assert_eq!(f, f.to_lowercase());
        }
    }

    #[test]
    fn classify_expects_folded_input() {
        assert_eq!(classify("yes"), TriState::True);
        assert_eq!(classify("YES"), TriState::Unknown);
    }

    #[test]
    fn parse_token_ignores_case() {
        assert_eq!(parse_token("yEs"), TriState::True);
        assert_eq!(parse_token("nO"), TriState::False);
        assert_eq!(parse_token(" yes"), TriState::Unknown);
    }

    #[test]
    fn parse_rejects_primitives() {
        let err = parse(&1).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::TypeError);
        assert_eq!(err.to_string(), "1 must be of type string");

        let err = parse(&true).unwrap_err();
        assert!(matches!(err, TriStateError::NotText { type_name: "Bool", .. }));
    }

    #[test]
    fn conversions_round_trip_through_option() {
        for state in [TriState::True, TriState::False, TriState::Unknown] {
            assert_eq!(TriState::from(Option::<bool>::from(state)), state);
        }
        assert!(!TriState::Unknown.is_known());
        assert!(TriState::from(false).is_known());
    }

    #[test]
    fn serializes_as_lowercase_label() {
        assert_eq!(serde_json::to_string(&TriState::Unknown).unwrap(), "\"unknown\"");
        let back: TriState = serde_json::from_str("\"true\"").unwrap();
        assert_eq!(back, TriState::True);
    }
}
