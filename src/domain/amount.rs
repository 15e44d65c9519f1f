//! Amount type
//!
//! Exact decimal amount for income and expense items.
//! Carried as text on the wire so no binary floating point is involved.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount represents an exact decimal value.
///
/// The scale given at parse time is kept, so `"10.50"` stays `"10.50"`.
///
/// # Example
/// ```
/// use piggy_accounts::domain::Amount;
///
/// let amount: Amount = "10.50".parse().unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(Decimal);

/// Errors that can occur when parsing an Amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Invalid amount format: {0}")]
    ParseError(String),
}

impl Amount {
    /// Wrap a decimal value
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Only plain decimal literals that print back unchanged are accepted.
    /// Anything that would be rounded or rewritten (`1e5`, `1_000`, `+5`,
    /// `007`, more than 28 fractional digits) is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str_exact(s)
            .map_err(|e| AmountError::ParseError(format!("{s:?}: {e}")))?;

        if value.to_string() != s {
            return Err(AmountError::ParseError(format!(
                "{s:?}: not a plain decimal literal"
            )));
        }
        Ok(Self(value))
    }
}

impl TryFrom<String> for Amount {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Amount::from_str(&value)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.0.to_string()
    }
}
