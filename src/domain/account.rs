//! Account Aggregate
//!
//! One record per unique account name, persisted and replaced as a unit.
//! `name` and `last_seen` are only assigned by the repository; everything
//! else is owned by the caller and replaced wholesale on update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{clock, Amount, Currency, TimePeriod};

/// Account Aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account name, the storage key
    name: String,

    /// Set on create and on every update
    last_seen: DateTime<Utc>,

    /// Income items in caller order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub incomes: Vec<Item>,

    /// Expense items in caller order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub expenses: Vec<Item>,

    pub saving: Saving,

    /// Free text
    pub note: String,
}

/// Recurring income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub amount: Amount,
    pub currency: Currency,
    pub period: TimePeriod,
    pub icon: String,
}

/// Savings settings
///
/// `Default` is the zero saving every new account starts with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Saving {
    /// Minor currency units
    pub amount: i64,
    pub currency: Currency,
    /// Annual rate
    #[serde(serialize_with = "finite_f64")]
    pub interest: f64,
    pub deposit: bool,
    pub capitalization: bool,
}

impl Account {
    /// Fresh account: zero saving, no items, empty note, seen now
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_seen: clock::now(),
            incomes: Vec::new(),
            expenses: Vec::new(),
            saving: Saving::default(),
            note: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_seen(&self) -> DateTime<Utc> {
        self.last_seen
    }

    /// Mark the account as seen now
    pub(crate) fn touch(&mut self) {
        self.last_seen = clock::now();
    }
}

impl Item {
    pub fn new(
        title: impl Into<String>,
        amount: Amount,
        currency: Currency,
        period: TimePeriod,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            currency,
            period,
            icon: icon.into(),
        }
    }
}

/// Sequences written as `null` decode as empty
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}

/// JSON has no NaN or infinity
fn finite_f64<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !value.is_finite() {
        return Err(serde::ser::Error::custom(format!(
            "interest must be finite, got {value}"
        )));
    }
    serializer.serialize_f64(*value)
}
