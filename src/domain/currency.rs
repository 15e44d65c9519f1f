//! Currency and time period enumerations
//!
//! Closed sets stored as their literal names (`"USD"`, `"MONTH"`).
//! Any other literal is rejected when decoding.

use serde::{Deserialize, Serialize};

/// Currency of an item or saving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Rub,
}

/// Recurrence period of an income or expense item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimePeriod {
    Year,
    Quarter,
    Month,
    Day,
    Hour,
}
