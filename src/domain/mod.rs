//! Domain module
//!
//! Core domain types of the account aggregate.

pub mod account;
pub mod amount;
pub mod clock;
pub mod currency;
pub mod user;

pub use account::{Account, Item, Saving};
pub use amount::{Amount, AmountError};
pub use currency::{Currency, TimePeriod};
pub use user::User;
