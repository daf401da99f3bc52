//! `potluck-party` — the party aggregate and its food list.
//!
//! All domain invariants live here: a party needs at least one guest, only
//! invited guests contribute, and a guest commits to bring an item at most
//! once.

pub mod food;
pub mod party;

pub use food::{FoodEntry, FoodList};
pub use party::{Party, PartySnapshot};
