use serde::{Deserialize, Serialize};

use potluck_core::{DomainError, DomainResult};

/// One food commitment: `guest` brings `item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub item: String,
    pub guest: String,
}

/// Ordered record of who committed to bring what.
///
/// Entries keep insertion order. The list enforces the duplicate-contribution
/// invariant; guest validity is the owning party's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FoodList {
    entries: Vec<FoodEntry>,
}

impl FoodList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in insertion order (read-only view).
    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, item: &str, guest: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.item == item && e.guest == guest)
    }

    /// Append a new commitment.
    ///
    /// Fails with `DuplicateContribution` if the same (item, guest) pair is
    /// already recorded; the list is unchanged on failure.
    pub fn add(&mut self, item: &str, guest: &str) -> DomainResult<FoodEntry> {
        if self.contains(item, guest) {
            return Err(DomainError::duplicate(guest, item));
        }

        let entry = FoodEntry {
            item: item.to_string(),
            guest: guest.to_string(),
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Remove the entry matching the exact (item, guest) pair.
    ///
    /// By the duplicate invariant there is at most one such entry.
    pub fn remove(&mut self, item: &str, guest: &str) -> DomainResult<()> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.item == item && e.guest == guest)
            .ok_or_else(|| DomainError::item_not_in_food_list(guest, item))?;

        self.entries.remove(pos);
        Ok(())
    }
}
