//! In-memory party registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use potluck_core::{DomainError, DomainResult, PartyId};
use potluck_party::{FoodEntry, Party, PartySnapshot};

/// Map plus id counter, guarded together so an id is never issued without
/// its party landing in the map.
#[derive(Debug, Default)]
struct RegistryInner {
    parties: HashMap<PartyId, Party>,
    next_id: u64,
}

impl RegistryInner {
    /// Distinguish "never issued" from "issued and deleted".
    ///
    /// An id at or above the counter was never handed out (`NotFound`); an
    /// issued id missing from the map belonged to a deleted party (`Gone`).
    fn resolve(&self, id: PartyId) -> DomainResult<&Party> {
        if id.value() >= self.next_id {
            return Err(DomainError::NotFound(id));
        }
        self.parties.get(&id).ok_or(DomainError::Gone(id))
    }

    fn resolve_mut(&mut self, id: PartyId) -> DomainResult<&mut Party> {
        if id.value() >= self.next_id {
            return Err(DomainError::NotFound(id));
        }
        self.parties.get_mut(&id).ok_or(DomainError::Gone(id))
    }
}

/// Process-wide store of all currently active parties.
///
/// All mutations (create, delete, food add/remove) serialize on the write
/// lock; reads share the read lock and never observe a torn write.
#[derive(Debug, Default)]
pub struct PartyRegistry {
    inner: RwLock<RegistryInner>,
}

impl PartyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Create a party with the given guests and return its fresh id.
    ///
    /// Ids increase monotonically and are never reused, even after deletion.
    pub fn create_party(&self, guests: Vec<String>) -> DomainResult<PartyId> {
        let mut inner = self.inner.write().unwrap();

        let id = PartyId::new(inner.next_id);
        let party = Party::new(id, guests)?;
        inner.parties.insert(id, party);
        inner.next_id += 1;

        Ok(id)
    }

    /// Snapshots of all currently loaded parties, in id order.
    pub fn list_parties(&self) -> Vec<PartySnapshot> {
        let inner = self.inner.read().unwrap();
        let mut snapshots: Vec<_> = inner.parties.values().map(Party::snapshot).collect();
        snapshots.sort_by_key(|s| s.id);
        snapshots
    }

    /// Number of currently loaded parties (drops on deletion).
    pub fn count_loaded(&self) -> usize {
        self.inner.read().unwrap().parties.len()
    }

    pub fn snapshot(&self, id: PartyId) -> DomainResult<PartySnapshot> {
        let inner = self.inner.read().unwrap();
        Ok(inner.resolve(id)?.snapshot())
    }

    /// The party's current food list, in insertion order.
    pub fn food_list(&self, id: PartyId) -> DomainResult<Vec<FoodEntry>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.resolve(id)?.food_list().entries().to_vec())
    }

    /// Remove the party. A second delete of the same id yields `Gone`.
    pub fn delete_party(&self, id: PartyId) -> DomainResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.resolve(id)?;
        inner.parties.remove(&id);
        Ok(())
    }

    /// Record that `guest` brings `item` to party `id`.
    pub fn add_food(&self, id: PartyId, item: &str, guest: &str) -> DomainResult<FoodEntry> {
        let mut inner = self.inner.write().unwrap();
        inner.resolve_mut(id)?.add_to_food_list(item, guest)
    }

    /// Drop the (item, guest) commitment from party `id`.
    pub fn remove_food(&self, id: PartyId, item: &str, guest: &str) -> DomainResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.resolve_mut(id)?.remove_from_food_list(item, guest)
    }
}
