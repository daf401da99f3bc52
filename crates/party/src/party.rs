use serde::Serialize;

use potluck_core::{DomainError, DomainResult, PartyId};

use crate::food::{FoodEntry, FoodList};

/// A party: fixed guest list plus one owned food list.
///
/// The guest list is set at creation and never changes; all food-list
/// mutations go through the party so the invitation check cannot be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    id: PartyId,
    guests: Vec<String>,
    food_list: FoodList,
}

/// Read-only snapshot of a party, as exposed over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartySnapshot {
    pub id: PartyId,
    pub guests: Vec<String>,
    pub foodlist: Vec<FoodEntry>,
}

impl Party {
    /// Create a party with the given guests and an empty food list.
    ///
    /// Fails with `CannotPartyAlone` when `guests` is empty.
    pub fn new(id: PartyId, guests: Vec<String>) -> DomainResult<Self> {
        if guests.is_empty() {
            return Err(DomainError::CannotPartyAlone);
        }

        Ok(Self {
            id,
            guests,
            food_list: FoodList::new(),
        })
    }

    pub fn id(&self) -> PartyId {
        self.id
    }

    pub fn guests(&self) -> &[String] {
        &self.guests
    }

    /// Read-only access to the owned food list.
    pub fn food_list(&self) -> &FoodList {
        &self.food_list
    }

    pub fn is_invited(&self, guest: &str) -> bool {
        self.guests.iter().any(|g| g == guest)
    }

    /// Record that `guest` brings `item`.
    ///
    /// Fails with `NotInvitedGuest` for outsiders, `DuplicateContribution`
    /// when the same commitment already exists. No partial mutation on
    /// failure.
    pub fn add_to_food_list(&mut self, item: &str, guest: &str) -> DomainResult<FoodEntry> {
        if !self.is_invited(guest) {
            return Err(DomainError::not_invited(guest));
        }

        self.food_list.add(item, guest)
    }

    /// Drop the commitment matching the exact (item, guest) pair.
    pub fn remove_from_food_list(&mut self, item: &str, guest: &str) -> DomainResult<()> {
        self.food_list.remove(item, guest)
    }

    pub fn snapshot(&self) -> PartySnapshot {
        PartySnapshot {
            id: self.id,
            guests: self.guests.clone(),
            foodlist: self.food_list.entries().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_party() -> Party {
        Party::new(
            PartyId::new(0),
            vec!["alice".to_string(), "bob".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_empty_guest_list() {
        let err = Party::new(PartyId::new(0), vec![]).unwrap_err();
        assert_eq!(err, DomainError::CannotPartyAlone);
    }

    #[test]
    fn new_party_starts_with_empty_food_list() {
        let party = test_party();
        assert!(party.food_list().is_empty());
        assert_eq!(party.guests(), ["alice", "bob"]);
    }

    #[test]
    fn invited_guest_can_contribute() {
        let mut party = test_party();
        let entry = party.add_to_food_list("cake", "alice").unwrap();
        assert_eq!(entry.item, "cake");
        assert_eq!(entry.guest, "alice");
        assert_eq!(party.food_list().len(), 1);
    }

    #[test]
    fn uninvited_guest_is_rejected_regardless_of_item() {
        let mut party = test_party();
        for item in ["soda", "cake", ""] {
            let err = party.add_to_food_list(item, "carol").unwrap_err();
            assert_eq!(
                err,
                DomainError::NotInvitedGuest {
                    guest: "carol".to_string(),
                }
            );
        }
        assert!(party.food_list().is_empty());
    }

    #[test]
    fn second_identical_contribution_is_rejected_without_growth() {
        let mut party = test_party();
        party.add_to_food_list("cake", "alice").unwrap();

        let err = party.add_to_food_list("cake", "alice").unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateContribution {
                guest: "alice".to_string(),
                item: "cake".to_string(),
            }
        );
        assert_eq!(party.food_list().len(), 1);
    }

    #[test]
    fn add_then_remove_restores_prior_food_list() {
        let mut party = test_party();
        party.add_to_food_list("soda", "bob").unwrap();
        let before = party.food_list().clone();

        party.add_to_food_list("cake", "alice").unwrap();
        party.remove_from_food_list("cake", "alice").unwrap();

        assert_eq!(party.food_list(), &before);
    }

    #[test]
    fn remove_of_absent_entry_fails() {
        let mut party = test_party();
        let err = party.remove_from_food_list("cake", "alice").unwrap_err();
        assert_eq!(
            err,
            DomainError::ItemNotInFoodList {
                guest: "alice".to_string(),
                item: "cake".to_string(),
            }
        );
    }

    #[test]
    fn snapshot_carries_id_guests_and_entries() {
        let mut party = test_party();
        party.add_to_food_list("cake", "alice").unwrap();

        let snap = party.snapshot();
        assert_eq!(snap.id, PartyId::new(0));
        assert_eq!(snap.guests, ["alice", "bob"]);
        assert_eq!(snap.foodlist.len(), 1);
        assert_eq!(snap.foodlist[0].item, "cake");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any non-empty guest list makes a valid party, and every
        /// listed guest may contribute any item to the fresh food list.
        #[test]
        fn any_listed_guest_can_contribute(
            guests in prop::collection::vec("[a-z]{1,8}", 1..6),
            pick in any::<prop::sample::Index>(),
            item in "[a-z]{1,8}",
        ) {
            let mut party = Party::new(PartyId::new(0), guests.clone()).unwrap();
            let guest = pick.get(&guests).clone();

            let entry = party.add_to_food_list(&item, &guest).unwrap();
            prop_assert_eq!(entry.guest, guest);
            prop_assert_eq!(entry.item, item);
            prop_assert_eq!(party.food_list().len(), 1);
        }

        /// Property: repeating a commitment never grows the list; the second
        /// attempt fails as a duplicate.
        #[test]
        fn duplicate_commitments_never_grow_the_list(
            guests in prop::collection::vec("[a-z]{1,8}", 1..6),
            pick in any::<prop::sample::Index>(),
            item in "[a-z]{1,8}",
        ) {
            let mut party = Party::new(PartyId::new(0), guests.clone()).unwrap();
            let guest = pick.get(&guests).clone();

            party.add_to_food_list(&item, &guest).unwrap();
            let len = party.food_list().len();

            let err = party.add_to_food_list(&item, &guest).unwrap_err();
            prop_assert_eq!(err, DomainError::duplicate(guest.as_str(), item.as_str()));
            prop_assert_eq!(party.food_list().len(), len);
        }
    }
}
