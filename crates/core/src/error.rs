//! Domain error model.

use thiserror::Error;

use crate::id::PartyId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure the party/food-list model can produce, as an explicit
/// variant. The HTTP layer maps each variant to a status code; the domain
/// never aborts or panics on these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A party was requested with an empty (or missing) guest list.
    #[error("you cannot party alone")]
    CannotPartyAlone,

    /// The party id was never issued by the registry.
    #[error("party {0} does not exist")]
    NotFound(PartyId),

    /// The party id was issued, but the party has since been deleted.
    #[error("party {0} is gone")]
    Gone(PartyId),

    /// The contributor is not on the party's guest list.
    #[error("{guest} is not invited to this party")]
    NotInvitedGuest { guest: String },

    /// The guest already committed to bring this item.
    #[error("{guest} already committed to bring {item}")]
    DuplicateContribution { guest: String, item: String },

    /// Removal target: no such (item, guest) entry in the food list.
    #[error("{guest} has not added {item} to this party foodlist")]
    ItemNotInFoodList { guest: String, item: String },
}

impl DomainError {
    pub fn not_invited(guest: impl Into<String>) -> Self {
        Self::NotInvitedGuest {
            guest: guest.into(),
        }
    }

    pub fn duplicate(guest: impl Into<String>, item: impl Into<String>) -> Self {
        Self::DuplicateContribution {
            guest: guest.into(),
            item: item.into(),
        }
    }

    pub fn item_not_in_food_list(guest: impl Into<String>, item: impl Into<String>) -> Self {
        Self::ItemNotInFoodList {
            guest: guest.into(),
            item: item.into(),
        }
    }
}
