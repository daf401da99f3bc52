//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Identifier of a party.
///
/// Assigned by the registry as a monotonically increasing integer; never
/// reused, even after the party is deleted. The HTTP boundary parses path
/// segments into this type once — the domain never handles raw strings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(u64);

impl PartyId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for PartyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for PartyId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<PartyId> for u64 {
    fn from(value: PartyId) -> Self {
        value.0
    }
}
