//! `potluck-registry` — process-wide in-memory party store.

pub mod registry;

pub use registry::PartyRegistry;
