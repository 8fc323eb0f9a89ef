//! Saved address domain module.
//!
//! This crate contains the address book rules (label-keyed, case-insensitive
//! upsert and delete), implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod address;

pub use address::{AddressBook, SavedAddress, ShippingInfo};
