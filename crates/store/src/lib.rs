//! Commerce state store.
//!
//! `CommerceStore` is the single owner of all mutable storefront state:
//! cart, saved addresses, session, current view, and the UI-adjacent
//! selections (language, selected product, category filter, in-flight
//! shipping info). The presentation layer calls into it and re-renders;
//! there is exactly one logical owner and one thread of control, so no
//! locking is involved.

pub mod seed;
pub mod store;

pub use store::CommerceStore;
