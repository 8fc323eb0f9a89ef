//! Cart domain module.
//!
//! This crate contains the cart reconciliation rules (quantity merging,
//! removal-on-zero), implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod cart;

pub use cart::{Cart, CartLine};
