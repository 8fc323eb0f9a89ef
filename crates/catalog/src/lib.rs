//! Catalog domain module.
//!
//! This crate contains the read-only product catalog: product data, lookup,
//! and load-time validation. No IO, no HTTP, no storage — the catalog is
//! supplied once at startup and never mutated afterwards.

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Product, ProductId};
