//! `artisans-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the storefront
//! modules (no infrastructure concerns).

pub mod error;
pub mod locale;

pub use error::{DomainError, DomainResult};
pub use locale::{Language, LocalizedText};
