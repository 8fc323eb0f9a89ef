//! View routing module.
//!
//! Navigation over the closed set of storefront views, guarded by the
//! authentication flag. Pure functions only; rendering and scroll handling
//! belong to the presentation layer.

pub mod view;

pub use view::{View, resolve};
