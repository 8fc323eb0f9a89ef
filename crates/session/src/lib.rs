//! Session domain module (mock authentication).
//!
//! This crate is intentionally decoupled from HTTP and storage. The session
//! is a placeholder: credentials are accepted unconditionally, which a real
//! deployment would replace with actual verification.

pub mod session;

pub use session::Session;
