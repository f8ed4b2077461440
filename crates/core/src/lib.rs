//! Domain types and rules for the Quest Ledger.
//!
//! Pure crate: no I/O, no framework types. The persistence and HTTP
//! layers build on the types, error taxonomy, and validation helpers
//! defined here.

pub mod error;
pub mod progression;
pub mod types;
