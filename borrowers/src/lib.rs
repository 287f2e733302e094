//! Borrower registry.
//!
//! Borrowers register with their business details and wait for the admin to
//! verify them. Verification is one-way: once a borrower is verified there
//! is no operation that reverses it. Records are created once and mutated
//! in place; nothing is ever deleted.

pub mod error;
pub mod registry;

pub use error::BorrowerError;
pub use registry::BorrowerRegistry;
