//! Nullable infrastructure for deterministic testing.
//!
//! The registry depends on storage only through the `lienreg-store` traits.
//! This crate provides an in-memory implementation that is deterministic,
//! controllable from tests, and never touches the filesystem.
//!
//! Usage: swap the embedding application's real backend for `NullStore` in
//! tests.

pub mod store;

pub use store::NullStore;
