//! Collateral registry.
//!
//! Collateral assets register with their appraisal details, get
//! admin-verified, and can then back at most one loan at a time:
//! `Unregistered → Registered → Assigned ⇄ Registered`. Release returns an
//! asset to `Registered`, never to `Unregistered`, and verification is
//! one-way. Records are created once and mutated in place; nothing is ever
//! deleted.

pub mod error;
pub mod registry;

pub use error::CollateralError;
pub use registry::CollateralRegistry;
