//! Fundamental types for the lienreg registry.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: the actor principal, record identifiers, and the collateral
//! lifecycle enum.

pub mod id;
pub mod principal;
pub mod state;

pub use id::{BorrowerId, CollateralId, LoanId};
pub use principal::Principal;
pub use state::CollateralPhase;
