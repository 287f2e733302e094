//! Record types and abstract storage traits for the lienreg registry.
//!
//! Persistence is an external collaborator: each registry treats it as a
//! plain identifier→record map with get/put semantics plus a monotonic
//! counter primitive. Backends (an embedding application's database, or the
//! in-memory nullable store for testing) implement these traits; the rest
//! of the workspace depends only on the traits.

pub mod borrower;
pub mod collateral;
pub mod error;

pub use borrower::{BorrowerRecord, BorrowerStore};
pub use collateral::{CollateralRecord, CollateralStore};
pub use error::StoreError;
