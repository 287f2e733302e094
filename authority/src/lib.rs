//! Admin authority: the single principal allowed to perform verification,
//! assignment, release, and admin-transfer operations.
//!
//! Held as one explicitly owned, versioned value rather than a module-level
//! singleton; every authorization check in the workspace goes through
//! [`AdminAuthority::require_admin`], so an admin transfer is visible to the
//! very next call.

pub mod authority;
pub mod error;

pub use authority::AdminAuthority;
pub use error::AuthorityError;
