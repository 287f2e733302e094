//! Collateral lifecycle enum.

use serde::{Deserialize, Serialize};

/// The lifecycle phase of a collateral record.
///
/// Derived from the `registered` flag and the loan binding:
/// `Unregistered → Registered → Assigned ⇄ Registered`. Verification is
/// one-way (there is no un-register), and release returns an assigned
/// record to `Registered`, never to `Unregistered`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollateralPhase {
    /// Record exists but has not been admin-verified.
    Unregistered,
    /// Admin-verified and available for loan assignment.
    Registered,
    /// Currently backing a loan.
    Assigned,
}

impl CollateralPhase {
    /// Whether this collateral can be assigned to a loan.
    pub fn can_assign(&self) -> bool {
        matches!(self, Self::Registered)
    }

    /// Whether this collateral is currently backing a loan.
    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned)
    }

    /// Whether the one-way verification transition has happened.
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Registered | Self::Assigned)
    }
}
