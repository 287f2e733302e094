//! Record identifier newtypes.
//!
//! Borrower and collateral identifiers are allocated by their registry,
//! starting at 1, strictly increasing, never reused. Loan identifiers come
//! from the external loan-management collaborator and are fully opaque here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a borrower record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BorrowerId(u64);

impl BorrowerId {
    /// The first identifier a registry hands out.
    pub const FIRST: Self = Self(1);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The identifier that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for BorrowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "borrower#{}", self.0)
    }
}

/// Identifier of a collateral record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CollateralId(u64);

impl CollateralId {
    /// The first identifier a registry hands out.
    pub const FIRST: Self = Self(1);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The identifier that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CollateralId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collateral#{}", self.0)
    }
}

/// Opaque reference to a loan managed outside this core.
///
/// The registry only cares about presence or absence of a loan binding,
/// never about what the identifier means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LoanId(u64);

impl LoanId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loan#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_is_strictly_increasing() {
        let id = BorrowerId::FIRST;
        assert!(id.next() > id);
        assert_eq!(id.next().as_u64(), 2);
    }

    #[test]
    fn ordering_matches_raw_value() {
        assert!(CollateralId::new(3) < CollateralId::new(10));
    }
}
