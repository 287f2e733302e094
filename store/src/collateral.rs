//! Collateral record and storage trait.

use crate::StoreError;
use lienreg_types::{BorrowerId, CollateralId, CollateralPhase, LoanId};
use serde::{Deserialize, Serialize};

/// A registered collateral asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralRecord {
    pub id: CollateralId,
    /// The borrower this asset belongs to. An unvalidated reference;
    /// cross-registry consistency is an external concern.
    pub borrower: BorrowerId,
    pub asset_type: String,
    /// Appraised value. Positive; the registry rejects zero at creation.
    pub asset_value: u64,
    pub asset_description: String,
    /// Admin verification flag. Transitions false→true exactly once.
    pub registered: bool,
    /// The loan this asset currently backs, if any. At most one at a time.
    pub loan: Option<LoanId>,
}

impl CollateralRecord {
    /// The lifecycle phase implied by the verification flag and loan binding.
    pub fn phase(&self) -> CollateralPhase {
        match (self.registered, self.loan) {
            (false, _) => CollateralPhase::Unregistered,
            (true, None) => CollateralPhase::Registered,
            (true, Some(_)) => CollateralPhase::Assigned,
        }
    }
}

/// Trait for collateral storage operations.
pub trait CollateralStore {
    fn get_collateral(&self, id: CollateralId) -> Result<CollateralRecord, StoreError>;
    fn put_collateral(&self, record: &CollateralRecord) -> Result<(), StoreError>;
    fn collateral_exists(&self, id: CollateralId) -> Result<bool, StoreError>;
    fn collateral_count(&self) -> Result<u64, StoreError>;
    fn iter_collateral(&self) -> Result<Vec<CollateralRecord>, StoreError>;

    /// The raw value of the monotonic identifier counter: the next
    /// identifier the registry will hand out.
    fn collateral_id_counter(&self) -> Result<u64, StoreError>;
    fn set_collateral_id_counter(&self, next: u64) -> Result<(), StoreError>;

    /// Collateral currently assigned to any loan.
    fn iter_assigned_collateral(&self) -> Result<Vec<CollateralRecord>, StoreError> {
        Ok(self
            .iter_collateral()?
            .into_iter()
            .filter(|c| c.loan.is_some())
            .collect())
    }
}
