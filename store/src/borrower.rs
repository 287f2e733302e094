//! Borrower record and storage trait.

use crate::StoreError;
use lienreg_types::{BorrowerId, Principal};
use serde::{Deserialize, Serialize};

/// A registered borrower.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowerRecord {
    pub id: BorrowerId,
    /// The principal that registered this borrower. Immutable after creation.
    pub owner: Principal,
    pub business_name: String,
    /// Annual revenue. Positive; the registry rejects zero at creation.
    pub revenue: u64,
    /// Credit score, within 300..=850 at creation.
    pub credit_score: u32,
    /// Admin verification flag. Transitions false→true exactly once.
    pub verified: bool,
}

/// Trait for borrower storage operations.
pub trait BorrowerStore {
    fn get_borrower(&self, id: BorrowerId) -> Result<BorrowerRecord, StoreError>;
    fn put_borrower(&self, record: &BorrowerRecord) -> Result<(), StoreError>;
    fn borrower_exists(&self, id: BorrowerId) -> Result<bool, StoreError>;
    fn borrower_count(&self) -> Result<u64, StoreError>;
    fn iter_borrowers(&self) -> Result<Vec<BorrowerRecord>, StoreError>;

    /// The raw value of the monotonic identifier counter: the next
    /// identifier the registry will hand out.
    fn borrower_id_counter(&self) -> Result<u64, StoreError>;
    fn set_borrower_id_counter(&self, next: u64) -> Result<(), StoreError>;

    /// Count verified borrowers without the caller filtering by hand.
    fn verified_borrower_count(&self) -> Result<u64, StoreError> {
        Ok(self
            .iter_borrowers()?
            .iter()
            .filter(|b| b.verified)
            .count() as u64)
    }
}
