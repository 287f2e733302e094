//! Nullable store: thread-safe in-memory storage for testing.

use lienreg_store::{
    BorrowerRecord, BorrowerStore, CollateralRecord, CollateralStore, StoreError,
};
use lienreg_types::{BorrowerId, CollateralId};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory borrower + collateral store for testing.
///
/// Counters start at 1, matching a freshly created registry.
pub struct NullStore {
    borrowers: Mutex<HashMap<u64, BorrowerRecord>>,
    borrower_counter: Mutex<u64>,
    collateral: Mutex<HashMap<u64, CollateralRecord>>,
    collateral_counter: Mutex<u64>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            borrowers: Mutex::new(HashMap::new()),
            borrower_counter: Mutex::new(1),
            collateral: Mutex::new(HashMap::new()),
            collateral_counter: Mutex::new(1),
        }
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BorrowerStore for NullStore {
    fn get_borrower(&self, id: BorrowerId) -> Result<BorrowerRecord, StoreError> {
        self.borrowers
            .lock()
            .unwrap()
            .get(&id.as_u64())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn put_borrower(&self, record: &BorrowerRecord) -> Result<(), StoreError> {
        self.borrowers
            .lock()
            .unwrap()
            .insert(record.id.as_u64(), record.clone());
        Ok(())
    }

    fn borrower_exists(&self, id: BorrowerId) -> Result<bool, StoreError> {
        Ok(self.borrowers.lock().unwrap().contains_key(&id.as_u64()))
    }

    fn borrower_count(&self) -> Result<u64, StoreError> {
        Ok(self.borrowers.lock().unwrap().len() as u64)
    }

    fn iter_borrowers(&self) -> Result<Vec<BorrowerRecord>, StoreError> {
        Ok(self.borrowers.lock().unwrap().values().cloned().collect())
    }

    fn borrower_id_counter(&self) -> Result<u64, StoreError> {
        Ok(*self.borrower_counter.lock().unwrap())
    }

    fn set_borrower_id_counter(&self, next: u64) -> Result<(), StoreError> {
        *self.borrower_counter.lock().unwrap() = next;
        Ok(())
    }
}

impl CollateralStore for NullStore {
    fn get_collateral(&self, id: CollateralId) -> Result<CollateralRecord, StoreError> {
        self.collateral
            .lock()
            .unwrap()
            .get(&id.as_u64())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn put_collateral(&self, record: &CollateralRecord) -> Result<(), StoreError> {
        self.collateral
            .lock()
            .unwrap()
            .insert(record.id.as_u64(), record.clone());
        Ok(())
    }

    fn collateral_exists(&self, id: CollateralId) -> Result<bool, StoreError> {
        Ok(self.collateral.lock().unwrap().contains_key(&id.as_u64()))
    }

    fn collateral_count(&self) -> Result<u64, StoreError> {
        Ok(self.collateral.lock().unwrap().len() as u64)
    }

    fn iter_collateral(&self) -> Result<Vec<CollateralRecord>, StoreError> {
        Ok(self.collateral.lock().unwrap().values().cloned().collect())
    }

    fn collateral_id_counter(&self) -> Result<u64, StoreError> {
        Ok(*self.collateral_counter.lock().unwrap())
    }

    fn set_collateral_id_counter(&self, next: u64) -> Result<(), StoreError> {
        *self.collateral_counter.lock().unwrap() = next;
        Ok(())
    }
}
