//! Borrower registry engine.

use crate::error::BorrowerError;
use lienreg_authority::AdminAuthority;
use lienreg_store::{BorrowerRecord, BorrowerStore, StoreError};
use lienreg_types::{BorrowerId, Principal};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// The registry's owned state: record map plus identifier counter.
///
/// Both live behind one mutex so that allocation-then-insert and
/// check-then-mutate sequences are indivisible with respect to other
/// callers.
struct BorrowerBook {
    records: HashMap<BorrowerId, BorrowerRecord>,
    next_id: BorrowerId,
}

impl BorrowerBook {
    fn new() -> Self {
        Self {
            records: HashMap::new(),
            next_id: BorrowerId::FIRST,
        }
    }
}

/// The borrower registry.
///
/// Thread-safe for shared access. Every mutating operation validates actor,
/// existence, and input before touching state; a rejection leaves the book
/// exactly as it was.
pub struct BorrowerRegistry {
    authority: Arc<AdminAuthority>,
    book: Mutex<BorrowerBook>,
}

impl BorrowerRegistry {
    pub const MIN_CREDIT_SCORE: u32 = 300;
    pub const MAX_CREDIT_SCORE: u32 = 850;

    pub fn new(authority: Arc<AdminAuthority>) -> Self {
        Self {
            authority,
            book: Mutex::new(BorrowerBook::new()),
        }
    }

    /// Register a new borrower owned by `actor`.
    ///
    /// The identifier counter only advances on success, so identifiers are
    /// gap-free and strictly increasing across successful registrations.
    pub fn register(
        &self,
        actor: &Principal,
        business_name: &str,
        revenue: u64,
        credit_score: u32,
    ) -> Result<BorrowerId, BorrowerError> {
        if revenue == 0 {
            return Err(BorrowerError::InvalidRevenue(revenue));
        }
        if !(Self::MIN_CREDIT_SCORE..=Self::MAX_CREDIT_SCORE).contains(&credit_score) {
            return Err(BorrowerError::InvalidCreditScore(credit_score));
        }

        let mut book = self.book.lock().expect("borrower book lock poisoned");
        let id = book.next_id;
        book.records.insert(
            id,
            BorrowerRecord {
                id,
                owner: actor.clone(),
                business_name: business_name.to_string(),
                revenue,
                credit_score,
                verified: false,
            },
        );
        book.next_id = id.next();
        debug!(%id, owner = %actor, business_name, "borrower registered");
        Ok(id)
    }

    /// Mark a borrower as verified. Admin-only; idempotent.
    pub fn verify(&self, actor: &Principal, id: BorrowerId) -> Result<(), BorrowerError> {
        self.authority.require_admin(actor)?;
        let mut book = self.book.lock().expect("borrower book lock poisoned");
        let record = book.records.get_mut(&id).ok_or(BorrowerError::NotFound(id))?;
        record.verified = true;
        info!(%id, "borrower verified");
        Ok(())
    }

    /// Look up a borrower record. Pure read.
    pub fn get(&self, id: BorrowerId) -> Option<BorrowerRecord> {
        self.book
            .lock()
            .expect("borrower book lock poisoned")
            .records
            .get(&id)
            .cloned()
    }

    /// Whether a borrower is verified. Unknown identifiers read as `false`.
    pub fn is_verified(&self, id: BorrowerId) -> bool {
        self.book
            .lock()
            .expect("borrower book lock poisoned")
            .records
            .get(&id)
            .map(|b| b.verified)
            .unwrap_or(false)
    }

    /// Number of registered borrowers.
    pub fn count(&self) -> u64 {
        self.book.lock().expect("borrower book lock poisoned").records.len() as u64
    }

    /// Write every record and the identifier counter to `store`.
    pub fn persist_to<S: BorrowerStore>(&self, store: &S) -> Result<(), StoreError> {
        let book = self.book.lock().expect("borrower book lock poisoned");
        for record in book.records.values() {
            store.put_borrower(record)?;
        }
        store.set_borrower_id_counter(book.next_id.as_u64())
    }

    /// Rebuild a registry from a previously persisted store.
    pub fn load_from<S: BorrowerStore>(
        authority: Arc<AdminAuthority>,
        store: &S,
    ) -> Result<Self, StoreError> {
        let mut book = BorrowerBook::new();
        for record in store.iter_borrowers()? {
            book.records.insert(record.id, record);
        }
        book.next_id = BorrowerId::new(store.borrower_id_counter()?);
        Ok(Self {
            authority,
            book: Mutex::new(book),
        })
    }
}
