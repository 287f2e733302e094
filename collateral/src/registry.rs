//! Collateral registry engine.

use crate::error::CollateralError;
use lienreg_authority::AdminAuthority;
use lienreg_store::{CollateralRecord, CollateralStore, StoreError};
use lienreg_types::{BorrowerId, CollateralId, LoanId, Principal};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// The registry's owned state: record map plus identifier counter, behind
/// one mutex so check-then-mutate sequences are indivisible.
struct CollateralBook {
    records: HashMap<CollateralId, CollateralRecord>,
    next_id: CollateralId,
}

impl CollateralBook {
    fn new() -> Self {
        Self {
            records: HashMap::new(),
            next_id: CollateralId::FIRST,
        }
    }
}

/// The collateral registry.
///
/// Thread-safe for shared access. Every mutating operation validates actor,
/// existence, and lifecycle state in that order before touching anything; a
/// rejection leaves the book exactly as it was.
pub struct CollateralRegistry {
    authority: Arc<AdminAuthority>,
    book: Mutex<CollateralBook>,
}

impl CollateralRegistry {
    pub fn new(authority: Arc<AdminAuthority>) -> Self {
        Self {
            authority,
            book: Mutex::new(CollateralBook::new()),
        }
    }

    /// Register a new collateral asset for `borrower`.
    ///
    /// The borrower reference is stored as-is; validating it against the
    /// borrower registry is the caller's concern. The identifier counter
    /// only advances on success.
    pub fn register(
        &self,
        borrower: BorrowerId,
        asset_type: &str,
        asset_value: u64,
        asset_description: &str,
        actor: &Principal,
    ) -> Result<CollateralId, CollateralError> {
        if asset_value == 0 {
            return Err(CollateralError::InvalidAssetValue(asset_value));
        }

        let mut book = self.book.lock().expect("collateral book lock poisoned");
        let id = book.next_id;
        book.records.insert(
            id,
            CollateralRecord {
                id,
                borrower,
                asset_type: asset_type.to_string(),
                asset_value,
                asset_description: asset_description.to_string(),
                registered: false,
                loan: None,
            },
        );
        book.next_id = id.next();
        debug!(%id, %borrower, asset_type, registrant = %actor, "collateral registered");
        Ok(id)
    }

    /// Mark a collateral asset as verified. Admin-only; idempotent.
    pub fn verify(&self, actor: &Principal, id: CollateralId) -> Result<(), CollateralError> {
        self.authority.require_admin(actor)?;
        let mut book = self.book.lock().expect("collateral book lock poisoned");
        let record = book
            .records
            .get_mut(&id)
            .ok_or(CollateralError::NotFound(id))?;
        record.registered = true;
        info!(%id, "collateral verified");
        Ok(())
    }

    /// Bind a verified, unassigned collateral asset to `loan`.
    ///
    /// Checks in contract order: admin, existence, verified, unassigned.
    pub fn assign_to_loan(
        &self,
        actor: &Principal,
        id: CollateralId,
        loan: LoanId,
    ) -> Result<(), CollateralError> {
        self.authority.require_admin(actor)?;
        let mut book = self.book.lock().expect("collateral book lock poisoned");
        let record = book
            .records
            .get_mut(&id)
            .ok_or(CollateralError::NotFound(id))?;
        if !record.registered {
            return Err(CollateralError::NotRegistered(id));
        }
        if let Some(current) = record.loan {
            return Err(CollateralError::AlreadyAssigned { id, loan: current });
        }
        record.loan = Some(loan);
        info!(%id, %loan, "collateral assigned");
        Ok(())
    }

    /// Release a collateral asset from its loan, returning it to the
    /// assignable pool.
    pub fn release_from_loan(
        &self,
        actor: &Principal,
        id: CollateralId,
    ) -> Result<(), CollateralError> {
        self.authority.require_admin(actor)?;
        let mut book = self.book.lock().expect("collateral book lock poisoned");
        let record = book
            .records
            .get_mut(&id)
            .ok_or(CollateralError::NotFound(id))?;
        let loan = record.loan.take().ok_or(CollateralError::NotAssigned(id))?;
        info!(%id, %loan, "collateral released");
        Ok(())
    }

    /// Look up a collateral record. Pure read.
    pub fn get(&self, id: CollateralId) -> Option<CollateralRecord> {
        self.book
            .lock()
            .expect("collateral book lock poisoned")
            .records
            .get(&id)
            .cloned()
    }

    /// Number of registered collateral assets.
    pub fn count(&self) -> u64 {
        self.book
            .lock()
            .expect("collateral book lock poisoned")
            .records
            .len() as u64
    }

    /// Write every record and the identifier counter to `store`.
    pub fn persist_to<S: CollateralStore>(&self, store: &S) -> Result<(), StoreError> {
        let book = self.book.lock().expect("collateral book lock poisoned");
        for record in book.records.values() {
            store.put_collateral(record)?;
        }
        store.set_collateral_id_counter(book.next_id.as_u64())
    }

    /// Rebuild a registry from a previously persisted store.
    pub fn load_from<S: CollateralStore>(
        authority: Arc<AdminAuthority>,
        store: &S,
    ) -> Result<Self, StoreError> {
        let mut book = CollateralBook::new();
        for record in store.iter_collateral()? {
            book.records.insert(record.id, record);
        }
        book.next_id = CollateralId::new(store.collateral_id_counter()?);
        Ok(Self {
            authority,
            book: Mutex::new(book),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lienreg_types::CollateralPhase;

    fn p(s: &str) -> Principal {
        Principal::new(s)
    }

    fn registry() -> CollateralRegistry {
        CollateralRegistry::new(Arc::new(AdminAuthority::new(p("admin"))))
    }

    fn register_one(registry: &CollateralRegistry) -> CollateralId {
        registry
            .register(
                BorrowerId::FIRST,
                "Real Estate",
                500_000,
                "Commercial building at 123 Main St",
                &p("alice"),
            )
            .unwrap()
    }

    #[test]
    fn register_stores_unverified_unassigned_record() {
        let registry = registry();
        let id = register_one(&registry);
        assert_eq!(id, CollateralId::FIRST);

        let record = registry.get(id).unwrap();
        assert_eq!(record.borrower, BorrowerId::FIRST);
        assert_eq!(record.asset_type, "Real Estate");
        assert_eq!(record.asset_value, 500_000);
        assert!(!record.registered);
        assert_eq!(record.loan, None);
        assert_eq!(record.phase(), CollateralPhase::Unregistered);
    }

    #[test]
    fn zero_asset_value_is_rejected_without_consuming_an_id() {
        let registry = registry();
        let err = registry
            .register(BorrowerId::FIRST, "Real Estate", 0, "Nothing", &p("alice"))
            .unwrap_err();
        assert_eq!(err, CollateralError::InvalidAssetValue(0));
        assert_eq!(registry.count(), 0);
        assert_eq!(register_one(&registry).as_u64(), 1);
    }

    #[test]
    fn verify_requires_admin_before_existence() {
        let registry = registry();
        let err = registry.verify(&p("alice"), CollateralId::new(9)).unwrap_err();
        assert_eq!(err, CollateralError::Unauthorized(p("alice")));

        let err = registry.verify(&p("admin"), CollateralId::new(9)).unwrap_err();
        assert_eq!(err, CollateralError::NotFound(CollateralId::new(9)));
    }

    #[test]
    fn verify_is_idempotent() {
        let registry = registry();
        let id = register_one(&registry);
        registry.verify(&p("admin"), id).unwrap();
        registry.verify(&p("admin"), id).unwrap();
        assert!(registry.get(id).unwrap().registered);
    }

    #[test]
    fn assign_checks_are_ordered_admin_existence_state() {
        let registry = registry();
        let id = register_one(&registry);
        let loan = LoanId::new(77);

        // Non-admin on an unknown id: Unauthorized wins.
        let err = registry
            .assign_to_loan(&p("alice"), CollateralId::new(9), loan)
            .unwrap_err();
        assert_eq!(err, CollateralError::Unauthorized(p("alice")));

        // Admin on an unknown id: NotFound.
        let err = registry
            .assign_to_loan(&p("admin"), CollateralId::new(9), loan)
            .unwrap_err();
        assert_eq!(err, CollateralError::NotFound(CollateralId::new(9)));

        // Admin on an unverified record: NotRegistered, flag untouched.
        let err = registry.assign_to_loan(&p("admin"), id, loan).unwrap_err();
        assert_eq!(err, CollateralError::NotRegistered(id));
        assert!(!registry.get(id).unwrap().registered);

        // Verified then assigned twice: AlreadyAssigned reports the holder.
        registry.verify(&p("admin"), id).unwrap();
        registry.assign_to_loan(&p("admin"), id, loan).unwrap();
        let err = registry
            .assign_to_loan(&p("admin"), id, LoanId::new(99))
            .unwrap_err();
        assert_eq!(err, CollateralError::AlreadyAssigned { id, loan });
        assert_eq!(registry.get(id).unwrap().loan, Some(loan));
    }

    #[test]
    fn release_returns_to_registered_and_is_reassignable() {
        let registry = registry();
        let id = register_one(&registry);
        registry.verify(&p("admin"), id).unwrap();
        registry.assign_to_loan(&p("admin"), id, LoanId::new(77)).unwrap();
        assert_eq!(registry.get(id).unwrap().phase(), CollateralPhase::Assigned);

        registry.release_from_loan(&p("admin"), id).unwrap();
        let record = registry.get(id).unwrap();
        assert_eq!(record.loan, None);
        // Released, not un-verified: the record goes back to Registered.
        assert_eq!(record.phase(), CollateralPhase::Registered);

        // And can immediately back a different loan.
        registry.assign_to_loan(&p("admin"), id, LoanId::new(99)).unwrap();
        assert_eq!(registry.get(id).unwrap().loan, Some(LoanId::new(99)));
    }

    #[test]
    fn release_of_unassigned_is_not_assigned() {
        let registry = registry();
        let id = register_one(&registry);
        registry.verify(&p("admin"), id).unwrap();

        let err = registry.release_from_loan(&p("admin"), id).unwrap_err();
        assert_eq!(err, CollateralError::NotAssigned(id));
    }

    #[test]
    fn rejected_calls_leave_the_record_unchanged() {
        let registry = registry();
        let id = register_one(&registry);
        registry.verify(&p("admin"), id).unwrap();
        registry.assign_to_loan(&p("admin"), id, LoanId::new(77)).unwrap();
        let before = registry.get(id).unwrap();

        for err in [
            registry.verify(&p("alice"), id).unwrap_err(),
            registry.assign_to_loan(&p("alice"), id, LoanId::new(5)).unwrap_err(),
            registry.release_from_loan(&p("alice"), id).unwrap_err(),
        ] {
            assert_eq!(err, CollateralError::Unauthorized(p("alice")));
        }
        assert_eq!(registry.get(id).unwrap(), before);
    }

    #[test]
    fn admin_transfer_moves_assignment_privilege() {
        let authority = Arc::new(AdminAuthority::new(p("admin")));
        let registry = CollateralRegistry::new(authority.clone());
        let id = register_one(&registry);
        registry.verify(&p("admin"), id).unwrap();

        authority.set_admin(&p("admin"), p("successor")).unwrap();
        assert_eq!(
            registry.assign_to_loan(&p("admin"), id, LoanId::new(1)).unwrap_err(),
            CollateralError::Unauthorized(p("admin"))
        );
        registry
            .assign_to_loan(&p("successor"), id, LoanId::new(1))
            .unwrap();
    }

    #[test]
    fn persist_and_load_round_trip() {
        use lienreg_nullables::NullStore;

        let registry = registry();
        let id = register_one(&registry);
        registry.verify(&p("admin"), id).unwrap();
        registry.assign_to_loan(&p("admin"), id, LoanId::new(77)).unwrap();

        let store = NullStore::new();
        registry.persist_to(&store).unwrap();

        let authority = Arc::new(AdminAuthority::new(p("admin")));
        let restored = CollateralRegistry::load_from(authority, &store).unwrap();
        assert_eq!(restored.get(id).unwrap().loan, Some(LoanId::new(77)));
        let next = register_one(&restored);
        assert_eq!(next.as_u64(), 2);
    }
}
