//! Unified facade over the two registries and the admin authority.
//!
//! The registries are symmetric and independent: they never call each
//! other, and the borrower reference stored on a collateral record is
//! deliberately not validated here. What they share is the admin authority;
//! this crate wires that sharing up and gives an embedding application one
//! value to hold, plus whole-domain snapshot/restore across the storage
//! seam.

use lienreg_authority::{AdminAuthority, AuthorityError};
use lienreg_borrowers::BorrowerRegistry;
use lienreg_collateral::CollateralRegistry;
use lienreg_store::{BorrowerStore, CollateralStore, StoreError};
use lienreg_types::Principal;
use std::sync::Arc;

/// The lending registry domain: both registries plus the shared authority.
pub struct LendingCore {
    authority: Arc<AdminAuthority>,
    borrowers: BorrowerRegistry,
    collateral: CollateralRegistry,
}

impl LendingCore {
    /// Create a fresh domain with `genesis_admin` holding the admin role.
    pub fn new(genesis_admin: Principal) -> Self {
        let authority = Arc::new(AdminAuthority::new(genesis_admin));
        Self {
            borrowers: BorrowerRegistry::new(authority.clone()),
            collateral: CollateralRegistry::new(authority.clone()),
            authority,
        }
    }

    pub fn authority(&self) -> &AdminAuthority {
        &self.authority
    }

    pub fn borrowers(&self) -> &BorrowerRegistry {
        &self.borrowers
    }

    pub fn collateral(&self) -> &CollateralRegistry {
        &self.collateral
    }

    /// Transfer the admin role. Both registries see the new admin on their
    /// very next call.
    pub fn set_admin(
        &self,
        actor: &Principal,
        new_admin: Principal,
    ) -> Result<(), AuthorityError> {
        self.authority.set_admin(actor, new_admin)
    }

    /// Snapshot both registries into `store`.
    pub fn persist_to<S>(&self, store: &S) -> Result<(), StoreError>
    where
        S: BorrowerStore + CollateralStore,
    {
        self.borrowers.persist_to(store)?;
        self.collateral.persist_to(store)
    }

    /// Rebuild the domain from a previously persisted store.
    ///
    /// The admin principal itself is configuration, not stored state; the
    /// embedding application supplies it again, exactly as at genesis.
    pub fn load_from<S>(admin: Principal, store: &S) -> Result<Self, StoreError>
    where
        S: BorrowerStore + CollateralStore,
    {
        let authority = Arc::new(AdminAuthority::new(admin));
        Ok(Self {
            borrowers: BorrowerRegistry::load_from(authority.clone(), store)?,
            collateral: CollateralRegistry::load_from(authority.clone(), store)?,
            authority,
        })
    }

    /// Domain summary statistics.
    pub fn summary(&self) -> CoreSummary {
        CoreSummary {
            borrowers: self.borrowers.count(),
            collateral: self.collateral.count(),
            admin_version: self.authority.version(),
        }
    }
}

/// Summary statistics for the whole domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreSummary {
    pub borrowers: u64,
    pub collateral: u64,
    pub admin_version: u64,
}
