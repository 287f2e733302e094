//! The admin principal, behind one read-mostly lock.

use crate::error::AuthorityError;
use lienreg_types::Principal;
use std::sync::RwLock;
use tracing::info;

struct AdminState {
    admin: Principal,
    /// Bumped on every successful transfer. Lets an embedding application
    /// detect that privilege moved between two observations.
    version: u64,
}

/// The single process-wide admin identity.
///
/// Thread-safe for shared access; registries hold it behind an `Arc`.
/// Transfer is self-gated: only the current holder can replace itself.
pub struct AdminAuthority {
    inner: RwLock<AdminState>,
}

impl AdminAuthority {
    /// Create the authority with its genesis admin.
    pub fn new(genesis_admin: Principal) -> Self {
        Self {
            inner: RwLock::new(AdminState {
                admin: genesis_admin,
                version: 0,
            }),
        }
    }

    /// The current admin principal.
    pub fn current(&self) -> Principal {
        self.inner.read().expect("authority lock poisoned").admin.clone()
    }

    /// How many transfers have happened since genesis.
    pub fn version(&self) -> u64 {
        self.inner.read().expect("authority lock poisoned").version
    }

    /// Whether `actor` is the current admin.
    pub fn is_admin(&self, actor: &Principal) -> bool {
        self.inner.read().expect("authority lock poisoned").admin == *actor
    }

    /// The single accessor every privileged operation authorizes through.
    pub fn require_admin(&self, actor: &Principal) -> Result<(), AuthorityError> {
        if self.is_admin(actor) {
            Ok(())
        } else {
            Err(AuthorityError::Unauthorized(actor.clone()))
        }
    }

    /// Transfer the admin role to `new_admin`.
    ///
    /// Only the current admin may do this. The replacement is atomic: the
    /// check and the swap happen under one write lock, and the old principal
    /// loses privileged access the moment this returns.
    pub fn set_admin(
        &self,
        actor: &Principal,
        new_admin: Principal,
    ) -> Result<(), AuthorityError> {
        let mut state = self.inner.write().expect("authority lock poisoned");
        if state.admin != *actor {
            return Err(AuthorityError::Unauthorized(actor.clone()));
        }
        info!(old = %state.admin, new = %new_admin, version = state.version + 1, "admin transferred");
        state.admin = new_admin;
        state.version += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Principal {
        Principal::new(s)
    }

    #[test]
    fn genesis_admin_is_recognized() {
        let authority = AdminAuthority::new(p("admin"));
        assert!(authority.is_admin(&p("admin")));
        assert!(!authority.is_admin(&p("intruder")));
        assert!(authority.require_admin(&p("admin")).is_ok());
    }

    #[test]
    fn non_admin_cannot_transfer() {
        let authority = AdminAuthority::new(p("admin"));
        let err = authority.set_admin(&p("intruder"), p("intruder")).unwrap_err();
        assert_eq!(err, AuthorityError::Unauthorized(p("intruder")));
        assert_eq!(authority.current(), p("admin"));
        assert_eq!(authority.version(), 0);
    }

    #[test]
    fn transfer_moves_privilege_immediately() {
        let authority = AdminAuthority::new(p("admin"));
        authority.set_admin(&p("admin"), p("successor")).unwrap();

        assert_eq!(authority.current(), p("successor"));
        assert_eq!(authority.version(), 1);
        assert!(authority.require_admin(&p("successor")).is_ok());
        // The old principal is locked out, including from transferring back.
        assert!(authority.require_admin(&p("admin")).is_err());
        assert!(authority.set_admin(&p("admin"), p("admin")).is_err());
    }
}
