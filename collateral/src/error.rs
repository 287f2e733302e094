use lienreg_authority::AuthorityError;
use lienreg_types::{CollateralId, LoanId, Principal};
use thiserror::Error;

/// Business-rule rejections of the collateral registry.
///
/// The check order is part of the contract: authorization, then existence,
/// then lifecycle state. The first failing precondition is the one reported.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollateralError {
    #[error("asset value must be positive, got {0}")]
    InvalidAssetValue(u64),

    #[error("principal {0} is not the current admin")]
    Unauthorized(Principal),

    #[error("{0} not found")]
    NotFound(CollateralId),

    #[error("{0} has not been verified yet")]
    NotRegistered(CollateralId),

    #[error("{id} already backs {loan}")]
    AlreadyAssigned { id: CollateralId, loan: LoanId },

    #[error("{0} does not back any loan")]
    NotAssigned(CollateralId),
}

impl From<AuthorityError> for CollateralError {
    fn from(err: AuthorityError) -> Self {
        match err {
            AuthorityError::Unauthorized(actor) => Self::Unauthorized(actor),
        }
    }
}
