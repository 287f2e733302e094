use lienreg_authority::AuthorityError;
use lienreg_types::{BorrowerId, Principal};
use thiserror::Error;

/// Business-rule rejections of the borrower registry.
///
/// Every variant is an ordinary expected outcome: state is untouched and
/// the registry remains fully usable afterward.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BorrowerError {
    #[error("revenue must be positive, got {0}")]
    InvalidRevenue(u64),

    #[error("credit score {0} is outside the accepted range 300..=850")]
    InvalidCreditScore(u32),

    #[error("principal {0} is not the current admin")]
    Unauthorized(Principal),

    #[error("{0} not found")]
    NotFound(BorrowerId),
}

impl From<AuthorityError> for BorrowerError {
    fn from(err: AuthorityError) -> Self {
        match err {
            AuthorityError::Unauthorized(actor) => Self::Unauthorized(actor),
        }
    }
}
