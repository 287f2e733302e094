use lienreg_types::Principal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthorityError {
    #[error("principal {0} is not the current admin")]
    Unauthorized(Principal),
}
