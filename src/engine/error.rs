use thiserror::Error;

use crate::domain::{AccountNumber, DomainError};

/// Engine-level errors for script processing
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown account: {0}")]
    UnknownAccount(AccountNumber),

    #[error("Account already open: {0}")]
    DuplicateAccount(AccountNumber),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
