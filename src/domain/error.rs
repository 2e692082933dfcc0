use std::fmt;

use thiserror::Error;

/// Account operation that validates its amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Deposit,
    Withdraw,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => f.write_str("deposit"),
            Self::Withdraw => f.write_str("withdraw"),
        }
    }
}

/// Domain-level errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("the amount to {0} must be greater than zero")]
    InvalidAmount(OperationKind),

    #[error("insufficient funds")]
    InsufficientFunds,

    /// Only raised by bounded amount types such as `FixedPoint`
    #[error("arithmetic overflow")]
    Overflow,

    #[error("malformed amount")]
    MalformedAmount,
}
