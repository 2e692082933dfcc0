pub mod account;
pub mod amount;
pub mod customer;
pub mod error;
pub mod operation;
pub mod operations;
pub mod statement;

// Re-export commonly used types
pub use account::{Account, AccountNumber};
pub use amount::{AmountType, FixedPoint};
pub use customer::Customer;
pub use error::{DomainError, OperationKind};
pub use operation::Operation;
pub use operations::{apply_deposit, apply_transfer, apply_transfer_atomic, apply_withdrawal};
pub use statement::{Statement, statement};
