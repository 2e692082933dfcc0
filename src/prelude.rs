//! Prelude module for convenient imports
//!
//! Import everything you need with: `use bank::prelude::*;`

// Domain types
pub use crate::domain::{
    Account, AccountNumber, AmountType, Customer, DomainError, FixedPoint, Operation,
    OperationKind, Statement, statement,
};

// Engine types
pub use crate::engine::{EngineError, ScriptProcessor};

// IO types
pub use crate::io::{CsvOperationStream, IoError, RawOperationRecord, write_statements};

// Streaming types
pub use crate::streaming::{
    AbortOnError, ErrorPolicy, Flow, ReplayError, ReplaySession, SilentSkip, SkipErrors,
};

// App types
pub use crate::app::{AppError, CliApp, StdoutWriter};
