//! In-memory bank accounts.
//!
//! The core is [`domain::Account`]: a customer, an account number and a
//! balance, changed only through deposit, withdraw and transfer. Anything
//! implementing [`domain::Statement`] renders a one-line statement.
//!
//! The remaining modules drive accounts from a CSV script:
//! [`io`] parses it, [`engine`] applies operations, [`streaming`] decides what
//! to do with rejected rows and [`app`] runs it all as a command-line tool.

pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
pub mod streaming;
