use super::account::AccountNumber;
use super::amount::AmountType;
use super::customer::Customer;

/// A single step of an account script
#[derive(Debug, Clone, PartialEq)]
pub enum Operation<A: AmountType> {
    Open {
        number: AccountNumber,
        customer: Customer,
        balance: A,
    },
    Deposit {
        number: AccountNumber,
        amount: A,
    },
    Withdraw {
        number: AccountNumber,
        amount: A,
    },
    Transfer {
        number: AccountNumber,
        target: AccountNumber,
        amount: A,
    },
}

impl<A: AmountType> Operation<A> {
    /// Account the operation acts on (the source, for transfers)
    pub fn number(&self) -> AccountNumber {
        match self {
            Self::Open { number, .. }
            | Self::Deposit { number, .. }
            | Self::Withdraw { number, .. }
            | Self::Transfer { number, .. } => *number,
        }
    }

    /// Short lowercase name, as written in scripts
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::Deposit { .. } => "deposit",
            Self::Withdraw { .. } => "withdraw",
            Self::Transfer { .. } => "transfer",
        }
    }
}
