use super::amount::AmountType;
use super::customer::Customer;
use super::error::DomainError;
use super::operations;
use super::statement::Statement;

/// Account identifier. Uniqueness is the caller's concern.
pub type AccountNumber = i32;

/// Bank account owning its customer's details
///
/// Construction performs no validation: any number and any opening balance,
/// including a negative one, is accepted. After that the balance only moves
/// through [`deposit`](Self::deposit), [`withdraw`](Self::withdraw) and the
/// transfer methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Account<A: AmountType = f64> {
    customer: Customer,
    number: AccountNumber,
    balance: A,
}

impl<A: AmountType> Account<A> {
    /// Create an account from caller-supplied values
    pub fn new(customer: Customer, number: AccountNumber, balance: A) -> Self {
        Self {
            customer,
            number,
            balance,
        }
    }

    /// Get the account holder
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Get the account number
    pub fn number(&self) -> AccountNumber {
        self.number
    }

    /// Get the current balance
    pub fn balance(&self) -> A {
        self.balance
    }

    /// Credit `amount`; rejects non-positive amounts
    pub fn deposit(&mut self, amount: A) -> Result<(), DomainError> {
        operations::apply_deposit(self, amount)
    }

    /// Debit `amount`; rejects amounts above the balance, then non-positive amounts
    pub fn withdraw(&mut self, amount: A) -> Result<(), DomainError> {
        operations::apply_withdrawal(self, amount)
    }

    /// Withdraw from `self`, then deposit into `to`.
    ///
    /// Not atomic: if the deposit fails, `self` stays debited.
    /// Use [`transfer_atomic`](Self::transfer_atomic) to avoid that.
    pub fn transfer(&mut self, to: &mut Account<A>, amount: A) -> Result<(), DomainError> {
        operations::apply_transfer(self, to, amount)
    }

    /// Move `amount` to `to`, mutating neither account unless both sides succeed
    pub fn transfer_atomic(&mut self, to: &mut Account<A>, amount: A) -> Result<(), DomainError> {
        operations::apply_transfer_atomic(self, to, amount)
    }

    pub(crate) fn set_balance(&mut self, amount: A) {
        self.balance = amount;
    }
}

impl<A: AmountType> Statement for Account<A> {
    fn statement(&self) -> String {
        format!(
            "{}, {} - Balance: {}",
            self.number, self.customer.name, self.balance
        )
    }
}
