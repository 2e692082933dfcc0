use std::collections::BTreeMap;

use tracing::debug;

use super::error::EngineError;
use crate::domain::{
    Account, AccountNumber, AmountType, Customer, Operation, apply_deposit, apply_transfer,
    apply_withdrawal,
};

/// Applies script operations to an in-memory book of accounts
///
/// Accounts are keyed by number. Opening a number twice is rejected here, since
/// the account type itself never checks uniqueness.
pub struct ScriptProcessor<A: AmountType> {
    accounts: BTreeMap<AccountNumber, Account<A>>,
}

impl<A: AmountType> ScriptProcessor<A> {
    /// Create a processor with no accounts
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }

    /// Process a single operation
    pub fn process_operation(&mut self, op: Operation<A>) -> Result<(), EngineError> {
        let kind = op.kind();
        let number = op.number();

        let result = match op {
            Operation::Open {
                number,
                customer,
                balance,
            } => self.process_open(number, customer, balance),
            Operation::Deposit { number, amount } => self.process_deposit(number, amount),
            Operation::Withdraw { number, amount } => self.process_withdraw(number, amount),
            Operation::Transfer {
                number,
                target,
                amount,
            } => self.process_transfer(number, target, amount),
        };

        if let Err(error) = &result {
            debug!(operation = kind, account = number, %error, "Operation rejected");
        }
        result
    }

    /// Look up an account by number
    pub fn account(&self, number: AccountNumber) -> Option<&Account<A>> {
        self.accounts.get(&number)
    }

    /// All accounts in ascending number order
    pub fn accounts(&self) -> impl Iterator<Item = &Account<A>> + '_ {
        self.accounts.values()
    }

    fn account_mut(&mut self, number: AccountNumber) -> Result<&mut Account<A>, EngineError> {
        self.accounts
            .get_mut(&number)
            .ok_or(EngineError::UnknownAccount(number))
    }

    fn process_open(
        &mut self,
        number: AccountNumber,
        customer: Customer,
        balance: A,
    ) -> Result<(), EngineError> {
        debug!(account = number, %balance, "Opening account");

        if self.accounts.contains_key(&number) {
            return Err(EngineError::DuplicateAccount(number));
        }

        self.accounts
            .insert(number, Account::new(customer, number, balance));
        Ok(())
    }

    fn process_deposit(&mut self, number: AccountNumber, amount: A) -> Result<(), EngineError> {
        debug!(account = number, %amount, "Processing deposit");

        apply_deposit(self.account_mut(number)?, amount)?;
        Ok(())
    }

    fn process_withdraw(&mut self, number: AccountNumber, amount: A) -> Result<(), EngineError> {
        debug!(account = number, %amount, "Processing withdrawal");

        apply_withdrawal(self.account_mut(number)?, amount)?;
        Ok(())
    }

    fn process_transfer(
        &mut self,
        number: AccountNumber,
        target: AccountNumber,
        amount: A,
    ) -> Result<(), EngineError> {
        debug!(account = number, to = target, %amount, "Processing transfer");

        // Source is reported first when both are missing
        if !self.accounts.contains_key(&number) {
            return Err(EngineError::UnknownAccount(number));
        }
        if !self.accounts.contains_key(&target) {
            return Err(EngineError::UnknownAccount(target));
        }

        if number == target {
            let account = self.account_mut(number)?;
            apply_withdrawal(account, amount)?;
            apply_deposit(account, amount)?;
            return Ok(());
        }

        // Take the source out so both accounts can be borrowed mutably
        let mut source = self
            .accounts
            .remove(&number)
            .ok_or(EngineError::UnknownAccount(number))?;
        let result = match self.accounts.get_mut(&target) {
            Some(target_account) => {
                apply_transfer(&mut source, target_account, amount).map_err(EngineError::from)
            }
            None => Err(EngineError::UnknownAccount(target)),
        };
        self.accounts.insert(number, source);

        result
    }
}

impl<A: AmountType> Default for ScriptProcessor<A> {
    fn default() -> Self {
        Self::new()
    }
}
