use std::cmp::Ordering;

use super::account::Account;
use super::amount::AmountType;
use super::error::{DomainError, OperationKind};

/// `amount <= 0`. False for NaN, which passes the sign check.
fn is_non_positive<A: AmountType>(amount: A) -> bool {
    matches!(
        amount.partial_cmp(&A::zero()),
        Some(Ordering::Less | Ordering::Equal)
    )
}

/// Balance after crediting `amount`, without mutating the account
fn credited<A: AmountType>(account: &Account<A>, amount: A) -> Result<A, DomainError> {
    if is_non_positive(amount) {
        return Err(DomainError::InvalidAmount(OperationKind::Deposit));
    }

    account
        .balance()
        .checked_add(amount)
        .ok_or(DomainError::Overflow)
}

/// Balance after debiting `amount`, without mutating the account
fn debited<A: AmountType>(account: &Account<A>, amount: A) -> Result<A, DomainError> {
    // Funds are checked before the sign of the amount; callers observe
    // InvalidAmount for a negative amount only when it is within balance.
    if amount > account.balance() {
        return Err(DomainError::InsufficientFunds);
    }

    if is_non_positive(amount) {
        return Err(DomainError::InvalidAmount(OperationKind::Withdraw));
    }

    account
        .balance()
        .checked_sub(amount)
        .ok_or(DomainError::Overflow)
}

/// Apply a deposit to an account
pub fn apply_deposit<A: AmountType>(
    account: &mut Account<A>,
    amount: A,
) -> Result<(), DomainError> {
    let new_balance = credited(account, amount)?;
    account.set_balance(new_balance);
    Ok(())
}

/// Apply a withdrawal from an account
pub fn apply_withdrawal<A: AmountType>(
    account: &mut Account<A>,
    amount: A,
) -> Result<(), DomainError> {
    let new_balance = debited(account, amount)?;
    account.set_balance(new_balance);
    Ok(())
}

/// Withdraw from `source`, then deposit into `target`
///
/// Errors from either step are returned unchanged. There is no rollback: when
/// the deposit fails, `source` has already been debited.
pub fn apply_transfer<A: AmountType>(
    source: &mut Account<A>,
    target: &mut Account<A>,
    amount: A,
) -> Result<(), DomainError> {
    apply_withdrawal(source, amount)?;
    apply_deposit(target, amount)?;
    Ok(())
}

/// Transfer that mutates neither account unless both sides succeed
///
/// Runs the same checks in the same order as [`apply_transfer`], so it fails
/// with the same error in every case; only the partial debit differs.
pub fn apply_transfer_atomic<A: AmountType>(
    source: &mut Account<A>,
    target: &mut Account<A>,
    amount: A,
) -> Result<(), DomainError> {
    let source_balance = debited(source, amount)?;
    let target_balance = credited(target, amount)?;

    source.set_balance(source_balance);
    target.set_balance(target_balance);
    Ok(())
}
