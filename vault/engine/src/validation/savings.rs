use {
    super::{SavingsError, less_than},
    crate::{SavingsStatus, savings_balance},
    vault_math::{FixedDecimal, MathResult, WAD},
};

/// Check a deposit of `amount` stable asset into the savings module.
pub fn validate_savings_deposit(
    wallet_balance: FixedDecimal,
    amount: FixedDecimal,
) -> MathResult<Vec<SavingsError>> {
    let wallet_balance = wallet_balance.assert_format(WAD)?;
    let amount = amount.assert_format(WAD)?;

    let mut errors = Vec::new();

    if less_than(wallet_balance, amount)? {
        errors.push(SavingsError::InsufficientBalance);
    }

    if !amount.is_positive() {
        errors.push(SavingsError::ZeroAmount);
    }

    Ok(errors)
}

/// Check a withdrawal of `amount` stable asset from the savings module at
/// time `now`.
pub fn validate_savings_withdraw(
    status: &SavingsStatus,
    now: u64,
    amount: FixedDecimal,
) -> MathResult<Vec<SavingsError>> {
    let amount = amount.assert_format(WAD)?;
    let balance = savings_balance(status, now)?;

    let mut errors = Vec::new();

    if less_than(balance, amount)? {
        errors.push(SavingsError::InsufficientSavings);
    }

    if !amount.is_positive() {
        errors.push(SavingsError::ZeroAmount);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(%balance, violations = errors.len(), "Validated savings withdrawal");

    Ok(errors)
}

// ----------------------------------- tests -----------------------------------
