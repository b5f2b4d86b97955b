use {
    super::{BurnError, less_than},
    crate::{IlkStatus, UrnStatus, accrued_debt_value, normalized_delta_for_repay},
    serde::Serialize,
    vault_math::{FixedDecimal, MathResult, RAD, RAY, WAD},
};

/// A repayment of stable asset, a withdrawal of collateral, or both at once.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurnRequest {
    /// Stable asset held by the user's wallet.
    pub wallet_balance: FixedDecimal,
    /// Stable asset to repay.
    pub repay_amount: FixedDecimal,
    /// Collateral to unlock.
    pub free_amount: FixedDecimal,
}

/// Check a burn against the current state of the vault and its collateral
/// type.
pub fn validate_burn(
    request: &BurnRequest,
    urn: &UrnStatus,
    ilk: &IlkStatus,
) -> MathResult<Vec<BurnError>> {
    let wallet_balance = request.wallet_balance.assert_format(WAD)?;
    let repay_amount = request.repay_amount.assert_format(WAD)?;
    let free_amount = request.free_amount.assert_format(WAD)?;
    let locked_balance = urn.locked_balance.assert_format(WAD)?;

    let debt = accrued_debt_value(urn.debt, ilk.debt_multiplier, FixedDecimal::zero(WAD))?;
    let delta_debt = normalized_delta_for_repay(repay_amount, ilk.debt_multiplier, urn.debt)?;
    let debt_after = accrued_debt_value(urn.debt, ilk.debt_multiplier, -delta_debt)?;

    // Freeing more than is locked is reported on its own; don't let it
    // also push the remaining collateral below zero.
    let collateral_value_after = locked_balance
        .checked_sub(free_amount)?
        .checked_max(FixedDecimal::zero(WAD))?
        .to_format(RAD)?
        .checked_mul(ilk.price.assert_format(RAY)?.to_format(RAD)?)?;

    let mut errors = Vec::new();

    if less_than(wallet_balance, repay_amount)? {
        errors.push(BurnError::InsufficientBalance);
    }

    if less_than(debt, repay_amount.to_format(RAD)?)? {
        errors.push(BurnError::OverRepaying);
    }

    if less_than(locked_balance, free_amount)? {
        errors.push(BurnError::InvalidCollateralFreeAmount);
    }

    if less_than(collateral_value_after, debt_after)? {
        errors.push(BurnError::CollateralizationTooLow);
    }

    // Closing the vault entirely is always allowed.
    if debt_after.is_positive() && less_than(debt_after, ilk.debt_floor)? {
        errors.push(BurnError::DebtTooLow);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        urn = %urn.urn_address,
        violations = errors.len(),
        "Validated burn"
    );

    Ok(errors)
}

// ----------------------------------- tests -----------------------------------
