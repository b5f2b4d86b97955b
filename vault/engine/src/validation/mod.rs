//! Rule sets deciding whether a proposed action is admissible.
//!
//! A violated rule is not an error: every rule is evaluated and the violated
//! ones are returned, in rule order, so a caller can show all of them at once.
//! Only malformed inputs, such as amounts in the wrong format, make these
//! functions fail.

mod burn;
mod mint;
mod savings;

pub use {burn::*, mint::*, savings::*};

use {
    serde::Serialize,
    vault_math::{FixedDecimal, MathResult, biggest_decimals_format},
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MintError {
    /// The wallet holds less collateral than the amount to deposit.
    InsufficientBalance,
    /// The position would be worth less than its debt at the spot price.
    BelowLiquidationRatio,
    /// The position's debt would be positive but under the debt floor.
    DebtTooLow,
    /// The collateral type's total debt would exceed its ceiling.
    DebtCeilingExceeded,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BurnError {
    /// The wallet holds less stable asset than the amount to repay.
    InsufficientBalance,
    /// The amount to repay exceeds the debt owed.
    OverRepaying,
    /// The amount to free exceeds the locked collateral.
    InvalidCollateralFreeAmount,
    /// The remaining collateral would be worth less than the remaining debt.
    CollateralizationTooLow,
    /// The remaining debt would be positive but under the debt floor.
    DebtTooLow,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SavingsError {
    /// The wallet holds less stable asset than the amount to deposit.
    InsufficientBalance,
    /// The savings balance is less than the amount to withdraw.
    InsufficientSavings,
    ZeroAmount,
}

/// `a < b`, after widening both sides to the bigger format.
pub(crate) fn less_than(a: FixedDecimal, b: FixedDecimal) -> MathResult<bool> {
    let format = biggest_decimals_format([a.format(), b.format()]);

    Ok(a.to_format(format)?.checked_cmp(&b.to_format(format)?)?.is_lt())
}

// ----------------------------------- tests -----------------------------------
