//! Derived quantities of a vault.
//!
//! ## On rounding
//!
//! Every quantity here is computed in the widest format involved, usually
//! RAD, and only narrowed at the very end, so intermediate steps lose as
//! little as possible. Narrowing truncates, like the ledger does, with two
//! exceptions:
//!
//! - the issuance amount is rounded _up_ to WAD, so the ratio the user picked
//!   is what the position ends up at;
//! - conversions from a stable-asset amount to normalized debt round to the
//!   advantage of the protocol: up when minting, down when repaying.

use {
    crate::{IlkStatus, UrnStatus},
    vault_math::{FixedDecimal, MathResult, RAD, RAY, WAD, biggest_decimals_format},
};

/// How much stable asset a deposit of `collateral_amount` yields when the
/// position should sit at `collateral_ratio` (`1.75` for 175%).
///
/// `price` is the spot price, i.e. market price over `liquidation_ratio`, so
/// `collateral_amount * price * liquidation_ratio` is the deposit's market
/// value. A zero ratio, which forms produce while the user is still typing,
/// yields zero instead of dividing by zero.
pub fn issuance_amount(
    collateral_amount: FixedDecimal,
    collateral_ratio: FixedDecimal,
    liquidation_ratio: FixedDecimal,
    price: FixedDecimal,
) -> MathResult<FixedDecimal> {
    if collateral_ratio.is_zero() {
        return Ok(FixedDecimal::zero(WAD));
    }

    let format = biggest_decimals_format([
        collateral_amount.format(),
        collateral_ratio.format(),
        liquidation_ratio.format(),
        price.format(),
    ]);

    collateral_amount
        .to_format(format)?
        .checked_mul(price.to_format(format)?)?
        .checked_mul(liquidation_ratio.to_format(format)?)?
        .checked_div(collateral_ratio.to_format(format)?)?
        .checked_ceil(WAD.decimals)?
        .to_format(WAD)
}

/// Actual debt, in RAD, of `normalized_debt + delta_debt` units of normalized
/// debt. The product of a WAD and a RAY is exact in RAD.
pub fn accrued_debt_value(
    normalized_debt: FixedDecimal,
    debt_multiplier: FixedDecimal,
    delta_debt: FixedDecimal,
) -> MathResult<FixedDecimal> {
    let normalized_debt = normalized_debt
        .assert_format(WAD)?
        .checked_add(delta_debt.assert_format(WAD)?)?;

    normalized_debt
        .to_format(RAD)?
        .checked_mul(debt_multiplier.assert_format(RAY)?.to_format(RAD)?)
}

/// Amount of stable asset owed for `normalized_debt`, truncated to WAD.
pub fn accrued_debt(
    normalized_debt: FixedDecimal,
    debt_multiplier: FixedDecimal,
) -> MathResult<FixedDecimal> {
    accrued_debt_with_delta(normalized_debt, debt_multiplier, FixedDecimal::zero(WAD))
}

/// Like [`accrued_debt`], projected after a hypothetical change of
/// `delta_debt` normalized units: positive for a mint, negative for a burn.
pub fn accrued_debt_with_delta(
    normalized_debt: FixedDecimal,
    debt_multiplier: FixedDecimal,
    delta_debt: FixedDecimal,
) -> MathResult<FixedDecimal> {
    accrued_debt_value(normalized_debt, debt_multiplier, delta_debt)?.to_format(WAD)
}

/// Market value of the collateral over the value of the debt, in RAY.
///
/// With no debt the ratio is zero rather than infinite, so comparisons stay
/// total.
pub fn collateralization_ratio(
    locked_collateral: FixedDecimal,
    debt: FixedDecimal,
    liquidation_ratio: FixedDecimal,
    ilk: &IlkStatus,
) -> MathResult<FixedDecimal> {
    let debt_value = accrued_debt_value(debt, ilk.debt_multiplier, FixedDecimal::zero(WAD))?;

    if debt_value.is_zero() {
        #[cfg(feature = "tracing")]
        tracing::trace!("No debt; collateralization ratio defined as zero");

        return Ok(FixedDecimal::zero(RAY));
    }

    locked_collateral
        .assert_format(WAD)?
        .to_format(RAD)?
        .checked_mul(ilk.price.assert_format(RAY)?.to_format(RAD)?)?
        .checked_mul(liquidation_ratio.to_format(RAD)?)?
        .checked_div(debt_value)?
        .to_format(RAY)
}

/// Market price of the collateral at which the collateralization ratio
/// drops to exactly the liquidation ratio, in RAY.
///
/// Zero when there is no debt. `None` when there is debt but no collateral:
/// such a position is liquidatable at any price.
///
/// The result is `debt * liquidation_ratio / locked`. Dividing the debt by
/// `locked * liquidation_ratio` instead gives a number at which the vault is
/// nowhere near liquidation, so the ratio multiplies here.
pub fn liquidation_price(
    locked_collateral: FixedDecimal,
    debt: FixedDecimal,
    debt_multiplier: FixedDecimal,
    liquidation_ratio: FixedDecimal,
) -> MathResult<Option<FixedDecimal>> {
    let debt_value = accrued_debt_value(debt, debt_multiplier, FixedDecimal::zero(WAD))?;

    if debt_value.is_zero() {
        return Ok(Some(FixedDecimal::zero(RAY)));
    }

    let locked_collateral = locked_collateral.assert_format(WAD)?;

    if locked_collateral.is_zero() {
        #[cfg(feature = "tracing")]
        tracing::trace!("Debt without collateral; no liquidation price");

        return Ok(None);
    }

    debt_value
        .checked_mul(liquidation_ratio.to_format(RAD)?)?
        .checked_div(locked_collateral.to_format(RAD)?)?
        .to_format(RAY)
        .map(Some)
}

/// Normalized debt to add when minting `amount` of stable asset.
///
/// NOTE: round up.
pub fn normalized_delta_for_mint(
    amount: FixedDecimal,
    debt_multiplier: FixedDecimal,
) -> MathResult<FixedDecimal> {
    amount
        .assert_format(WAD)?
        .to_format(RAD)?
        .checked_div(debt_multiplier.assert_format(RAY)?.to_format(RAD)?)?
        .checked_ceil(WAD.decimals)?
        .to_format(WAD)
}

/// Normalized debt to remove when repaying `amount` of stable asset.
///
/// Repaying at least the whole accrued debt wipes the normalized debt
/// entirely, so a vault can always be closed. Otherwise, round down.
pub fn normalized_delta_for_repay(
    amount: FixedDecimal,
    debt_multiplier: FixedDecimal,
    normalized_debt: FixedDecimal,
) -> MathResult<FixedDecimal> {
    let amount = amount.assert_format(WAD)?;
    let owed = accrued_debt(normalized_debt, debt_multiplier)?;

    if amount.checked_cmp(&owed)?.is_ge() {
        return Ok(normalized_debt);
    }

    amount
        .to_format(RAD)?
        .checked_div(debt_multiplier.to_format(RAD)?)?
        .checked_floor(WAD.decimals)?
        .to_format(WAD)
}

/// Stable asset that can still be minted against the urn's locked collateral
/// without falling below the liquidation ratio.
pub fn available_to_generate(urn: &UrnStatus, ilk: &IlkStatus) -> MathResult<FixedDecimal> {
    let collateral_value = urn
        .locked_balance
        .assert_format(WAD)?
        .to_format(RAD)?
        .checked_mul(ilk.price.assert_format(RAY)?.to_format(RAD)?)?;
    let debt_value = accrued_debt_value(urn.debt, ilk.debt_multiplier, FixedDecimal::zero(WAD))?;

    collateral_value
        .checked_sub(debt_value)?
        .checked_max(FixedDecimal::zero(RAD))?
        .to_format(WAD)
}

/// Locked collateral that can be freed while keeping the debt backed.
pub fn withdrawable_collateral(urn: &UrnStatus, ilk: &IlkStatus) -> MathResult<FixedDecimal> {
    let locked = urn.locked_balance.assert_format(WAD)?;
    let debt_value = accrued_debt_value(urn.debt, ilk.debt_multiplier, FixedDecimal::zero(WAD))?;

    if debt_value.is_zero() {
        return Ok(locked);
    }

    let price = ilk.price.assert_format(RAY)?;

    if price.is_zero() {
        return Ok(FixedDecimal::zero(WAD));
    }

    // Collateral needed to back the debt, rounded up so that freeing the rest
    // never trips the liquidation rule.
    let required = debt_value
        .checked_div(price.to_format(RAD)?)?
        .checked_ceil(WAD.decimals)?
        .to_format(WAD)?;

    locked
        .checked_sub(required)?
        .checked_max(FixedDecimal::zero(WAD))
}

// ----------------------------------- tests -----------------------------------
