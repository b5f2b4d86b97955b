use {
    crate::{SavingsStatus, rates::project_multiplier},
    vault_math::{FixedDecimal, MathResult, RAD, WAD},
};

/// Stable asset redeemable from the savings module at `now`, accruing the
/// savings rate since the status was read. Truncated to WAD.
///
/// A `now` earlier than the last update counts as no time passing.
pub fn savings_balance(status: &SavingsStatus, now: u64) -> MathResult<FixedDecimal> {
    let elapsed = now.saturating_sub(status.last_update);
    let accumulator = project_multiplier(status.accumulator, status.rate, elapsed)?;

    status
        .normalized_balance
        .assert_format(WAD)?
        .to_format(RAD)?
        .checked_mul(accumulator.to_format(RAD)?)?
        .to_format(WAD)
}

// ----------------------------------- tests -----------------------------------
