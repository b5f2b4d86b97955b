use {
    super::{MintError, less_than},
    crate::{IlkStatus, UrnStatus, accrued_debt_value, normalized_delta_for_mint},
    serde::Serialize,
    vault_math::{FixedDecimal, MathResult, RAD, RAY, WAD},
};

/// A deposit of collateral, a mint of stable asset, or both at once.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintRequest {
    /// Collateral held by the user's wallet.
    pub wallet_balance: FixedDecimal,
    /// Collateral to lock.
    pub collateral_amount: FixedDecimal,
    /// Stable asset to mint.
    pub debt_amount: FixedDecimal,
}

/// Check a mint against the current state of the vault and its collateral
/// type.
pub fn validate_mint(
    request: &MintRequest,
    urn: &UrnStatus,
    ilk: &IlkStatus,
) -> MathResult<Vec<MintError>> {
    let wallet_balance = request.wallet_balance.assert_format(WAD)?;
    let collateral_amount = request.collateral_amount.assert_format(WAD)?;
    let debt_amount = request.debt_amount.assert_format(WAD)?;

    let delta_debt = normalized_delta_for_mint(debt_amount, ilk.debt_multiplier)?;
    let projected_debt = accrued_debt_value(urn.debt, ilk.debt_multiplier, delta_debt)?;
    let projected_collateral_value = urn
        .locked_balance
        .assert_format(WAD)?
        .checked_add(collateral_amount)?
        .to_format(RAD)?
        .checked_mul(ilk.price.assert_format(RAY)?.to_format(RAD)?)?;

    let mut errors = Vec::new();

    if less_than(wallet_balance, collateral_amount)? {
        errors.push(MintError::InsufficientBalance);
    }

    let no_op = urn.debt.is_zero() && debt_amount.is_zero();

    if !no_op && less_than(projected_collateral_value, projected_debt)? {
        errors.push(MintError::BelowLiquidationRatio);
    }

    if !debt_amount.is_zero()
        && projected_debt.is_positive()
        && less_than(projected_debt, ilk.debt_floor)?
    {
        errors.push(MintError::DebtTooLow);
    }

    let projected_total_debt =
        accrued_debt_value(ilk.normalized_debt, ilk.debt_multiplier, delta_debt)?;

    if less_than(ilk.debt_ceiling, projected_total_debt)? {
        errors.push(MintError::DebtCeilingExceeded);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        urn = %urn.urn_address,
        violations = errors.len(),
        "Validated mint"
    );

    Ok(errors)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::test_utils::{ilk, rad, urn, wad},
        proptest::prelude::*,
        test_case::test_case,
    };

    fn request(wallet_balance: &str, collateral_amount: &str, debt_amount: &str) -> MintRequest {
        MintRequest {
            wallet_balance: wad(wallet_balance),
            collateral_amount: wad(collateral_amount),
            debt_amount: wad(debt_amount),
        }
    }

    // Spot price 1000, multiplier 1.1, floor 100.
    #[test_case("10", "1", "500" => Vec::<MintError>::new(); "healthy open")]
    #[test_case("0", "1", "500" => vec![MintError::InsufficientBalance]; "nothing in wallet")]
    #[test_case("10", "1", "1000" => vec![MintError::BelowLiquidationRatio]; "too much debt")]
    #[test_case("10", "1", "50" => vec![MintError::DebtTooLow]; "dust")]
    #[test_case("10", "0", "0" => Vec::<MintError>::new(); "no op")]
    #[test_case("10", "5", "0" => Vec::<MintError>::new(); "pure deposit")]
    #[test_case("0", "1", "50" => vec![MintError::InsufficientBalance, MintError::DebtTooLow]; "reports every violation")]
    fn opening_a_vault(wallet: &str, collateral: &str, debt: &str) -> Vec<MintError> {
        validate_mint(&request(wallet, collateral, debt), &urn("0", "0"), &ilk("0", "1.1", "1000"))
            .unwrap()
    }

    #[test]
    fn mint_against_existing_position() {
        let ilk = ilk("1000", "1", "1000");
        let urn = urn("2", "1000");

        // 1000 owed, 2000 of backing: 1000 more is exactly fine.
        assert!(validate_mint(&request("0", "0", "1000"), &urn, &ilk).unwrap().is_empty());
        assert_eq!(
            validate_mint(&request("0", "0", "1000.000001"), &urn, &ilk).unwrap(),
            vec![MintError::BelowLiquidationRatio]
        );
    }

    #[test]
    fn under_collateralized_deposit_is_flagged() {
        // Price crashed: 1100 owed, 1 unit worth 500.
        let ilk = ilk("1000", "1.1", "500");
        let urn = urn("1", "1000");

        assert_eq!(
            validate_mint(&request("10", "1", "0"), &urn, &ilk).unwrap(),
            vec![MintError::BelowLiquidationRatio]
        );
        assert!(validate_mint(&request("10", "2", "0"), &urn, &ilk).unwrap().is_empty());
    }

    #[test]
    fn zero_debt_delta_skips_the_floor() {
        // An existing dusty position may still take a collateral deposit.
        let mut ilk = ilk("50", "1", "1000");
        ilk.debt_floor = rad("100");
        let urn = urn("1", "50");

        assert!(validate_mint(&request("1", "1", "0"), &urn, &ilk).unwrap().is_empty());
        assert_eq!(
            validate_mint(&request("1", "1", "10"), &urn, &ilk).unwrap(),
            vec![MintError::DebtTooLow]
        );
    }

    #[test]
    fn debt_ceiling() {
        let mut ilk = ilk("1000", "1", "1000");
        ilk.debt_ceiling = rad("1500");
        let urn = urn("10", "0");

        assert!(validate_mint(&request("0", "0", "500"), &urn, &ilk).unwrap().is_empty());
        assert_eq!(
            validate_mint(&request("0", "0", "500.000000000000000001"), &urn, &ilk).unwrap(),
            vec![MintError::DebtCeilingExceeded]
        );

        // Governance lowered the ceiling below current issuance: even a pure
        // deposit reports it.
        ilk.debt_ceiling = rad("500");
        assert_eq!(
            validate_mint(&request("1", "1", "0"), &urn, &ilk).unwrap(),
            vec![MintError::DebtCeilingExceeded]
        );
    }

    #[test]
    fn rejects_amounts_in_the_wrong_format() {
        let request = MintRequest {
            wallet_balance: wad("1"),
            collateral_amount: rad("1"),
            debt_amount: wad("0"),
        };

        assert!(validate_mint(&request, &urn("0", "0"), &ilk("0", "1", "1")).is_err());
    }

    proptest! {
        /// An empty wallet can't deposit, whatever else the request does.
        #[test]
        fn empty_wallet_is_always_insufficient(
            debt in 0_i128..1_000_000,
            locked in 0_i128..100,
            price in 0_i128..10_000,
        ) {
            let mut ilk = ilk("0", "1", "0");
            ilk.price = FixedDecimal::new_ray(price);
            ilk.debt_floor = rad("1000000000000");

            let request = MintRequest {
                wallet_balance: FixedDecimal::zero(WAD),
                collateral_amount: FixedDecimal::new_wad(10),
                debt_amount: FixedDecimal::new_wad(debt),
            };
            let urn = UrnStatus {
                locked_balance: FixedDecimal::new_wad(locked),
                ..urn("0", "0")
            };

            let errors = validate_mint(&request, &urn, &ilk).unwrap();
            prop_assert_eq!(errors.first(), Some(&MintError::InsufficientBalance));
            prop_assert!(!errors.contains(&MintError::DebtCeilingExceeded));
        }
    }
}
