use {
    serde::{Deserialize, Serialize},
    vault_math::{FixedDecimal, MathResult, RAD, RAY, WAD},
};

/// State of a collateral type, as read from the chain right before a
/// computation. Never mutated; derive new values instead.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IlkStatus {
    /// Total normalized debt issued against this collateral type.
    #[serde(with = "vault_math::serde_raw::wad")]
    pub normalized_debt: FixedDecimal,
    /// Accumulated stability fee: actual debt per unit of normalized debt.
    #[serde(with = "vault_math::serde_raw::ray")]
    pub debt_multiplier: FixedDecimal,
    /// Spot price: the collateral's market price divided by its liquidation
    /// ratio, i.e. how much debt one unit of collateral may back.
    #[serde(with = "vault_math::serde_raw::ray")]
    pub price: FixedDecimal,
    /// Maximum total debt this collateral type may back.
    #[serde(with = "vault_math::serde_raw::rad")]
    pub debt_ceiling: FixedDecimal,
    /// Minimum debt of a single vault, unless that debt is zero.
    #[serde(with = "vault_math::serde_raw::rad")]
    pub debt_floor: FixedDecimal,
}

impl IlkStatus {
    pub fn new(
        normalized_debt: FixedDecimal,
        debt_multiplier: FixedDecimal,
        price: FixedDecimal,
        debt_ceiling: FixedDecimal,
        debt_floor: FixedDecimal,
    ) -> MathResult<Self> {
        Ok(Self {
            normalized_debt: normalized_debt.assert_format(WAD)?,
            debt_multiplier: debt_multiplier.assert_format(RAY)?,
            price: price.assert_format(RAY)?,
            debt_ceiling: debt_ceiling.assert_format(RAD)?,
            debt_floor: debt_floor.assert_format(RAD)?,
        })
    }
}

/// State of a single vault.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UrnStatus {
    pub urn_address: String,
    /// Collateral sitting in the urn but not backing any debt.
    #[serde(with = "vault_math::serde_raw::wad")]
    pub free_balance: FixedDecimal,
    /// Collateral backing debt.
    #[serde(with = "vault_math::serde_raw::wad")]
    pub locked_balance: FixedDecimal,
    /// Normalized debt. Multiply by the ilk's debt multiplier for the amount
    /// actually owed.
    #[serde(with = "vault_math::serde_raw::wad")]
    pub debt: FixedDecimal,
}

impl UrnStatus {
    pub fn new(
        urn_address: impl Into<String>,
        free_balance: FixedDecimal,
        locked_balance: FixedDecimal,
        debt: FixedDecimal,
    ) -> MathResult<Self> {
        Ok(Self {
            urn_address: urn_address.into(),
            free_balance: free_balance.assert_format(WAD)?,
            locked_balance: locked_balance.assert_format(WAD)?,
            debt: debt.assert_format(WAD)?,
        })
    }

    /// An urn that was never touched.
    pub fn empty(urn_address: impl Into<String>) -> Self {
        Self {
            urn_address: urn_address.into(),
            free_balance: FixedDecimal::zero(WAD),
            locked_balance: FixedDecimal::zero(WAD),
            debt: FixedDecimal::zero(WAD),
        }
    }
}

/// A user's position in the savings module.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsStatus {
    /// Normalized savings balance.
    #[serde(with = "vault_math::serde_raw::wad")]
    pub normalized_balance: FixedDecimal,
    /// Accumulated savings rate as of `last_update`.
    #[serde(with = "vault_math::serde_raw::ray")]
    pub accumulator: FixedDecimal,
    /// Per-second savings rate.
    #[serde(with = "vault_math::serde_raw::ray")]
    pub rate: FixedDecimal,
    /// Unix timestamp, in seconds, at which `accumulator` was last updated.
    pub last_update: u64,
}

impl SavingsStatus {
    pub fn new(
        normalized_balance: FixedDecimal,
        accumulator: FixedDecimal,
        rate: FixedDecimal,
        last_update: u64,
    ) -> MathResult<Self> {
        Ok(Self {
            normalized_balance: normalized_balance.assert_format(WAD)?,
            accumulator: accumulator.assert_format(RAY)?,
            rate: rate.assert_format(RAY)?,
            last_update,
        })
    }
}

// ----------------------------------- tests -----------------------------------
