use {
    crate::{
        config::DisplayConfig,
        input::{parse_amount, read_snapshot},
        output::{PrintableValidation, present, print_json_pretty},
    },
    clap::Parser,
    serde::Serialize,
    std::path::PathBuf,
    vault_engine::{
        BurnRequest, IlkStatus, MintRequest, UrnStatus, accrued_debt, available_to_generate,
        collateralization_ratio, issuance_amount, liquidation_price, validate_burn, validate_mint,
        withdrawable_collateral,
    },
    vault_math::{RAY, WAD},
};

/// Snapshots of a collateral type and one of its vaults.
#[derive(Parser)]
pub struct Snapshots {
    /// JSON file with the collateral type's status
    #[arg(long)]
    ilk: PathBuf,

    /// JSON file with the vault's status
    #[arg(long)]
    urn: PathBuf,
}

impl Snapshots {
    fn read(&self) -> anyhow::Result<(IlkStatus, UrnStatus)> {
        Ok((read_snapshot(&self.ilk)?, read_snapshot(&self.urn)?))
    }
}

#[derive(Parser)]
pub struct InspectCmd {
    #[command(flatten)]
    snapshots: Snapshots,

    /// Liquidation ratio of the collateral type, e.g. 1.5 for 150%
    #[arg(long, default_value = "1.5")]
    liquidation_ratio: String,
}

#[derive(Serialize)]
struct PrintableVault {
    urn_address: String,
    locked_collateral: String,
    free_collateral: String,
    debt: String,
    collateralization_ratio: String,
    /// `None` if the vault has debt but no collateral.
    liquidation_price: Option<String>,
    available_to_generate: String,
    withdrawable_collateral: String,
}

impl InspectCmd {
    pub fn run(self, display: &DisplayConfig) -> anyhow::Result<()> {
        let (ilk, urn) = self.snapshots.read()?;
        let liquidation_ratio = parse_amount(&self.liquidation_ratio, RAY)?;

        let ratio =
            collateralization_ratio(urn.locked_balance, urn.debt, liquidation_ratio, &ilk)?;
        let price = liquidation_price(
            urn.locked_balance,
            urn.debt,
            ilk.debt_multiplier,
            liquidation_ratio,
        )?;

        print_json_pretty(PrintableVault {
            locked_collateral: present(urn.locked_balance, display)?,
            free_collateral: present(urn.free_balance, display)?,
            debt: present(accrued_debt(urn.debt, ilk.debt_multiplier)?, display)?,
            collateralization_ratio: present(ratio, display)?,
            liquidation_price: price.map(|price| present(price, display)).transpose()?,
            available_to_generate: present(available_to_generate(&urn, &ilk)?, display)?,
            withdrawable_collateral: present(withdrawable_collateral(&urn, &ilk)?, display)?,
            urn_address: urn.urn_address,
        })
    }
}

#[derive(Parser)]
pub struct IssuanceCmd {
    /// Amount of collateral to deposit
    collateral: String,

    /// Target collateralization ratio, e.g. 1.75 for 175%
    ratio: String,

    /// Liquidation ratio of the collateral type, e.g. 1.5 for 150%
    #[arg(long, default_value = "1.5")]
    liquidation_ratio: String,

    /// Spot price of the collateral: market price over liquidation ratio
    #[arg(long)]
    price: String,
}

impl IssuanceCmd {
    pub fn run(self, display: &DisplayConfig) -> anyhow::Result<()> {
        let amount = issuance_amount(
            parse_amount(&self.collateral, WAD)?,
            parse_amount(&self.ratio, RAY)?,
            parse_amount(&self.liquidation_ratio, RAY)?,
            parse_amount(&self.price, RAY)?,
        )?;

        tracing::info!(%amount, "Computed issuance amount");

        println!("{}", present(amount, display)?);

        Ok(())
    }
}

#[derive(Parser)]
pub struct MintCmd {
    #[command(flatten)]
    snapshots: Snapshots,

    /// Collateral held by the wallet
    #[arg(long)]
    wallet_balance: String,

    /// Collateral to lock
    #[arg(long, default_value = "0")]
    collateral: String,

    /// Stable asset to mint
    #[arg(long, default_value = "0")]
    debt: String,
}

impl MintCmd {
    pub fn run(self) -> anyhow::Result<()> {
        let (ilk, urn) = self.snapshots.read()?;

        let request = MintRequest {
            wallet_balance: parse_amount(&self.wallet_balance, WAD)?,
            collateral_amount: parse_amount(&self.collateral, WAD)?,
            debt_amount: parse_amount(&self.debt, WAD)?,
        };

        print_json_pretty(PrintableValidation::from(validate_mint(&request, &urn, &ilk)?))
    }
}

#[derive(Parser)]
pub struct BurnCmd {
    #[command(flatten)]
    snapshots: Snapshots,

    /// Stable asset held by the wallet
    #[arg(long)]
    wallet_balance: String,

    /// Stable asset to repay
    #[arg(long, default_value = "0")]
    repay: String,

    /// Collateral to unlock
    #[arg(long, default_value = "0")]
    free: String,
}

impl BurnCmd {
    pub fn run(self) -> anyhow::Result<()> {
        let (ilk, urn) = self.snapshots.read()?;

        let request = BurnRequest {
            wallet_balance: parse_amount(&self.wallet_balance, WAD)?,
            repay_amount: parse_amount(&self.repay, WAD)?,
            free_amount: parse_amount(&self.free, WAD)?,
        };

        print_json_pretty(PrintableValidation::from(validate_burn(&request, &urn, &ilk)?))
    }
}
