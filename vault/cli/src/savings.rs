use {
    crate::{
        config::DisplayConfig,
        input::{parse_amount, read_snapshot, unix_now},
        output::{PrintableValidation, present, print_json_pretty},
    },
    clap::{Parser, Subcommand},
    serde::Serialize,
    std::path::PathBuf,
    vault_engine::{
        SavingsStatus, annual_percentage, savings_balance, validate_savings_deposit,
        validate_savings_withdraw,
    },
    vault_math::WAD,
};

#[derive(Parser)]
pub struct SavingsSnapshot {
    /// JSON file with the savings position
    #[arg(long)]
    status: PathBuf,

    /// Unix timestamp to evaluate at [default: now]
    #[arg(long)]
    now: Option<u64>,
}

impl SavingsSnapshot {
    fn read(&self) -> anyhow::Result<(SavingsStatus, u64)> {
        let now = match self.now {
            Some(now) => now,
            None => unix_now()?,
        };

        Ok((read_snapshot(&self.status)?, now))
    }
}

#[derive(Subcommand)]
pub enum SavingsCmd {
    /// Show the savings balance, including accrued savings
    Balance {
        #[command(flatten)]
        snapshot: SavingsSnapshot,
    },
    /// Check whether a deposit is admissible
    Deposit {
        /// Stable asset held by the wallet
        #[arg(long)]
        wallet_balance: String,
        /// Stable asset to deposit
        amount: String,
    },
    /// Check whether a withdrawal is admissible
    Withdraw {
        #[command(flatten)]
        snapshot: SavingsSnapshot,
        /// Stable asset to withdraw
        amount: String,
    },
}

#[derive(Serialize)]
struct PrintableBalance {
    balance: String,
    annual_percentage: String,
}

impl SavingsCmd {
    pub fn run(self, display: &DisplayConfig) -> anyhow::Result<()> {
        match self {
            SavingsCmd::Balance { snapshot } => {
                let (status, now) = snapshot.read()?;

                print_json_pretty(PrintableBalance {
                    balance: present(savings_balance(&status, now)?, display)?,
                    annual_percentage: annual_percentage(status.rate)?.to_string(),
                })
            },
            SavingsCmd::Deposit {
                wallet_balance,
                amount,
            } => {
                let errors = validate_savings_deposit(
                    parse_amount(&wallet_balance, WAD)?,
                    parse_amount(&amount, WAD)?,
                )?;

                print_json_pretty(PrintableValidation::from(errors))
            },
            SavingsCmd::Withdraw { snapshot, amount } => {
                let (status, now) = snapshot.read()?;
                let errors = validate_savings_withdraw(&status, now, parse_amount(&amount, WAD)?)?;

                print_json_pretty(PrintableValidation::from(errors))
            },
        }
    }
}
