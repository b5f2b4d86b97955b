mod config;
mod input;
mod output;
mod rates;
mod savings;
mod vault;

use {
    crate::{
        config::Config,
        rates::RatesCmd,
        savings::SavingsCmd,
        vault::{BurnCmd, InspectCmd, IssuanceCmd, MintCmd},
    },
    clap::Parser,
    config_parser::parse_config,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Path to the config file; a missing file means defaults
    #[arg(long, global = true, default_value = "vault.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show the derived quantities of a vault
    Inspect(InspectCmd),

    /// Compute how much stable asset a deposit yields at a target ratio
    Issuance(IssuanceCmd),

    /// Check whether a deposit and/or mint is admissible
    Mint(MintCmd),

    /// Check whether a repayment and/or withdrawal is admissible
    Burn(BurnCmd),

    /// Convert a per-second rate into an annual one
    Rates(RatesCmd),

    /// Inspect or validate a savings position
    #[command(subcommand, next_display_order = None)]
    Savings(SavingsCmd),
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Parse the config file.
    let cfg: Config = parse_config(&cli.config)?;

    // Set up tracing.
    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Inspect(cmd) => cmd.run(&cfg.display),
        Command::Issuance(cmd) => cmd.run(&cfg.display),
        Command::Mint(cmd) => cmd.run(),
        Command::Burn(cmd) => cmd.run(),
        Command::Rates(cmd) => cmd.run(&cfg.display),
        Command::Savings(cmd) => cmd.run(&cfg.display),
    }
}
