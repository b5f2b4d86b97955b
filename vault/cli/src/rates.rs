use {
    crate::{
        config::DisplayConfig,
        input::parse_amount,
        output::{present, print_json_pretty},
    },
    clap::Parser,
    serde::Serialize,
    vault_engine::{annual_percentage, project_multiplier},
    vault_math::RAY,
};

#[derive(Parser)]
pub struct RatesCmd {
    /// Per-second rate, e.g. 1.000000001547125957863212448 for 5% a year
    per_second: String,

    /// Also project this accumulator forward by `--elapsed` seconds
    #[arg(long, requires = "elapsed")]
    accumulator: Option<String>,

    /// Seconds to project the accumulator over
    #[arg(long)]
    elapsed: Option<u64>,
}

#[derive(Serialize)]
struct PrintableRates {
    annual_percentage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    projected_accumulator: Option<String>,
}

impl RatesCmd {
    pub fn run(self, display: &DisplayConfig) -> anyhow::Result<()> {
        let per_second = parse_amount(&self.per_second, RAY)?;

        let projected_accumulator = match (self.accumulator, self.elapsed) {
            (Some(accumulator), Some(elapsed)) => {
                let accumulator = parse_amount(&accumulator, RAY)?;
                let projected = project_multiplier(accumulator, per_second, elapsed)?;
                Some(present(projected, display)?)
            },
            _ => None,
        };

        print_json_pretty(PrintableRates {
            annual_percentage: annual_percentage(per_second)?.to_string(),
            projected_accumulator,
        })
    }
}
