use vault_math::{FixedDecimal, MathResult, PERCENT, RAY};

/// Seconds in a year, assuming 365 days.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Yearly rate implied by a compounding per-second rate such as the
/// stability fee or the savings rate: `per_second ^ SECONDS_PER_YEAR - 1`.
pub fn annual_rate(per_second: FixedDecimal) -> MathResult<FixedDecimal> {
    let per_second = per_second.assert_format(RAY)?;

    per_second
        .checked_pow(SECONDS_PER_YEAR)?
        .checked_sub(FixedDecimal::one(RAY)?)
}

/// [`annual_rate`] in percent, rounded half up to two decimals.
pub fn annual_percentage(per_second: FixedDecimal) -> MathResult<FixedDecimal> {
    annual_rate(per_second)?
        .checked_mul(FixedDecimal::new_ray(100))?
        .checked_round(PERCENT.decimals)?
        .to_format(PERCENT)
}

/// Accumulate a per-second rate into a multiplier over `elapsed` seconds:
/// `multiplier * per_second ^ elapsed`.
pub fn project_multiplier(
    multiplier: FixedDecimal,
    per_second: FixedDecimal,
    elapsed: u64,
) -> MathResult<FixedDecimal> {
    per_second
        .assert_format(RAY)?
        .checked_pow(elapsed)?
        .checked_mul(multiplier.assert_format(RAY)?)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::test_utils::{ray, wad},
        test_case::test_case,
    };

    #[test_case("1" => "0"; "no fee")]
    #[test_case("1.000000000627937192491029810" => "2"; "two percent")]
    #[test_case("1.000000001547125957863212448" => "5"; "five percent")]
    #[test_case("1.000000003022265980097387650" => "10"; "ten percent")]
    fn annual_percentages(per_second: &str) -> String {
        annual_percentage(ray(per_second)).unwrap().to_string()
    }

    #[test]
    fn annual_rate_stays_in_ray() {
        let rate = annual_rate(ray("1.000000001547125957863212448")).unwrap();

        assert_eq!(rate.format(), RAY);
        assert_eq!(rate.checked_round(4).unwrap().to_string(), "0.05");
    }

    #[test]
    fn annual_rate_wants_a_ray() {
        assert!(annual_rate(wad("1")).is_err());
    }

    #[test]
    fn projecting_multiplier() {
        let multiplier = ray("1.2");

        assert_eq!(project_multiplier(multiplier, ray("1.5"), 0).unwrap(), multiplier);
        assert_eq!(project_multiplier(multiplier, ray("1.5"), 2).unwrap(), ray("2.7"));

        let after_a_year =
            project_multiplier(multiplier, ray("1.000000001547125957863212448"), SECONDS_PER_YEAR)
                .unwrap();
        assert_eq!(after_a_year.checked_round(4).unwrap().to_string(), "1.26");
    }
}
