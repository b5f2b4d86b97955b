use {
    anyhow::{Context, bail},
    serde::de::DeserializeOwned,
    std::{
        fs,
        path::Path,
        time::{SystemTime, UNIX_EPOCH},
    },
    vault_math::{DecimalFormat, FixedDecimal, sanitize_decimal_input, truncate_decimals},
};

/// Parse an amount typed by a person.
///
/// Anything that isn't a digit or the first decimal point is dropped, and
/// digits beyond what `format` can hold are cut off rather than rounded.
pub fn parse_amount(input: &str, format: DecimalFormat) -> anyhow::Result<FixedDecimal> {
    let sanitized = sanitize_decimal_input(input);
    let sanitized = sanitized.strip_suffix('.').unwrap_or(&sanitized);

    if sanitized.is_empty() {
        bail!("`{input}` doesn't contain a number");
    }

    let truncated = truncate_decimals(sanitized, format.decimals);

    FixedDecimal::parse(&truncated, format)
        .with_context(|| format!("failed to parse `{input}` as {format}"))
}

/// Read a snapshot of on-chain state from a JSON file.
pub fn read_snapshot<T>(path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;

    let snapshot = serde_json::from_str(&json)
        .with_context(|| format!("failed to deserialize `{}`", path.display()))?;

    tracing::debug!(path = %path.display(), "Loaded snapshot");

    Ok(snapshot)
}

/// Current unix timestamp, in seconds.
pub fn unix_now() -> anyhow::Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::path::PathBuf,
        test_case::test_case,
        vault_engine::{IlkStatus, SavingsStatus, UrnStatus},
        vault_math::{PERCENT, RAY, WAD},
    };

    #[test_case("1,234.56", WAD => "1234.56"; "thousands separator")]
    #[test_case("12.", WAD => "12"; "trailing point")]
    #[test_case(".5", WAD => "0.5"; "leading point")]
    #[test_case("1.23456", PERCENT => "1.23"; "truncates to the format")]
    #[test_case("0.9999", PERCENT => "0.99"; "never rounds up")]
    #[test_case("1.5 RAY", RAY => "1.5"; "unit suffix")]
    fn parsing_amounts(input: &str, format: DecimalFormat) -> String {
        parse_amount(input, format).unwrap().to_string()
    }

    #[test_case(""; "empty")]
    #[test_case("abc"; "no digits")]
    fn rejecting_amounts(input: &str) {
        assert!(parse_amount(input, WAD).is_err());
    }

    #[test]
    fn reading_fixtures() {
        let fixtures = PathBuf::from("fixtures");

        let ilk: IlkStatus = read_snapshot(&fixtures.join("ilk.json")).unwrap();
        assert_eq!(ilk.debt_multiplier.to_string(), "1.1");
        assert_eq!(ilk.debt_floor.to_string(), "100");

        let urn: UrnStatus = read_snapshot(&fixtures.join("urn.json")).unwrap();
        assert_eq!(urn.locked_balance.to_string(), "2");

        let savings: SavingsStatus = read_snapshot(&fixtures.join("savings.json")).unwrap();
        assert_eq!(savings.last_update, 1_700_000_000);

        assert!(read_snapshot::<UrnStatus>(&fixtures.join("ilk.json")).is_err());
    }
}
