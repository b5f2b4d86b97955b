use {
    crate::config::DisplayConfig,
    colored_json::ToColoredJson,
    serde::Serialize,
    vault_math::{FixedDecimal, MathResult},
};

/// Round a value for printing.
pub fn present(value: FixedDecimal, display: &DisplayConfig) -> MathResult<String> {
    let rounded = if display.adaptive {
        value.checked_adaptive_round()?
    } else {
        value.checked_round(display.decimals)?
    };

    Ok(rounded.to_string())
}

/// Outcome of a validation, as printed.
#[derive(Serialize)]
pub struct PrintableValidation<E> {
    pub admissible: bool,
    pub violations: Vec<E>,
}

impl<E> From<Vec<E>> for PrintableValidation<E> {
    fn from(violations: Vec<E>) -> Self {
        Self {
            admissible: violations.is_empty(),
            violations,
        }
    }
}

pub fn print_json_pretty<T>(data: T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let json = serde_json::to_string_pretty(&data)?;
    let colored = json.to_colored_json_auto()?;

    println!("{colored}");

    Ok(())
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        test_case::test_case,
        vault_math::{RAY, WAD},
    };

    const ADAPTIVE: DisplayConfig = DisplayConfig {
        adaptive: true,
        decimals: 2,
    };

    const FIXED: DisplayConfig = DisplayConfig {
        adaptive: false,
        decimals: 4,
    };

    #[test_case("1234.5678", &ADAPTIVE => "1234.57"; "adaptive large")]
    #[test_case("0.000012345678", &ADAPTIVE => "0.000012346"; "adaptive dust")]
    #[test_case("1234.56789", &FIXED => "1234.5679"; "fixed")]
    #[test_case("0.000012345678", &FIXED => "0"; "fixed dust")]
    fn presenting(value: &str, display: &DisplayConfig) -> String {
        present(FixedDecimal::parse(value, WAD).unwrap(), display).unwrap()
    }

    #[test]
    fn fixed_rounding_past_the_format_is_exact() {
        let display = DisplayConfig {
            adaptive: false,
            decimals: 40,
        };
        let value = FixedDecimal::parse("1.000000000000000000000000001", RAY).unwrap();

        assert_eq!(present(value, &display).unwrap(), "1.000000000000000000000000001");
    }
}
