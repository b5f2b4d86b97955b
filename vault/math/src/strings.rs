//! Helpers for decimal strings typed by people.
//!
//! These sit between a text field and [`FixedDecimal::parse`](crate::FixedDecimal::parse),
//! which is strict and refuses anything it can't represent exactly.

/// Keep only ASCII digits and the first decimal point.
///
/// `"1,234.5.6 DAI"` becomes `"1234.56"`. A leading point gets a zero in front
/// so the result is always parseable, unless it's empty.
pub fn sanitize_decimal_input(input: &str) -> String {
    let mut seen_point = false;
    let mut output = String::with_capacity(input.len());

    for c in input.chars() {
        if c.is_ascii_digit() {
            output.push(c);
        } else if c == '.' && !seen_point {
            seen_point = true;
            output.push(c);
        }
    }

    if output.starts_with('.') {
        output.insert(0, '0');
    }

    output
}

/// Cap the number of fractional digits without rounding.
///
/// With `decimals == 0` the decimal point goes too.
pub fn truncate_decimals(input: &str, decimals: u32) -> String {
    let Some((whole, fractional)) = input.split_once('.') else {
        return input.to_string();
    };

    if decimals == 0 {
        return whole.to_string();
    }

    let keep = fractional
        .char_indices()
        .nth(decimals as usize)
        .map(|(idx, _)| idx)
        .unwrap_or(fractional.len());

    format!("{whole}.{}", &fractional[..keep])
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case("123.45" => "123.45"; "already clean")]
    #[test_case("1,234.5.6 DAI" => "1234.56"; "separators and extra points")]
    #[test_case("..5" => "0.5"; "leading points")]
    #[test_case("-42" => "42"; "sign is stripped")]
    #[test_case("abc" => ""; "nothing left")]
    #[test_case("7." => "7."; "trailing point kept")]
    fn sanitizing(input: &str) -> String {
        sanitize_decimal_input(input)
    }

    #[test_case("1.23456", 2 => "1.23"; "cut")]
    #[test_case("1.999", 2 => "1.99"; "never rounds")]
    #[test_case("1.2", 4 => "1.2"; "shorter than target")]
    #[test_case("1.23", 0 => "1"; "drop point")]
    #[test_case("12", 2 => "12"; "no fractional part")]
    #[test_case("0.000000000000000000123", 18 => "0.000000000000000000"; "wad cap")]
    fn truncating(input: &str, decimals: u32) -> String {
        truncate_decimals(input, decimals)
    }
}
