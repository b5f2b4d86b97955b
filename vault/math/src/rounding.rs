use crate::{
    FixedDecimal, MathResult,
    magnitude::{checked_add, checked_rem, checked_sub, count_digits, ten_pow},
};

/// Decimal places shown to users unless the value would disappear at that
/// precision.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Significant digits kept past the first nonzero fractional digit of a tiny
/// value.
pub const DISPLAY_EXTRA_DIGITS: u32 = 4;

enum Rounding {
    HalfUp,
    Ceil,
    Floor,
}

impl FixedDecimal {
    /// Round half up (ties away from zero) to `decimals` fractional digits.
    /// The format is kept; digits past the cut become zero.
    pub fn checked_round(self, decimals: u32) -> MathResult<Self> {
        self.round_to(decimals, Rounding::HalfUp)
    }

    /// Round toward positive infinity at `decimals` fractional digits.
    pub fn checked_ceil(self, decimals: u32) -> MathResult<Self> {
        self.round_to(decimals, Rounding::Ceil)
    }

    /// Round toward negative infinity at `decimals` fractional digits.
    pub fn checked_floor(self, decimals: u32) -> MathResult<Self> {
        self.round_to(decimals, Rounding::Floor)
    }

    /// Round for presentation.
    ///
    /// Normally this is [`DISPLAY_DECIMALS`] places. A nonzero value below one
    /// whose first significant digit sits further right than that keeps
    /// [`DISPLAY_EXTRA_DIGITS`] more places counted from that digit, so that
    /// dust still shows up as dust rather than as zero.
    ///
    /// Never feed the result back into a transaction.
    pub fn checked_adaptive_round(self) -> MathResult<Self> {
        let decimals = self.format().decimals;
        let precision = self.format().precision()?;

        if self.is_zero() || self.magnitude().unsigned_abs() >= precision.unsigned_abs() {
            return self.checked_round(DISPLAY_DECIMALS);
        }

        // Position (1-based) of the first nonzero fractional digit.
        let first_significant = decimals + 1 - count_digits(self.magnitude());

        if first_significant <= DISPLAY_DECIMALS {
            return self.checked_round(DISPLAY_DECIMALS);
        }

        self.checked_round((first_significant + DISPLAY_EXTRA_DIGITS).min(decimals))
    }

    fn round_to(self, decimals: u32, rounding: Rounding) -> MathResult<Self> {
        let format = self.format();

        if decimals >= format.decimals {
            return Ok(self);
        }

        let factor = ten_pow(format.decimals - decimals)?;
        let magnitude = self.magnitude();
        let rem = checked_rem(magnitude, factor)?;
        let truncated = checked_sub(magnitude, rem)?;

        let rounded = match rounding {
            Rounding::HalfUp => {
                // `rem` is strictly smaller than `factor` in absolute value, so
                // doubling it cannot overflow.
                let rem_abs = rem.unsigned_abs();
                if rem_abs + rem_abs < factor.unsigned_abs() {
                    truncated
                } else if magnitude.is_negative() {
                    checked_sub(truncated, factor)?
                } else {
                    checked_add(truncated, factor)?
                }
            },
            Rounding::Ceil if rem.is_positive() => checked_add(truncated, factor)?,
            Rounding::Floor if rem.is_negative() => checked_sub(truncated, factor)?,
            Rounding::Ceil | Rounding::Floor => truncated,
        };

        Ok(Self::from_raw_integer(rounded, format))
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::{DecimalFormat, FixedDecimal, INT, PERCENT, RAY, WAD},
        test_case::test_case,
    };

    fn wad(s: &str) -> FixedDecimal {
        FixedDecimal::parse(s, WAD).unwrap()
    }

    #[test_case("11.115", 2 => "11.12"; "half rounds up")]
    #[test_case("11.111", 2 => "11.11"; "below half rounds down")]
    #[test_case("11.119", 2 => "11.12"; "above half rounds up")]
    #[test_case("-11.115", 2 => "-11.12"; "negative half rounds away from zero")]
    #[test_case("-11.114", 2 => "-11.11"; "negative below half")]
    #[test_case("0.5", 0 => "1"; "to integer")]
    #[test_case("1.23", 18 => "1.23"; "no-op at full precision")]
    #[test_case("1.23", 30 => "1.23"; "no-op beyond precision")]
    fn rounding_half_up(input: &str, decimals: u32) -> String {
        let rounded = wad(input).checked_round(decimals).unwrap();
        assert_eq!(rounded.format(), WAD);
        rounded.to_string()
    }

    #[test_case("1.001", 2 => "1.01"; "positive remainder")]
    #[test_case("1.000", 2 => "1"; "exact")]
    #[test_case("-1.009", 2 => "-1"; "negative goes toward zero")]
    fn rounding_up(input: &str, decimals: u32) -> String {
        wad(input).checked_ceil(decimals).unwrap().to_string()
    }

    #[test_case("1.009", 2 => "1"; "positive goes toward zero")]
    #[test_case("-1.001", 2 => "-1.01"; "negative remainder")]
    fn rounding_down(input: &str, decimals: u32) -> String {
        wad(input).checked_floor(decimals).unwrap().to_string()
    }

    #[test_case("0.0000000123001", WAD => "0.0000000123"; "dust stays visible")]
    #[test_case("0.000123456789", WAD => "0.00012346"; "four extra digits")]
    #[test_case("0.0123", WAD => "0.01"; "second place is visible")]
    #[test_case("0.005", WAD => "0.005"; "third place extends precision")]
    #[test_case("12.345678", WAD => "12.35"; "integer part present")]
    #[test_case("1.0000001", WAD => "1"; "integer part hides dust")]
    #[test_case("0", WAD => "0"; "zero")]
    #[test_case("-0.0000042", WAD => "-0.0000042"; "negative dust")]
    #[test_case("0.000000000000000000000000001", RAY => "0.000000000000000000000000001"; "capped at format precision")]
    #[test_case("7", INT => "7"; "integers untouched")]
    #[test_case("0.05", PERCENT => "0.05"; "percent")]
    fn adaptive_rounding(input: &str, format: DecimalFormat) -> String {
        FixedDecimal::parse(input, format)
            .unwrap()
            .checked_adaptive_round()
            .unwrap()
            .to_string()
    }
}
