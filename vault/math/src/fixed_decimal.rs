use {
    crate::{
        DecimalFormat, MathError, MathResult, Magnitude,
        magnitude::{checked_add, checked_div, checked_mul, checked_rem, checked_sub, ten_pow},
    },
    serde::ser,
    std::{
        cmp::Ordering,
        fmt::{self, Display, Write},
        ops::{Add, Div, Mul, Neg, Sub},
    },
};

/// A base-10 scaled integer tagged with its format, representing
/// `magnitude / 10 ^ format.decimals`.
///
/// Binary operations require both operands to share a format. Mixing, say, a
/// WAD with a RAY is a bug at the call site, so it fails loudly with
/// [`MathError::InvalidFormat`] instead of being coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedDecimal {
    magnitude: Magnitude,
    format: DecimalFormat,
}

impl FixedDecimal {
    /// Create a new [`FixedDecimal`] _without_ adding decimal places.
    ///
    /// This is exact: the raw integer already has `format.decimals` implicit
    /// decimal places.
    pub fn from_raw_integer(raw: impl Into<Magnitude>, format: DecimalFormat) -> Self {
        Self {
            magnitude: raw.into(),
            format,
        }
    }

    /// Parse a raw integer, e.g. a `uint256` read from a contract, encoded as
    /// a decimal string.
    pub fn from_raw_str(raw: &str, format: DecimalFormat) -> MathResult<Self> {
        raw.parse::<Magnitude>()
            .map(|magnitude| Self { magnitude, format })
            .map_err(|err| MathError::parse_number::<Magnitude>(raw, err))
    }

    /// Create a new [`FixedDecimal`] _adding_ decimal places, so `new(3, WAD)`
    /// is three, not three wei.
    pub fn checked_new(x: i128, format: DecimalFormat) -> MathResult<Self> {
        let magnitude = checked_mul(Magnitude::from(x), format.precision()?)?;

        Ok(Self { magnitude, format })
    }

    pub fn new(x: i128, format: DecimalFormat) -> Self {
        Self::checked_new(x, format).unwrap_or_else(|err| panic!("{err}"))
    }

    pub const fn zero(format: DecimalFormat) -> Self {
        Self {
            magnitude: Magnitude::ZERO,
            format,
        }
    }

    pub fn one(format: DecimalFormat) -> MathResult<Self> {
        Ok(Self {
            magnitude: format.precision()?,
            format,
        })
    }

    /// Parse a human-readable decimal string such as `"1.5"` or `"-0.25"`.
    ///
    /// This never rounds: more fractional digits than the format holds is an
    /// error. Run user input through [`truncate_decimals`](crate::truncate_decimals)
    /// first if it should be capped silently.
    pub fn parse(input: &str, format: DecimalFormat) -> MathResult<Self> {
        let mut parts_iter = input.split('.');

        // `split` always yields at least one element.
        let whole = parts_iter.next().unwrap_or_default();
        let whole = whole
            .parse::<Magnitude>()
            .map_err(|_| MathError::parse_number::<Self>(input, "error parsing whole"))?;
        let mut magnitude = checked_mul(whole, format.precision()?)
            .map_err(|_| MathError::parse_number::<Self>(input, "value too big"))?;

        if let Some(fractional_part) = parts_iter.next() {
            if fractional_part.is_empty()
                || !fractional_part.chars().all(|c| c.is_ascii_digit())
            {
                return Err(MathError::parse_number::<Self>(
                    input,
                    "error parsing fractional",
                ));
            }

            let exp = format
                .decimals
                .checked_sub(fractional_part.len() as u32)
                .ok_or_else(|| {
                    MathError::parse_number::<Self>(
                        input,
                        format!(
                            "cannot parse more than {} fractional digits",
                            format.decimals
                        ),
                    )
                })?;

            let fractional = fractional_part
                .parse::<Magnitude>()
                .map_err(|_| MathError::parse_number::<Self>(input, "error parsing fractional"))?;
            let fractional = checked_mul(fractional, ten_pow(exp)?)?;

            // `-0.5` has a whole part of zero, which carries no sign, so look
            // at the input itself.
            magnitude = if input.starts_with('-') {
                checked_sub(magnitude, fractional)
            } else {
                checked_add(magnitude, fractional)
            }
            .map_err(|_| MathError::parse_number::<Self>(input, "value too big"))?;
        }

        if parts_iter.next().is_some() {
            return Err(MathError::parse_number::<Self>(
                input,
                "unexpected number of dots",
            ));
        }

        Ok(Self { magnitude, format })
    }

    pub fn magnitude(&self) -> Magnitude {
        self.magnitude
    }

    pub fn format(&self) -> DecimalFormat {
        self.format
    }

    /// Hand the raw integer to a transaction builder. The caller states which
    /// format the contract expects; anything else is a unit mix-up.
    pub fn to_raw_integer(&self, format: DecimalFormat) -> MathResult<Magnitude> {
        self.assert_format(format).map(|value| value.magnitude)
    }

    /// Identity if `self` is in `format`, an error otherwise. Used wherever two
    /// independently-sourced values meet.
    pub fn assert_format(self, format: DecimalFormat) -> MathResult<Self> {
        if self.format != format {
            return Err(MathError::invalid_format(format, self.format));
        }

        Ok(self)
    }

    /// Rescale into another format. Widening pads with zeros; narrowing
    /// truncates toward zero, never rounds.
    pub fn to_format(self, target: DecimalFormat) -> MathResult<Self> {
        let magnitude = match target.decimals.cmp(&self.format.decimals) {
            Ordering::Greater => {
                checked_mul(self.magnitude, ten_pow(target.decimals - self.format.decimals)?)?
            },
            Ordering::Equal => self.magnitude,
            Ordering::Less => {
                checked_div(self.magnitude, ten_pow(self.format.decimals - target.decimals)?)?
            },
        };

        Ok(Self {
            magnitude,
            format: target,
        })
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.magnitude.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.magnitude.is_positive()
    }

    pub fn checked_cmp(&self, other: &Self) -> MathResult<Ordering> {
        let other = other.assert_format(self.format)?;

        Ok(self.magnitude.cmp(&other.magnitude))
    }

    pub fn checked_max(self, other: Self) -> MathResult<Self> {
        match self.checked_cmp(&other)? {
            Ordering::Less => Ok(other),
            _ => Ok(self),
        }
    }

    pub fn checked_min(self, other: Self) -> MathResult<Self> {
        match self.checked_cmp(&other)? {
            Ordering::Greater => Ok(other),
            _ => Ok(self),
        }
    }

    pub fn checked_add(self, rhs: Self) -> MathResult<Self> {
        let rhs = rhs.assert_format(self.format)?;

        Ok(Self {
            magnitude: checked_add(self.magnitude, rhs.magnitude)?,
            format: self.format,
        })
    }

    pub fn checked_sub(self, rhs: Self) -> MathResult<Self> {
        let rhs = rhs.assert_format(self.format)?;

        Ok(Self {
            magnitude: checked_sub(self.magnitude, rhs.magnitude)?,
            format: self.format,
        })
    }

    /// `a * b / 10 ^ decimals`, truncating toward zero.
    pub fn checked_mul(self, rhs: Self) -> MathResult<Self> {
        let rhs = rhs.assert_format(self.format)?;
        let product = checked_mul(self.magnitude, rhs.magnitude)?;

        Ok(Self {
            magnitude: checked_div(product, self.format.precision()?)?,
            format: self.format,
        })
    }

    /// `a * 10 ^ decimals / b`, truncating toward zero.
    pub fn checked_div(self, rhs: Self) -> MathResult<Self> {
        let rhs = rhs.assert_format(self.format)?;

        if rhs.is_zero() {
            return Err(MathError::division_by_zero(self));
        }

        let scaled = checked_mul(self.magnitude, self.format.precision()?)?;

        Ok(Self {
            magnitude: checked_div(scaled, rhs.magnitude)?,
            format: self.format,
        })
    }

    /// Remainder of the magnitudes, carrying the sign of `self`.
    pub fn checked_rem(self, rhs: Self) -> MathResult<Self> {
        let rhs = rhs.assert_format(self.format)?;

        Ok(Self {
            magnitude: checked_rem(self.magnitude, rhs.magnitude)?,
            format: self.format,
        })
    }
}

impl Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.format.precision().map_err(|_| fmt::Error)?;
        let whole = self.magnitude / precision;
        let fractional = self.magnitude % precision;

        if fractional.is_zero() {
            return write!(f, "{whole}");
        }

        let fractional_string = format!(
            "{:0>padding$}",
            fractional.unsigned_abs().to_string(),
            padding = self.format.decimals as usize
        );

        if self.magnitude.is_negative() {
            f.write_char('-')?;
        }
        write!(f, "{}", whole.unsigned_abs())?;
        f.write_char('.')?;
        f.write_str(fractional_string.trim_end_matches('0'))
    }
}

impl ser::Serialize for FixedDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Neg for FixedDecimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            magnitude: -self.magnitude,
            format: self.format,
        }
    }
}

impl Add for FixedDecimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Sub for FixedDecimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Mul for FixedDecimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Div for FixedDecimal {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

// ----------------------------------- tests -----------------------------------
