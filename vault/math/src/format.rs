use {
    crate::{FixedDecimal, MathResult, Magnitude, magnitude::ten_pow},
    serde::Serialize,
    std::{
        cmp::Ordering,
        fmt,
        hash::{Hash, Hasher},
    },
};

/// A named fixed-point format: how many implicit decimal places a raw
/// integer carries.
///
/// Two formats are interchangeable when their decimal counts agree; the name
/// is only descriptive and takes no part in equality.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct DecimalFormat {
    pub name: &'static str,
    pub decimals: u32,
}

impl DecimalFormat {
    pub const fn new(name: &'static str, decimals: u32) -> Self {
        Self { name, decimals }
    }

    /// Ratio between a magnitude in this format and the value it represents.
    ///
    /// This is always `10 ^ decimals`.
    pub fn precision(&self) -> MathResult<Magnitude> {
        ten_pow(self.decimals)
    }
}

impl PartialEq for DecimalFormat {
    fn eq(&self, other: &Self) -> bool {
        self.decimals == other.decimals
    }
}

impl Eq for DecimalFormat {}

impl PartialOrd for DecimalFormat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalFormat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.decimals.cmp(&other.decimals)
    }
}

impl Hash for DecimalFormat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.decimals.hash(state);
    }
}

impl fmt::Display for DecimalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.decimals)
    }
}

/// Return the format with the most decimal places, or [`INT`] if there are
/// none. Converting every operand into it loses nothing.
pub fn biggest_decimals_format<I>(formats: I) -> DecimalFormat
where
    I: IntoIterator<Item = DecimalFormat>,
{
    formats
        .into_iter()
        .fold(INT, |widest, format| {
            if format.decimals > widest.decimals {
                format
            } else {
                widest
            }
        })
}

// ------------------------------ well-known formats -----------------------------

macro_rules! generate_format {
    (
        name     = $name:ident,
        decimals = $decimals:literal,
        doc      = $doc:literal,
    ) => {
        paste::paste! {
            #[doc = $doc]
            pub const $name: DecimalFormat = DecimalFormat::new(stringify!($name), $decimals);

            impl FixedDecimal {
                #[doc = concat!("Create a ", stringify!($name), " value from a whole number.")]
                pub fn [<new_ $name:lower>](x: i128) -> Self {
                    Self::new(x, $name)
                }

                #[doc = concat!("Interpret a raw integer as a ", stringify!($name), " value.")]
                pub fn [<raw_ $name:lower>](raw: impl Into<Magnitude>) -> Self {
                    Self::from_raw_integer(raw, $name)
                }
            }
        }
    };
}

generate_format! {
    name     = INT,
    decimals = 0,
    doc      = "Plain integers: token counts, seconds.",
}

generate_format! {
    name     = WAD,
    decimals = 18,
    doc      = "Token amounts: collateral balances, normalized debt, stable asset.",
}

generate_format! {
    name     = RAY,
    decimals = 27,
    doc      = "Rates and ratios: debt multiplier, spot price, per-second fees.",
}

generate_format! {
    name     = RAD,
    decimals = 45,
    doc      = "Products of a WAD and a RAY: debt values, floors and ceilings.",
}

generate_format! {
    name     = PERCENT,
    decimals = 2,
    doc      = "Percentage-like ratios shown to users, such as `175.25`.",
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::collections::HashSet,
        test_case::test_case,
    };

    #[test]
    fn equality_ignores_name() {
        let custom = DecimalFormat::new("ETH", 18);

        assert_eq!(custom, WAD);
        assert_ne!(custom, RAY);

        let set: HashSet<_> = [custom, WAD, RAY].into_iter().collect();
        assert_eq!(set.len(), 2);

        assert!(WAD < RAY);
        assert_eq!(custom.cmp(&WAD), std::cmp::Ordering::Equal);
    }

    #[test_case(vec![] => INT; "defaults to int")]
    #[test_case(vec![WAD] => WAD; "single")]
    #[test_case(vec![WAD, RAD, RAY] => RAD; "rad wins")]
    #[test_case(vec![PERCENT, INT] => PERCENT; "percent over int")]
    fn picking_biggest_format(formats: Vec<DecimalFormat>) -> DecimalFormat {
        biggest_decimals_format(formats)
    }

    #[test]
    fn constructors_add_decimal_places() {
        assert_eq!(FixedDecimal::new_wad(3).to_string(), "3");
        assert_eq!(
            FixedDecimal::new_ray(1).magnitude().to_string(),
            "1000000000000000000000000000"
        );
        assert_eq!(FixedDecimal::raw_percent(17525_i128).to_string(), "175.25");
    }

    #[test]
    fn display_shows_name_and_decimals() {
        assert_eq!(RAD.to_string(), "RAD(45)");
    }
}
