//! Field adapters for values that travel as raw on-chain integers.
//!
//! A chain reader returns `uint256`s. JSON can't hold those as numbers, so
//! they arrive as decimal strings of the _raw_ integer, and the format is
//! implied by which field they sit in:
//!
//! ```rust
//! use {serde::Deserialize, vault_math::FixedDecimal};
//!
//! #[derive(Deserialize)]
//! struct Snapshot {
//!     #[serde(with = "vault_math::serde_raw::ray")]
//!     rate: FixedDecimal,
//! }
//!
//! let snapshot: Snapshot =
//!     serde_json::from_str(r#"{"rate":"1500000000000000000000000000"}"#).unwrap();
//! assert_eq!(snapshot.rate.to_string(), "1.5");
//! ```

use {
    crate::{DecimalFormat, FixedDecimal},
    serde::{
        de::{self, Deserialize, Deserializer},
        ser::{self, Serializer},
    },
};

fn serialize_raw<S>(
    value: &FixedDecimal,
    format: DecimalFormat,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let raw = value.to_raw_integer(format).map_err(ser::Error::custom)?;

    serializer.serialize_str(&raw.to_string())
}

fn deserialize_raw<'de, D>(deserializer: D, format: DecimalFormat) -> Result<FixedDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    FixedDecimal::from_raw_str(&raw, format).map_err(de::Error::custom)
}

macro_rules! raw_format_adapters {
    ($($module:ident => $format:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Raw integer in the ", stringify!($format), " format.")]
            pub mod $module {
                use {
                    super::{deserialize_raw, serialize_raw},
                    crate::{FixedDecimal, $format},
                    serde::{Deserializer, Serializer},
                };

                pub fn serialize<S>(value: &FixedDecimal, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serialize_raw(value, $format, serializer)
                }

                pub fn deserialize<'de, D>(deserializer: D) -> Result<FixedDecimal, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    deserialize_raw(deserializer, $format)
                }
            }
        )+
    };
}

raw_format_adapters! {
    int     => INT,
    wad     => WAD,
    ray     => RAY,
    rad     => RAD,
    percent => PERCENT,
}

// ----------------------------------- tests -----------------------------------
