mod error;
mod fixed_decimal;
mod format;
mod magnitude;
mod pow;
mod rounding;
pub mod serde_raw;
mod strings;

pub use {
    error::*, fixed_decimal::*, format::*, magnitude::*, pow::SEQUENTIAL_POW_MAX_EXPONENT,
    rounding::*, strings::*,
};
