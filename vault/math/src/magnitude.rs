use {
    crate::{MathError, MathResult},
    bnum::types::{I1024, U1024},
};

/// The scaled integer inside a [`FixedDecimal`](crate::FixedDecimal).
///
/// 1024 bits is enough to hold the product of two RAD quantities with 45
/// integer digits each; anything beyond that surfaces as an overflow error
/// rather than wrapping.
pub type Magnitude = I1024;

/// Build a magnitude from an unsigned 128-bit integer, which is how most
/// on-chain `uint256` readings that fit into a machine word arrive.
pub fn magnitude_from_u128(value: u128) -> Magnitude {
    Magnitude::from_bits(U1024::from(value))
}

/// `10 ^ exp`, i.e. the ratio between a format's magnitude and the value it
/// represents.
pub(crate) fn ten_pow(exp: u32) -> MathResult<Magnitude> {
    let ten = Magnitude::from(10_i128);

    ten.checked_pow(exp).ok_or_else(|| MathError::overflow_pow(ten, exp as u64))
}

pub(crate) fn checked_add(a: Magnitude, b: Magnitude) -> MathResult<Magnitude> {
    a.checked_add(b).ok_or_else(|| MathError::overflow_add(a, b))
}

pub(crate) fn checked_sub(a: Magnitude, b: Magnitude) -> MathResult<Magnitude> {
    a.checked_sub(b).ok_or_else(|| MathError::overflow_sub(a, b))
}

pub(crate) fn checked_mul(a: Magnitude, b: Magnitude) -> MathResult<Magnitude> {
    a.checked_mul(b).ok_or_else(|| MathError::overflow_mul(a, b))
}

/// Integer division truncating toward zero, the way the EVM's `SDIV` does.
pub(crate) fn checked_div(a: Magnitude, b: Magnitude) -> MathResult<Magnitude> {
    if b.is_zero() {
        return Err(MathError::division_by_zero(a));
    }

    // The only other failure is `MIN / -1`.
    a.checked_div(b).ok_or_else(|| MathError::overflow_mul(a, -Magnitude::ONE))
}

pub(crate) fn checked_rem(a: Magnitude, b: Magnitude) -> MathResult<Magnitude> {
    if b.is_zero() {
        return Err(MathError::division_by_zero(a));
    }

    a.checked_rem(b).ok_or_else(|| MathError::overflow_mul(a, -Magnitude::ONE))
}

/// Number of decimal digits in the absolute value. Zero has one digit.
pub(crate) fn count_digits(value: Magnitude) -> u32 {
    value.unsigned_abs().to_string().len() as u32
}

// ----------------------------------- tests -----------------------------------
