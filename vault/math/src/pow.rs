use crate::{FixedDecimal, MathError, MathResult};

/// Exponents up to this are computed by plain repeated multiplication.
pub const SEQUENTIAL_POW_MAX_EXPONENT: u64 = 32;

impl FixedDecimal {
    /// Raise to an integer power.
    ///
    /// Every step is an ordinary fixed-point multiplication in the base's own
    /// format (`a * b / 10 ^ decimals`, truncating), so the unit is always the
    /// one the base is expressed in.
    ///
    /// Up to [`SEQUENTIAL_POW_MAX_EXPONENT`] the result is exactly the
    /// step-by-step truncating product. Larger exponents are computed by
    /// squaring, in `O(log exponent)` multiplications, which is what makes
    /// `rate ^ 31_536_000` feasible; truncation then happens at different
    /// points, so the last digits may differ from the step-by-step product.
    pub fn checked_pow(self, exponent: u64) -> MathResult<Self> {
        let one = Self::one(self.format())?;

        if exponent == 0 {
            return Ok(one);
        }

        let mut base = self;
        let mut exp = exponent;
        let mut y = one;

        (|| {
            if exp <= SEQUENTIAL_POW_MAX_EXPONENT {
                for _ in 0..exp {
                    y = y.checked_mul(base)?;
                }

                return Ok(y);
            }

            while exp > 1 {
                if exp % 2 == 0 {
                    base = base.checked_mul(base)?;
                    exp /= 2;
                } else {
                    y = base.checked_mul(y)?;
                    base = base.checked_mul(base)?;
                    exp = (exp - 1) / 2;
                }
            }

            base.checked_mul(y)
        })()
        .map_err(|err| match err {
            MathError::OverflowMul { .. } => MathError::overflow_pow(self, exponent),
            err => err,
        })
    }
}

// ----------------------------------- tests -----------------------------------
