mod math;
mod rates;
mod savings;
#[cfg(test)]
mod test_utils;
mod types;
mod validation;

pub use {math::*, rates::*, savings::*, types::*, validation::*};
