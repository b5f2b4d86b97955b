use {
    crate::{IlkStatus, UrnStatus},
    vault_math::{FixedDecimal, RAD, RAY, WAD},
};

pub fn wad(s: &str) -> FixedDecimal {
    FixedDecimal::parse(s, WAD).unwrap()
}

pub fn ray(s: &str) -> FixedDecimal {
    FixedDecimal::parse(s, RAY).unwrap()
}

pub fn rad(s: &str) -> FixedDecimal {
    FixedDecimal::parse(s, RAD).unwrap()
}

/// A collateral type with a generous ceiling and a floor of 100.
pub fn ilk(normalized_debt: &str, debt_multiplier: &str, price: &str) -> IlkStatus {
    IlkStatus {
        normalized_debt: wad(normalized_debt),
        debt_multiplier: ray(debt_multiplier),
        price: ray(price),
        debt_ceiling: rad("1000000000"),
        debt_floor: rad("100"),
    }
}

/// An urn with nothing free.
pub fn urn(locked: &str, debt: &str) -> UrnStatus {
    UrnStatus {
        urn_address: "0x0000000000000000000000000000000000000001".to_string(),
        free_balance: wad("0"),
        locked_balance: wad(locked),
        debt: wad(debt),
    }
}
