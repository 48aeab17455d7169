// SPDX-License-Identifier: PMPL-1.0-or-later

//! Currency codes (ISO 4217)
//!
//! The byte after each code packs the number of minor-unit digits in its low
//! three bits and an index into the cash rounding increments above them.

use crate::code::{code, Code};
use crate::error::{IdRangeError, SubtagError};
use crate::index::find_index;
use crate::tables::{CURRENCY, ROUNDING_INCREMENTS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DECIMALS_MASK: u8 = 0x7;
const ROUND_SHIFT: u8 = 3;

/// Compact identifier of a currency. Zero is `XXX`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "u16", try_from = "u16")]
pub struct CurrencyId(u16);

impl CurrencyId {
    /// `XXX`, no currency.
    pub const XXX: CurrencyId = CurrencyId(0);

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Resolves a three-letter currency code in any case.
    pub fn parse(s: &str) -> Result<Self, SubtagError> {
        crate::registry::debug_verify();
        if s.eq_ignore_ascii_case("XXX") {
            return Ok(Self::XXX);
        }
        let i = find_index(&CURRENCY, s, "XXX")?;
        Ok(CurrencyId(i as u16))
    }

    /// Upper-case code.
    pub fn to_code(self) -> Code {
        if self.0 == 0 {
            return code(b"XXX");
        }
        code(&CURRENCY.elem(self.0 as usize)[..3])
    }

    fn info(self) -> u8 {
        CURRENCY.elem(self.0 as usize)[3]
    }

    /// Number of digits after the decimal separator.
    pub fn decimals(self) -> u8 {
        self.info() & DECIMALS_MASK
    }

    /// Cash rounding increment, in units of the last decimal digit.
    pub fn rounding(self) -> u8 {
        ROUNDING_INCREMENTS
            .get((self.info() >> ROUND_SHIFT) as usize)
            .copied()
            .unwrap_or(1)
    }

    pub fn table_ids() -> impl Iterator<Item = CurrencyId> {
        (1..CURRENCY.len() as u16).map(CurrencyId)
    }
}

impl TryFrom<u16> for CurrencyId {
    type Error = IdRangeError;

    fn try_from(v: u16) -> Result<Self, Self::Error> {
        if usize::from(v) < CURRENCY.len() {
            Ok(CurrencyId(v))
        } else {
            Err(IdRangeError::new("currency", v))
        }
    }
}

impl From<CurrencyId> for u16 {
    fn from(id: CurrencyId) -> u16 {
        id.0
    }
}

impl FromStr for CurrencyId {
    type Err = SubtagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyId::parse(s)
    }
}

impl fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> CurrencyId {
        CurrencyId::parse(s).unwrap()
    }

    #[test]
    fn deserialize_rejects_ids_past_the_table() {
        let usd: CurrencyId = serde_json::from_str(&id("USD").raw().to_string()).unwrap();
        assert_eq!(usd.decimals(), 2);
        assert!(serde_json::from_str::<CurrencyId>("900").is_err());
        assert_eq!(
            CurrencyId::try_from(CURRENCY.len() as u16),
            Err(IdRangeError::new("currency", CURRENCY.len() as u16))
        );
    }

    #[test]
    fn xxx_is_zero() {
        assert_eq!(id("XXX"), CurrencyId::XXX);
        assert_eq!(id("xxx"), CurrencyId::XXX);
        assert_eq!(CurrencyId::XXX.to_string(), "XXX");
    }

    #[test]
    fn case_is_folded_to_upper() {
        assert_eq!(id("usd"), id("USD"));
        assert_eq!(id("Eur").to_string(), "EUR");
    }

    #[test]
    fn failures() {
        assert_eq!(CurrencyId::parse("US"), Err(SubtagError::Syntax));
        assert_eq!(CurrencyId::parse("U5D"), Err(SubtagError::Syntax));
        assert_eq!(
            CurrencyId::parse("abc"),
            Err(SubtagError::InvalidSubtag("ABC".into()))
        );
    }

    #[test]
    fn minor_units_and_rounding() {
        assert_eq!(id("USD").decimals(), 2);
        assert_eq!(id("JPY").decimals(), 0);
        assert_eq!(id("BHD").decimals(), 3);
        assert_eq!(id("CLF").decimals(), 4);
        assert_eq!(id("CHF").rounding(), 5);
        assert_eq!(id("EUR").rounding(), 1);
    }

    #[test]
    fn every_currency_round_trips() {
        for c in CurrencyId::table_ids() {
            assert_eq!(CurrencyId::parse(&c.to_string()), Ok(c));
        }
    }
}
