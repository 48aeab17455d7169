// SPDX-License-Identifier: PMPL-1.0-or-later

//! Script subtags (ISO 15924).

use crate::code::{code, Code};
use crate::error::{IdRangeError, SubtagError};
use crate::index::find_index;
use crate::tables::{SCRIPT, SCRIPT_PRIVATE_END, SCRIPT_PRIVATE_START};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compact identifier of a script subtag. Zero is `Zzzz`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub struct ScriptId(u8);

impl ScriptId {
    /// `Zzzz`, the uncoded script.
    pub const ZZZZ: ScriptId = ScriptId(0);

    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Resolves a four-letter script code in any case.
    pub fn parse(s: &str) -> Result<Self, SubtagError> {
        crate::registry::debug_verify();
        if s.len() == 4 && s.eq_ignore_ascii_case("Zzzz") {
            return Ok(Self::ZZZZ);
        }
        let i = find_index(&SCRIPT, s, "Zzzz")?;
        Ok(ScriptId(i as u8))
    }

    /// Title-case code.
    pub fn to_code(self) -> Code {
        if self.0 == 0 {
            return code(b"Zzzz");
        }
        code(SCRIPT.elem(self.0 as usize))
    }

    /// Whether this is one of the private-use codes `Qaaa`..`Qabx`.
    pub fn is_private_use(self) -> bool {
        (SCRIPT_PRIVATE_START..=SCRIPT_PRIVATE_END).contains(&self.0)
    }

    pub fn table_ids() -> impl Iterator<Item = ScriptId> {
        (1..SCRIPT.len() as u8).map(ScriptId)
    }
}

impl TryFrom<u8> for ScriptId {
    type Error = IdRangeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        if usize::from(v) < SCRIPT.len() {
            Ok(ScriptId(v))
        } else {
            Err(IdRangeError::new("script", u16::from(v)))
        }
    }
}

impl From<ScriptId> for u8 {
    fn from(id: ScriptId) -> u8 {
        id.0
    }
}

impl FromStr for ScriptId {
    type Err = SubtagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScriptId::parse(s)
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_rejects_ids_past_the_table() {
        for s in ScriptId::table_ids().chain([ScriptId::ZZZZ]) {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(serde_json::from_str::<ScriptId>(&json).unwrap(), s);
        }
        assert!(serde_json::from_str::<ScriptId>("200").is_err());
        assert_eq!(
            ScriptId::try_from(SCRIPT.len() as u8),
            Err(IdRangeError::new("script", SCRIPT.len() as u16))
        );
    }

    #[test]
    fn zzzz_is_zero_in_any_case() {
        assert_eq!(ScriptId::parse("Zzzz"), Ok(ScriptId::ZZZZ));
        assert_eq!(ScriptId::parse("zzzz"), Ok(ScriptId::ZZZZ));
        assert_eq!(ScriptId::ZZZZ.to_string(), "Zzzz");
    }

    #[test]
    fn lookup_is_title_cased() {
        let latn = ScriptId::parse("Latn").unwrap();
        assert_eq!(ScriptId::parse("LATN"), Ok(latn));
        assert_eq!(ScriptId::parse("latn"), Ok(latn));
        assert_eq!(latn.to_string(), "Latn");
    }

    #[test]
    fn failures() {
        assert_eq!(ScriptId::parse("zz"), Err(SubtagError::Syntax));
        assert_eq!(ScriptId::parse("Lat1"), Err(SubtagError::Syntax));
        assert_eq!(ScriptId::parse("Latin"), Err(SubtagError::Syntax));
        assert_eq!(
            ScriptId::parse("qqqq"),
            Err(SubtagError::InvalidSubtag("Qqqq".into()))
        );
    }

    #[test]
    fn sentinel_record_is_unreachable() {
        assert_eq!(ScriptId::parse("----"), Err(SubtagError::Syntax));
    }

    #[test]
    fn private_use_band() {
        assert!(ScriptId::parse("Qaaa").unwrap().is_private_use());
        assert!(ScriptId::parse("Qabx").unwrap().is_private_use());
        assert!(ScriptId::parse("qAbK").unwrap().is_private_use());
        assert!(!ScriptId::parse("Latn").unwrap().is_private_use());
        assert!(!ScriptId::ZZZZ.is_private_use());
        assert!(ScriptId::parse("Qaby").is_err());
    }

    #[test]
    fn every_script_round_trips() {
        for s in ScriptId::table_ids() {
            assert_eq!(ScriptId::parse(&s.to_string()), Ok(s));
        }
    }
}
