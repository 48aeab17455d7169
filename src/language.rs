// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language subtags
//!
//! A [`LanguageId`] is a `u16` partitioned by magnitude:
//!
//! | Range                           | Meaning                                   |
//! |---------------------------------|-------------------------------------------|
//! | `0`                             | `und`, the unspecified language           |
//! | `1..LANG_NO_INDEX_OFFSET`       | slot in the language table                |
//! | `LANG_NO_INDEX_OFFSET..`        | packed ISO 639-3 code with no table slot  |
//!
//! Private-use codes `qaa`..`qtz` pack into one contiguous band of the dense
//! range.

use crate::alias::{self, LangAliasKind};
use crate::code::{code, Code};
use crate::error::{IdRangeError, SubtagError};
use crate::index::fixed_key;
use crate::packer;
use crate::tables::{
    ALT_LANG_INDEX, ALT_LANG_ISO3, LANG, LANG_NO_INDEX, LANG_NO_INDEX_OFFSET, LANG_PRIVATE_END,
    LANG_PRIVATE_START, NON_CANONICAL_UND,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compact identifier of a language subtag.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "u16", try_from = "u16")]
pub struct LanguageId(u16);

/// How an identifier is decoded, derived from its magnitude alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Unspecified,
    Table(usize),
    Packed(u32),
}

impl LanguageId {
    /// `und`.
    pub const UND: LanguageId = LanguageId(0);

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub(crate) const fn from_raw(v: u16) -> Self {
        LanguageId(v)
    }

    /// Resolves a two- or three-letter language subtag, in any case.
    pub fn parse(s: &str) -> Result<Self, SubtagError> {
        crate::registry::debug_verify();
        match s.len() {
            2 => Self::parse_iso2(s),
            _ => Self::parse_iso3(s),
        }
    }

    fn parse_iso2(s: &str) -> Result<Self, SubtagError> {
        let buf = fixed_key("zz", s)?;
        let key = &buf[..2];
        match LANG.index(key) {
            // A non-zero fourth byte marks a two-letter record.
            Some(i) if LANG.elem(i)[3] != 0 => Ok(LanguageId(i as u16)),
            _ => Err(SubtagError::invalid(key)),
        }
    }

    fn parse_iso3(s: &str) -> Result<Self, SubtagError> {
        let buf = fixed_key("und", s)?;
        let key = &buf[..3];

        // Canonical three-letter subtags.
        for (i, e) in LANG.matches(&key[..2]) {
            if e[3] == 0 && e[2] == key[2] {
                if i as u16 == NON_CANONICAL_UND {
                    return Ok(Self::UND);
                }
                return Ok(LanguageId(i as u16));
            }
        }

        // ISO 639-3 codes whose subtag starts with a different letter.
        if let Some(i) = ALT_LANG_ISO3.index(key) {
            let target = ALT_LANG_ISO3.elem(i)[3] as usize;
            return Ok(LanguageId(ALT_LANG_INDEX[target]));
        }

        // Valid ISO 639-3 codes without a table slot.
        let n = packer::pack(key);
        if in_no_index(n) {
            return Ok(LanguageId(n as u16 + LANG_NO_INDEX_OFFSET));
        }

        // ISO 639-3 spellings of two-letter subtags.
        for (i, e) in LANG.matches(&key[..1]) {
            if e[2] == key[1] && e[3] == key[2] {
                return Ok(LanguageId(i as u16));
            }
        }

        Err(SubtagError::invalid(key))
    }

    fn slot(self) -> Slot {
        if self.0 == 0 {
            Slot::Unspecified
        } else if self.0 >= LANG_NO_INDEX_OFFSET {
            Slot::Packed(u32::from(self.0 - LANG_NO_INDEX_OFFSET))
        } else {
            Slot::Table(self.0 as usize)
        }
    }

    /// Canonical BCP 47 form: the two-letter subtag when one exists.
    pub fn to_code(self) -> Code {
        match self.slot() {
            Slot::Unspecified => code(b"und"),
            Slot::Packed(n) => code(&packer::unpack3(n)),
            Slot::Table(i) => {
                let e = LANG.elem(i);
                if e[3] == 0 {
                    code(&e[..3])
                } else {
                    code(&e[..2])
                }
            }
        }
    }

    /// ISO 639-3 (terminology) code.
    pub fn iso3(self) -> Code {
        let i = match self.slot() {
            Slot::Table(i) => i,
            _ => return self.to_code(),
        };
        let e = LANG.elem(i);
        if e[3] == 0 {
            code(&e[..3])
        } else if e[2] == 0 {
            code(&ALT_LANG_ISO3.elem(e[3] as usize)[..3])
        } else {
            code(&[e[0], e[2], e[3]])
        }
    }

    /// Whether this is one of the private-use codes `qaa`..`qtz`.
    pub fn is_private_use(self) -> bool {
        (LANG_PRIVATE_START..=LANG_PRIVATE_END).contains(&self.0)
    }

    /// Whether the identifier has a slot in the language table.
    pub fn is_table_backed(self) -> bool {
        matches!(self.slot(), Slot::Table(_))
    }

    /// One alias step; see [`alias::normalize_language`].
    pub fn normalize(self) -> (LanguageId, LangAliasKind) {
        alias::normalize_language(self)
    }

    /// Every identifier with a table slot, in table order, skipping the slot
    /// of the literal `und` record.
    pub fn table_ids() -> impl Iterator<Item = LanguageId> {
        (1..LANG.len() as u16)
            .filter(|&i| i != NON_CANONICAL_UND)
            .map(LanguageId)
    }
}

/// Whether the packed code `n` is a valid ISO 639-3 code without a table slot.
fn in_no_index(n: u32) -> bool {
    LANG_NO_INDEX
        .get((n / 8) as usize)
        .is_some_and(|b| b & (1 << (n % 8)) != 0)
}

/// Accepts exactly the identifiers [`LanguageId::parse`] can return.
impl TryFrom<u16> for LanguageId {
    type Error = IdRangeError;

    fn try_from(v: u16) -> Result<Self, Self::Error> {
        let id = LanguageId(v);
        let valid = match id.slot() {
            Slot::Unspecified => true,
            Slot::Table(i) => i < LANG.len() && v != NON_CANONICAL_UND,
            Slot::Packed(n) => in_no_index(n),
        };
        valid.then_some(id).ok_or(IdRangeError::new("language", v))
    }
}

impl From<LanguageId> for u16 {
    fn from(id: LanguageId) -> u16 {
        id.0
    }
}

impl FromStr for LanguageId {
    type Err = SubtagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageId::parse(s)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}
