// SPDX-License-Identifier: PMPL-1.0-or-later

//! Region subtags
//!
//! Identifiers below [`ISO_REGION_OFFSET`] are regions that only have a UN
//! M.49 code (continents, sub-continental areas). From the offset up, each
//! identifier is a slot in the ISO 3166-1 alpha-2 table. Zero is `ZZ`.

use crate::alias;
use crate::code::{code, Code};
use crate::error::{IdRangeError, SubtagError};
use crate::index::{find_index, fixed_key};
use crate::tables::{
    ALT_REGION_IDS, ALT_REGION_ISO3, BCP47_REGION, CC_TLD, FROM_M49, ISO3166_USER_ASSIGNED,
    ISO_REGION_OFFSET, M49, M49_INDEX, M49_REGION_BITS, M49_SEARCH_BITS, REGION_GB, REGION_ISO,
    REGION_TYPES, REGION_UK,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compact identifier of a region subtag.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "u16", try_from = "u16")]
pub struct RegionId(u16);

impl RegionId {
    /// `ZZ`, the unknown region.
    pub const ZZ: RegionId = RegionId(0);

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub(crate) const fn from_raw(v: u16) -> Self {
        RegionId(v)
    }

    /// Resolves an ISO 3166-1 alpha-2 or alpha-3 code, or a three-digit M.49
    /// code.
    pub fn parse(s: &str) -> Result<Self, SubtagError> {
        crate::registry::debug_verify();
        let b = s.as_bytes();
        if b.len() == 3 {
            if b[0].is_ascii_alphabetic() {
                return Self::parse_iso3(s);
            }
            if b.iter().all(u8::is_ascii_digit) {
                let n = b
                    .iter()
                    .fold(0u16, |n, d| n * 10 + u16::from(d - b'0'));
                return Self::from_m49(n);
            }
        }
        Self::parse_iso2(s)
    }

    fn parse_iso2(s: &str) -> Result<Self, SubtagError> {
        if s.eq_ignore_ascii_case("ZZ") {
            return Ok(Self::ZZ);
        }
        let i = find_index(&REGION_ISO, s, "ZZ")?;
        Ok(RegionId(i as u16 + ISO_REGION_OFFSET))
    }

    fn parse_iso3(s: &str) -> Result<Self, SubtagError> {
        let buf = fixed_key("ZZZ", s)?;
        let key = &buf[..3];
        if key == b"ZZZ" {
            return Ok(Self::ZZ);
        }
        for (i, e) in REGION_ISO.matches(&key[..1]) {
            if e[2] == key[1] && e[3] == key[2] {
                return Ok(RegionId(i as u16 + ISO_REGION_OFFSET));
            }
        }
        ALT_REGION_ISO3
            .chunks_exact(3)
            .position(|alt| alt == key)
            .map(|k| RegionId(ALT_REGION_IDS[k]))
            .ok_or_else(|| SubtagError::invalid(key))
    }

    /// Resolves a UN M.49 code in `1..=999`.
    pub fn from_m49(n: u16) -> Result<Self, SubtagError> {
        const REGION_MASK: u16 = (1 << M49_REGION_BITS) - 1;
        if (1..=999).contains(&n) {
            let idx = (n >> M49_SEARCH_BITS) as usize;
            let bucket = &FROM_M49[M49_INDEX[idx] as usize..M49_INDEX[idx + 1] as usize];
            // The high bits of the code shift out; the bucket supplies them.
            let val = n << M49_REGION_BITS;
            let k = bucket.partition_point(|&r| r < val);
            if let Some(&r) = bucket.get(k) {
                if r & !REGION_MASK == val {
                    return Ok(RegionId(r & REGION_MASK));
                }
            }
        }
        Err(SubtagError::ValueRange(n))
    }

    /// Canonical BCP 47 form: the alpha-2 code, or three digits for regions
    /// without one.
    pub fn to_code(self) -> Code {
        if self.0 < ISO_REGION_OFFSET {
            if self.0 == 0 {
                return code(b"ZZ");
            }
            let m = self.m49();
            return code(&[
                b'0' + (m / 100) as u8,
                b'0' + (m / 10 % 10) as u8,
                b'0' + (m % 10) as u8,
            ]);
        }
        code(&self.record()[..2])
    }

    /// ISO 3166-1 alpha-3 code, or `ZZZ` when the region has none.
    pub fn iso3(self) -> Code {
        if self.0 < ISO_REGION_OFFSET {
            return code(b"ZZZ");
        }
        let e = self.record();
        match e[2] {
            0 => {
                let at = e[3] as usize;
                code(&ALT_REGION_ISO3[at..at + 3])
            }
            b' ' => code(b"ZZZ"),
            _ => code(&[e[0], e[2], e[3]]),
        }
    }

    /// UN M.49 code, or 0 if the region has none.
    pub fn m49(self) -> u16 {
        M49[self.0 as usize]
    }

    fn record(self) -> &'static [u8] {
        REGION_ISO.elem((self.0 - ISO_REGION_OFFSET) as usize)
    }

    fn typ(self) -> u8 {
        REGION_TYPES[self.0 as usize]
    }

    /// Whether the region has ISO 3166 user-assigned status. This includes
    /// codes CLDR assigns for its own use, so a region can be both private
    /// use and a valid BCP 47 region.
    pub fn is_private_use(self) -> bool {
        self.typ() & ISO3166_USER_ASSIGNED != 0
    }

    /// Whether the code is a country-code top-level domain.
    pub fn is_cctld(self) -> bool {
        self.typ() & CC_TLD != 0
    }

    /// Whether the code may appear as a region subtag of a BCP 47 tag.
    pub fn is_bcp47(self) -> bool {
        self.typ() & BCP47_REGION != 0
    }

    /// The country-code top-level domain for the region, if any. `GB` maps
    /// to `UK`, which is a ccTLD but not an ISO 3166 code.
    pub fn tld(self) -> Option<RegionId> {
        let r = if self.0 == REGION_GB {
            RegionId(REGION_UK)
        } else {
            self
        };
        r.is_cctld().then_some(r)
    }

    /// One alias step; see [`alias::normalize_region`].
    pub fn normalize(self) -> RegionId {
        alias::normalize_region(self)
    }

    /// Every non-zero region identifier, numeric-only regions first.
    pub fn table_ids() -> impl Iterator<Item = RegionId> {
        (1..ISO_REGION_OFFSET + REGION_ISO.len() as u16).map(RegionId)
    }
}

impl TryFrom<u16> for RegionId {
    type Error = IdRangeError;

    fn try_from(v: u16) -> Result<Self, Self::Error> {
        if v < ISO_REGION_OFFSET + REGION_ISO.len() as u16 {
            Ok(RegionId(v))
        } else {
            Err(IdRangeError::new("region", v))
        }
    }
}

impl From<RegionId> for u16 {
    fn from(id: RegionId) -> u16 {
        id.0
    }
}

impl FromStr for RegionId {
    type Err = SubtagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionId::parse(s)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RegionId {
        RegionId::parse(s).unwrap()
    }

    #[test]
    fn deserialize_rejects_ids_past_the_table() {
        let us: RegionId = serde_json::from_str(&id("US").raw().to_string()).unwrap();
        assert_eq!(us.to_string(), "US");
        assert_eq!(serde_json::from_str::<RegionId>("0").unwrap(), RegionId::ZZ);
        let last = RegionId::table_ids().last().unwrap();
        assert_eq!(RegionId::try_from(last.raw()), Ok(last));

        assert!(serde_json::from_str::<RegionId>("500").is_err());
        assert_eq!(
            RegionId::try_from(last.raw() + 1),
            Err(IdRangeError::new("region", last.raw() + 1))
        );
    }

    #[test]
    fn numeric_alpha2_and_alpha3_agree() {
        let us = id("US");
        assert_eq!(id("840"), us);
        assert_eq!(id("USA"), us);
        assert_eq!(id("us"), us);
        assert_eq!(us.to_string(), "US");
        assert_eq!(us.iso3().as_str(), "USA");
        assert_eq!(us.m49(), 840);
    }

    #[test]
    fn unspecified_region() {
        assert_eq!(id("ZZ"), RegionId::ZZ);
        assert_eq!(id("zz"), RegionId::ZZ);
        assert_eq!(id("ZZZ"), RegionId::ZZ);
        assert_eq!(RegionId::ZZ.to_string(), "ZZ");
        assert_eq!(RegionId::ZZ.iso3().as_str(), "ZZZ");
        assert!(RegionId::ZZ.is_private_use());
    }

    #[test]
    fn numeric_only_regions_render_as_digits() {
        let latam = id("419");
        assert!(latam.raw() < ISO_REGION_OFFSET);
        assert_eq!(latam.to_string(), "419");
        assert_eq!(latam.iso3().as_str(), "ZZZ");
        assert_eq!(id("001").to_string(), "001");
        assert_eq!(id("001").m49(), 1);
    }

    #[test]
    fn alternate_alpha3_codes() {
        assert_eq!(id("SGS"), id("GS"));
        assert_eq!(id("COM"), id("KM"));
        assert_eq!(id("QUU"), id("EU"));
        assert_eq!(id("KP").iso3().as_str(), "PRK");
        assert_eq!(id("EU").iso3().as_str(), "QUU");
    }

    #[test]
    fn regions_without_alpha3() {
        assert_eq!(id("UK").iso3().as_str(), "ZZZ");
        assert_eq!(id("XK").iso3().as_str(), "ZZZ");
    }

    #[test]
    fn m49_resolves_to_canonical_region() {
        // 104 is shared by BU and MM; the reverse table points at MM.
        assert_eq!(id("104"), id("MM"));
        assert_eq!(id("BU").m49(), 104);
        assert_eq!(id("250"), id("FR"));
    }

    #[test]
    fn numeric_boundaries_fail_distinctly() {
        assert_eq!(RegionId::parse("000"), Err(SubtagError::ValueRange(0)));
        assert_eq!(RegionId::parse("998"), Err(SubtagError::ValueRange(998)));
        assert_eq!(RegionId::parse("1000"), Err(SubtagError::Syntax));
        assert_eq!(RegionId::parse("1a2"), Err(SubtagError::Syntax));
        assert_eq!(RegionId::parse("+12"), Err(SubtagError::Syntax));
        assert_eq!(
            RegionId::parse("QQQ"),
            Err(SubtagError::InvalidSubtag("QQQ".into()))
        );
        assert_eq!(RegionId::from_m49(1000), Err(SubtagError::ValueRange(1000)));
    }

    #[test]
    fn alpha2_failures() {
        assert_eq!(RegionId::parse("U1"), Err(SubtagError::Syntax));
        assert_eq!(RegionId::parse("U"), Err(SubtagError::Syntax));
        assert_eq!(
            RegionId::parse("qq"),
            Err(SubtagError::InvalidSubtag("QQ".into()))
        );
    }

    #[test]
    fn status_flags() {
        assert!(id("AA").is_private_use());
        assert!(id("QO").is_private_use());
        assert!(id("XK").is_private_use() && id("XK").is_bcp47());
        assert!(!id("US").is_private_use());
        assert!(id("US").is_cctld() && id("US").is_bcp47());
        assert!(id("UK").is_cctld() && !id("UK").is_bcp47());
        assert!(id("419").is_bcp47() && !id("419").is_cctld());
    }

    #[test]
    fn tld_maps_gb_to_uk() {
        assert_eq!(id("GB").tld(), Some(id("UK")));
        assert_eq!(id("FR").tld(), Some(id("FR")));
        assert_eq!(id("419").tld(), None);
        assert_eq!(id("AA").tld(), None);
    }

    #[test]
    fn every_region_round_trips() {
        for r in RegionId::table_ids() {
            assert_eq!(id(&r.to_string()), r, "render {r}");
        }
    }
}
