// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry snapshot metadata and consistency checks
//!
//! Identifiers are only meaningful against the snapshot that produced them.
//! [`fingerprint`] hashes every table so stored identifiers can be tied to a
//! snapshot, and [`check_consistency`] verifies the invariants the resolvers
//! rely on but do not check on each lookup: prefix-scan fallbacks must find
//! the intended record, and every rendered form must resolve back.

use crate::alias;
use crate::currency::CurrencyId;
use crate::grandfathered;
use crate::language::LanguageId;
use crate::region::RegionId;
use crate::script::ScriptId;
use crate::tables;
use crate::tag::Tag;
use serde::Serialize;
#[cfg(debug_assertions)]
use std::cell::Cell;
#[cfg(debug_assertions)]
use std::sync::Once;
use thiserror::Error;

/// A violated table invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{table}: {detail}")]
pub struct TableDefect {
    pub table: &'static str,
    pub detail: String,
}

impl TableDefect {
    fn new(table: &'static str, detail: String) -> Self {
        Self { table, detail }
    }
}

/// Summary of the compiled-in snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryInfo {
    pub fingerprint: String,
    pub languages: usize,
    pub dense_languages: usize,
    pub language_aliases: usize,
    pub regions: usize,
    pub region_aliases: usize,
    pub scripts: usize,
    pub currencies: usize,
    pub legacy_tags: usize,
}

/// BLAKE3 digest of every table, hex encoded.
pub fn fingerprint() -> String {
    let mut hasher = blake3::Hasher::new();
    for bytes in [
        tables::LANG.as_bytes(),
        tables::ALT_LANG_ISO3.as_bytes(),
        &tables::LANG_NO_INDEX[..],
        tables::REGION_ISO.as_bytes(),
        tables::ALT_REGION_ISO3,
        &tables::REGION_TYPES[..],
        tables::SCRIPT.as_bytes(),
        tables::CURRENCY.as_bytes(),
        tables::ALT_TAGS.as_bytes(),
    ] {
        hasher.update(&(bytes.len() as u64).to_le_bytes());
        hasher.update(bytes);
    }
    for words in [
        &tables::ALT_LANG_INDEX[..],
        &tables::ALT_REGION_IDS[..],
        &tables::M49[..],
        &tables::FROM_M49[..],
    ] {
        hasher.update(&(words.len() as u64).to_le_bytes());
        for w in words {
            hasher.update(&w.to_le_bytes());
        }
    }
    for a in &tables::LANG_ALIASES {
        hasher.update(&a.from.to_le_bytes());
        hasher.update(&a.to.to_le_bytes());
        hasher.update(&[a.kind as u8]);
    }
    for a in &tables::REGION_ALIASES {
        hasher.update(&a.from.to_le_bytes());
        hasher.update(&a.to.to_le_bytes());
    }
    for (key, v) in &tables::GRANDFATHERED {
        hasher.update(key.as_bytes());
        hasher.update(&v.to_le_bytes());
    }
    hex::encode(hasher.finalize().as_bytes())
}

pub fn info() -> RegistryInfo {
    let dense_languages = tables::LANG_NO_INDEX
        .iter()
        .map(|b| b.count_ones() as usize)
        .sum();
    RegistryInfo {
        fingerprint: fingerprint(),
        languages: LanguageId::table_ids().count(),
        dense_languages,
        language_aliases: tables::LANG_ALIASES.len(),
        regions: RegionId::table_ids().count(),
        region_aliases: tables::REGION_ALIASES.len(),
        scripts: ScriptId::table_ids().count(),
        currencies: CurrencyId::table_ids().count(),
        legacy_tags: tables::GRANDFATHERED.len(),
    }
}

/// Runs every table check and returns all defects found.
pub fn check_consistency() -> Vec<TableDefect> {
    let mut defects = Vec::new();
    check_languages(&mut defects);
    check_regions(&mut defects);
    check_scripts_and_currencies(&mut defects);
    check_aliases(&mut defects);
    check_legacy_tags(&mut defects);
    tracing::debug!(defects = defects.len(), "registry consistency check finished");
    defects
}

/// In debug builds, panics on the first lookup if the compiled-in tables are
/// inconsistent. A no-op in release builds.
pub(crate) fn debug_verify() {
    #[cfg(debug_assertions)]
    {
        thread_local! {
            static VERIFYING: Cell<bool> = const { Cell::new(false) };
        }
        static CHECKED: Once = Once::new();

        // The checks resolve through the public parsers, which land back here.
        if VERIFYING.get() {
            return;
        }
        CHECKED.call_once(|| {
            VERIFYING.set(true);
            let defects = check_consistency();
            VERIFYING.set(false);
            assert!(
                defects.is_empty(),
                "registry tables are inconsistent: {defects:?}"
            );
        });
    }
}

fn check_languages(defects: &mut Vec<TableDefect>) {
    if !sorted_on_prefix(tables::LANG.as_bytes(), 2) {
        defects.push(TableDefect::new("lang", "records not sorted on two-byte prefix".into()));
    }
    if !sorted_on_prefix(tables::ALT_LANG_ISO3.as_bytes(), 3) {
        defects.push(TableDefect::new("alt_lang_iso3", "records not sorted".into()));
    }
    for id in LanguageId::table_ids() {
        let code = id.to_code();
        if LanguageId::parse(&code).ok() != Some(id) {
            defects.push(TableDefect::new(
                "lang",
                format!("{code} does not resolve to slot {}", id.raw()),
            ));
        }
        // The ISO 639-3 spelling must land on this record or on its replacement.
        let iso3 = id.iso3();
        let back = LanguageId::parse(&iso3).ok();
        if back != Some(id) && back != Some(alias::normalize_language(id).0) {
            defects.push(TableDefect::new(
                "lang",
                format!("{iso3} (ISO 639-3 of {code}) resolves to {back:?}"),
            ));
        }
    }
}

fn check_regions(defects: &mut Vec<TableDefect>) {
    if !sorted_on_prefix(tables::REGION_ISO.as_bytes(), 2) {
        defects.push(TableDefect::new("region_iso", "records not sorted".into()));
    }
    let expected = tables::ISO_REGION_OFFSET as usize + tables::REGION_ISO.len();
    if tables::M49.len() != expected || tables::REGION_TYPES.len() != expected {
        defects.push(TableDefect::new(
            "region",
            format!("per-region tables must have {expected} entries"),
        ));
        return;
    }
    for id in RegionId::table_ids() {
        let code = id.to_code();
        if RegionId::parse(&code).ok() != Some(id) {
            defects.push(TableDefect::new(
                "region",
                format!("{code} does not resolve to {}", id.raw()),
            ));
        }
        let iso3 = id.iso3();
        if iso3.as_str() != "ZZZ" && RegionId::parse(&iso3).ok() != Some(id) {
            defects.push(TableDefect::new(
                "region",
                format!("{iso3} (alpha-3 of {code}) does not resolve back"),
            ));
        }
        let m49 = id.m49();
        if m49 != 0 {
            let back = RegionId::from_m49(m49).ok();
            if back != Some(id) && back != Some(alias::normalize_region(id)) {
                defects.push(TableDefect::new(
                    "m49",
                    format!("{m49:03} resolves to {back:?}, not {code}"),
                ));
            }
        }
    }
}

fn check_scripts_and_currencies(defects: &mut Vec<TableDefect>) {
    if !sorted_on_prefix(tables::SCRIPT.as_bytes(), 4) {
        defects.push(TableDefect::new("script", "records not sorted".into()));
    }
    if !sorted_on_prefix(tables::CURRENCY.as_bytes(), 3) {
        defects.push(TableDefect::new("currency", "records not sorted".into()));
    }
    let private = ScriptId::table_ids().filter(|s| s.is_private_use()).count();
    if private != 50 {
        defects.push(TableDefect::new(
            "script",
            format!("{private} private-use scripts, want Qaaa..Qabx"),
        ));
    }
}

fn check_aliases(defects: &mut Vec<TableDefect>) {
    for a in &tables::LANG_ALIASES {
        if alias::find_language(a.to).is_some() {
            defects.push(TableDefect::new(
                "lang_alias",
                format!("{} chains through {}", a.from, a.to),
            ));
        }
    }
    for a in &tables::REGION_ALIASES {
        if alias::find_region(a.to).is_some() {
            defects.push(TableDefect::new(
                "region_alias",
                format!("{} chains through {}", a.from, a.to),
            ));
        }
    }
}

fn check_legacy_tags(defects: &mut Vec<TableDefect>) {
    for (key, v) in &tables::GRANDFATHERED {
        if *v < 0 {
            let parsed = grandfathered::replacement(*v).map(Tag::parse_subtags);
            if !matches!(parsed, Some(Ok(_))) {
                defects.push(TableDefect::new(
                    "legacy",
                    format!("{key}: replacement does not parse"),
                ));
            }
        }
    }
}

fn sorted_on_prefix(data: &[u8], n: usize) -> bool {
    data.chunks_exact(crate::index::RECORD_LEN)
        .collect::<Vec<_>>()
        .windows(2)
        .all(|w| w[0][..n] <= w[1][..n])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_tables_are_consistent() {
        assert_eq!(check_consistency(), Vec::new());
    }

    #[test]
    fn fingerprint_is_stable_hex() {
        let fp = fingerprint();
        assert_eq!(fp.len(), 64);
        assert!(fp.bytes().all(|b| b.is_ascii_hexdigit()));
        assert_eq!(fp, fingerprint());
    }

    #[test]
    fn info_counts_tables() {
        let info = info();
        assert_eq!(info.languages, tables::LANG.len() - 2);
        assert_eq!(info.regions, tables::REGION_ISO.len() + tables::ISO_REGION_OFFSET as usize - 1);
        assert_eq!(info.scripts, tables::SCRIPT.len() - 1);
        assert_eq!(info.currencies, tables::CURRENCY.len() - 1);
        assert_eq!(info.legacy_tags, tables::GRANDFATHERED.len());
        assert!(info.dense_languages > 500);
    }

    #[test]
    fn unsorted_records_are_detected() {
        assert!(sorted_on_prefix(b"aa\0\0ab\0\0", 2));
        assert!(!sorted_on_prefix(b"ab\0\0aa\0\0", 2));
    }
}
