// SPDX-License-Identifier: PMPL-1.0-or-later

//! Deprecated and macrolanguage aliases
//!
//! Both alias tables are sorted by `from` and are looked up with a single
//! binary search. A lookup never follows chains: if `to` could itself be a
//! `from`, callers must re-apply until the identifier stops changing, which
//! [`canonical_language`] and [`canonical_region`] do with a bounded walk.

use crate::language::LanguageId;
use crate::region::RegionId;
use crate::tables;
use serde::{Deserialize, Serialize};

/// Why a language identifier has a replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LangAliasKind {
    /// Retired by the registry in favour of another code.
    Deprecated,
    /// An individual language folded into its macrolanguage.
    Macro,
    /// A legacy code CLDR maps to a different modern one.
    Legacy,
    /// No alias entry.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LangAlias {
    pub(crate) from: u16,
    pub(crate) to: u16,
    pub(crate) kind: LangAliasKind,
}

impl LangAlias {
    pub(crate) const fn new(from: u16, to: u16, kind: LangAliasKind) -> Self {
        Self { from, to, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RegionAlias {
    pub(crate) from: u16,
    pub(crate) to: u16,
}

impl RegionAlias {
    pub(crate) const fn new(from: u16, to: u16) -> Self {
        Self { from, to }
    }
}

/// Longest alias chain followed before giving up on a cycle.
const MAX_CHAIN: usize = 8;

pub(crate) fn find_language(id: u16) -> Option<&'static LangAlias> {
    let m = &tables::LANG_ALIASES;
    let k = m.partition_point(|a| a.from < id);
    m.get(k).filter(|a| a.from == id)
}

pub(crate) fn find_region(id: u16) -> Option<&'static RegionAlias> {
    let m = &tables::REGION_ALIASES;
    let k = m.partition_point(|a| a.from < id);
    m.get(k).filter(|a| a.from == id)
}

/// Maps `id` to its replacement, one step.
pub fn normalize_language(id: LanguageId) -> (LanguageId, LangAliasKind) {
    match find_language(id.raw()) {
        Some(a) => (LanguageId::from_raw(a.to), a.kind),
        None => (id, LangAliasKind::Unknown),
    }
}

/// Maps a deprecated region to its replacement, one step. Current regions are
/// returned unchanged.
pub fn normalize_region(id: RegionId) -> RegionId {
    match find_region(id.raw()) {
        Some(a) => RegionId::from_raw(a.to),
        None => id,
    }
}

/// Applies [`normalize_language`] until a fixed point. Returns `None` if the
/// chain does not settle, which only a cyclic alias table can cause.
pub fn canonical_language(mut id: LanguageId) -> Option<LanguageId> {
    for _ in 0..MAX_CHAIN {
        let (next, _) = normalize_language(id);
        if next == id {
            return Some(id);
        }
        id = next;
    }
    tracing::warn!(language = %id, "language alias chain does not settle");
    None
}

/// Applies [`normalize_region`] until a fixed point. Returns `None` on a cycle.
pub fn canonical_region(mut id: RegionId) -> Option<RegionId> {
    for _ in 0..MAX_CHAIN {
        let next = normalize_region(id);
        if next == id {
            return Some(id);
        }
        id = next;
    }
    tracing::warn!(region = %id, "region alias chain does not settle");
    None
}
