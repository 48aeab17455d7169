// SPDX-License-Identifier: PMPL-1.0-or-later

//! Grandfathered and legacy whole tags
//!
//! Tags such as `i-klingon` or `en-GB-oed` predate the subtag structure and
//! only match as a whole. Most map to a single language; the rest are
//! rewritten to a replacement tag with a private-use suffix.

use crate::language::LanguageId;
use crate::tables::{ALT_TAGS, ALT_TAG_INDEX, GRANDFATHERED};
use crate::tag::Tag;
use std::cmp::Ordering;

/// Compares a lowercase table key against `s`, ignoring the case of `s`.
fn cmp_folded(key: &str, s: &str) -> Ordering {
    key.bytes().cmp(s.bytes().map(|b| b.to_ascii_lowercase()))
}

fn lookup(s: &str) -> Option<i16> {
    let k = GRANDFATHERED.partition_point(|(key, _)| cmp_folded(key, s) == Ordering::Less);
    GRANDFATHERED
        .get(k)
        .filter(|(key, _)| cmp_folded(key, s) == Ordering::Equal)
        .map(|&(_, v)| v)
}

/// Replacement literal for a negative table value.
pub(crate) fn replacement(v: i16) -> Option<&'static str> {
    let i = usize::try_from(-(v as i32) - 1).ok()?;
    let start = *ALT_TAG_INDEX.get(i)? as usize;
    let end = *ALT_TAG_INDEX.get(i + 1)? as usize;
    ALT_TAGS.get(start..end)
}

/// Resolves a legacy tag taken as a whole. Returns `None` when `s` is not in
/// the table.
pub fn resolve_whole_tag(s: &str) -> Option<Tag> {
    let v = lookup(s)?;
    if v >= 0 {
        return Some(Tag::from_language(LanguageId::from_raw(v as u16)));
    }
    let literal = replacement(v)?;
    match Tag::parse_subtags(literal) {
        Ok(tag) => Some(tag),
        Err(err) => {
            tracing::error!(tag = s, literal, %err, "replacement for legacy tag does not parse");
            None
        }
    }
}

/// Whether `s` is a grandfathered or legacy tag.
pub fn is_grandfathered(s: &str) -> bool {
    lookup(s).is_some()
}

/// Every legacy tag in the table, lowercase.
pub fn tags() -> impl Iterator<Item = &'static str> {
    GRANDFATHERED.iter().map(|&(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_lowercase() {
        assert!(GRANDFATHERED.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(tags().all(|t| t == t.to_ascii_lowercase()));
    }

    #[test]
    fn language_replacements() {
        let tlh = LanguageId::parse("tlh").unwrap();
        assert_eq!(resolve_whole_tag("i-klingon"), Some(Tag::from_language(tlh)));
        assert_eq!(
            resolve_whole_tag("zh-min-nan").map(|t| t.language),
            Some(LanguageId::parse("nan").unwrap())
        );
        assert_eq!(
            resolve_whole_tag("no-bok").map(|t| t.to_string()),
            Some("nb".to_string())
        );
    }

    #[test]
    fn match_ignores_case() {
        assert_eq!(resolve_whole_tag("I-Klingon"), resolve_whole_tag("i-klingon"));
        assert_eq!(resolve_whole_tag("sgn-BE-FR"), resolve_whole_tag("sgn-be-fr"));
    }

    #[test]
    fn full_rewrites() {
        assert_eq!(
            resolve_whole_tag("en-GB-oed"),
            Some(Tag::parse_subtags("en-GB-x-oed").unwrap())
        );
        assert_eq!(
            resolve_whole_tag("cel-gaulish").map(|t| t.to_string()),
            Some("xtg-x-cel-gaulish".to_string())
        );
        assert_eq!(
            resolve_whole_tag("i-enochian").map(|t| t.to_string()),
            Some("und-x-i-enochian".to_string())
        );
        assert_eq!(
            resolve_whole_tag("zh-min").map(|t| t.to_string()),
            Some("nan-x-zh-min".to_string())
        );
    }

    #[test]
    fn root_is_und() {
        assert_eq!(resolve_whole_tag("root"), Some(Tag::default()));
    }

    #[test]
    fn only_whole_tags_match() {
        assert_eq!(resolve_whole_tag("i-klingon-x-foo"), None);
        assert_eq!(resolve_whole_tag("klingon"), None);
        assert_eq!(resolve_whole_tag("zh-min-"), None);
        assert_eq!(resolve_whole_tag(""), None);
        assert!(!is_grandfathered("en"));
    }

    #[test]
    fn every_replacement_literal_parses() {
        for v in -6..0 {
            let literal = replacement(v).unwrap();
            assert!(Tag::parse_subtags(literal).is_ok(), "{literal}");
        }
        assert_eq!(replacement(-7), None);
    }
}
