// SPDX-License-Identifier: PMPL-1.0-or-later

//! A minimal language tag
//!
//! Only the shapes the registry itself produces are understood: a language,
//! optional script and region, and an optional private-use suffix. Variants
//! and extensions are rejected as ill-formed.

use crate::error::SubtagError;
use crate::grandfathered;
use crate::language::LanguageId;
use crate::region::RegionId;
use crate::script::ScriptId;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Longest private-use subtag allowed by BCP 47.
const MAX_PRIVATE_SUBTAG: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Tag {
    pub language: LanguageId,
    pub script: ScriptId,
    pub region: RegionId,
    /// Private-use subtags after `x-`, lowercase, joined by `-`.
    pub private_use: Option<String>,
}

impl Tag {
    pub fn from_language(language: LanguageId) -> Self {
        Tag {
            language,
            ..Tag::default()
        }
    }

    /// Parses a tag, trying the legacy whole-tag table first.
    pub fn parse(s: &str) -> Result<Self, SubtagError> {
        match grandfathered::resolve_whole_tag(s) {
            Some(tag) => Ok(tag),
            None => Self::parse_subtags(s),
        }
    }

    /// Parses a tag subtag by subtag, without the legacy whole-tag table.
    pub fn parse_subtags(s: &str) -> Result<Self, SubtagError> {
        let mut tag = Tag::default();
        let mut parts = s.split('-').peekable();

        let first = parts.next().unwrap_or_default();
        if !first.eq_ignore_ascii_case("x") {
            tag.language = LanguageId::parse(first)?;
            if let Some(p) = parts.next_if(|p| p.len() == 4 && !p.eq_ignore_ascii_case("x")) {
                tag.script = ScriptId::parse(p)?;
            }
            if let Some(p) = parts.next_if(|p| matches!(p.len(), 2 | 3)) {
                tag.region = RegionId::parse(p)?;
            }
            match parts.next() {
                None => return Ok(tag),
                Some(p) if p.eq_ignore_ascii_case("x") => {}
                Some(_) => return Err(SubtagError::Syntax),
            }
        }

        let rest: Vec<&str> = parts.collect();
        let well_formed = |p: &&str| {
            (1..=MAX_PRIVATE_SUBTAG).contains(&p.len())
                && p.bytes().all(|b| b.is_ascii_alphanumeric())
        };
        if rest.is_empty() || !rest.iter().all(well_formed) {
            return Err(SubtagError::Syntax);
        }
        tag.private_use = Some(rest.join("-").to_ascii_lowercase());
        Ok(tag)
    }
}

impl FromStr for Tag {
    type Err = SubtagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::parse(s)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if self.script != ScriptId::ZZZZ {
            write!(f, "-{}", self.script)?;
        }
        if self.region != RegionId::ZZ {
            write!(f, "-{}", self.region)?;
        }
        if let Some(p) = &self.private_use {
            write!(f, "-x-{p}")?;
        }
        Ok(())
    }
}
