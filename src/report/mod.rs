// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lookup reports
//!
//! Batches of raw codes are resolved into [`LookupReport`]s and whole tags
//! into [`TagReport`]s. Both serialize through [`ReportOutputFormat`] or
//! print as coloured tables on a terminal.

pub mod output;

pub use output::ReportOutputFormat;

use crate::alias::{self, LangAliasKind};
use crate::currency::CurrencyId;
use crate::error::SubtagError;
use crate::grandfathered;
use crate::language::LanguageId;
use crate::region::RegionId;
use crate::registry::{self, RegistryInfo, TableDefect};
use crate::script::ScriptId;
use crate::tag::Tag;
use clap::ValueEnum;
use colored::*;
use serde::Serialize;

/// Which registry a raw code is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SubtagKind {
    Language,
    Region,
    Script,
    Currency,
}

/// A successfully resolved code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub id: u16,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m49: Option<u16>,
    /// Canonical replacement when the identifier is an alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_kind: Option<LangAliasKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding: Option<u8>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupEntry {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<Resolved>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SubtagError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupReport {
    pub kind: SubtagKind,
    pub registry: String,
    pub entries: Vec<LookupEntry>,
}

impl LookupReport {
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| e.error.is_some()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    pub grandfathered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SubtagError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagReport {
    pub registry: String,
    pub entries: Vec<TagEntry>,
}

impl TagReport {
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| e.error.is_some()).count()
    }
}

/// Outcome of the table consistency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub info: RegistryInfo,
    pub defects: Vec<TableDefect>,
}

/// Resolves every input against one registry. With `canonical`, each
/// identifier is replaced by the end of its alias chain before rendering.
pub fn lookup<S: AsRef<str>>(kind: SubtagKind, inputs: &[S], canonical: bool) -> LookupReport {
    let entries = inputs
        .iter()
        .map(|input| {
            let input = input.as_ref();
            let outcome = resolve(kind, input, canonical);
            if let Err(err) = &outcome {
                tracing::debug!(input, ?kind, error = err.kind(), "lookup failed");
            }
            let (resolved, error) = match outcome {
                Ok(r) => (Some(r), None),
                Err(e) => (None, Some(e)),
            };
            LookupEntry {
                input: input.to_string(),
                resolved,
                error,
            }
        })
        .collect();
    LookupReport {
        kind,
        registry: registry::fingerprint(),
        entries,
    }
}

fn resolve(kind: SubtagKind, input: &str, canonical: bool) -> Result<Resolved, SubtagError> {
    Ok(match kind {
        SubtagKind::Language => {
            let mut id = LanguageId::parse(input)?;
            if canonical {
                id = alias::canonical_language(id).unwrap_or(id);
            }
            describe_language(id)
        }
        SubtagKind::Region => {
            let mut id = RegionId::parse(input)?;
            if canonical {
                id = alias::canonical_region(id).unwrap_or(id);
            }
            describe_region(id)
        }
        SubtagKind::Script => {
            let id = ScriptId::parse(input)?;
            let mut r = base(u16::from(id.raw()), id.to_string());
            if id.is_private_use() {
                r.flags.push("private_use");
            }
            r
        }
        SubtagKind::Currency => {
            let id = CurrencyId::parse(input)?;
            let mut r = base(id.raw(), id.to_string());
            if id != CurrencyId::XXX {
                r.decimals = Some(id.decimals());
                r.rounding = Some(id.rounding());
            }
            r
        }
    })
}

fn base(id: u16, code: String) -> Resolved {
    Resolved {
        id,
        code,
        iso3: None,
        m49: None,
        replacement: None,
        alias_kind: None,
        decimals: None,
        rounding: None,
        flags: Vec::new(),
    }
}

fn describe_language(id: LanguageId) -> Resolved {
    let mut r = base(id.raw(), id.to_string());
    r.iso3 = Some(id.iso3().to_string());
    let (to, kind) = id.normalize();
    if to != id {
        r.replacement = Some(to.to_string());
        r.alias_kind = Some(kind);
    }
    if id.is_private_use() {
        r.flags.push("private_use");
    }
    if !id.is_table_backed() && id != LanguageId::UND {
        r.flags.push("packed");
    }
    r
}

fn describe_region(id: RegionId) -> Resolved {
    let mut r = base(id.raw(), id.to_string());
    r.iso3 = Some(id.iso3().to_string());
    r.m49 = Some(id.m49()).filter(|&m| m != 0);
    let to = id.normalize();
    if to != id {
        r.replacement = Some(to.to_string());
    }
    if id == RegionId::ZZ {
        return r;
    }
    for (set, flag) in [
        (id.is_private_use(), "private_use"),
        (id.is_cctld(), "cctld"),
        (id.is_bcp47(), "bcp47"),
    ] {
        if set {
            r.flags.push(flag);
        }
    }
    r
}

/// Parses whole tags, legacy forms included.
pub fn parse_tags<S: AsRef<str>>(inputs: &[S]) -> TagReport {
    let entries = inputs
        .iter()
        .map(|input| {
            let input = input.as_ref();
            let grandfathered = grandfathered::is_grandfathered(input);
            match Tag::parse(input) {
                Ok(tag) => TagEntry {
                    input: input.to_string(),
                    canonical: Some(tag.to_string()),
                    grandfathered,
                    tag: Some(tag),
                    error: None,
                },
                Err(err) => {
                    tracing::debug!(input, error = err.kind(), "tag rejected");
                    TagEntry {
                        input: input.to_string(),
                        canonical: None,
                        grandfathered,
                        tag: None,
                        error: Some(err),
                    }
                }
            }
        })
        .collect();
    TagReport {
        registry: registry::fingerprint(),
        entries,
    }
}

pub fn verify() -> VerifyReport {
    VerifyReport {
        info: registry::info(),
        defects: registry::check_consistency(),
    }
}

/// Print a lookup report to the console
pub fn print_lookup(report: &LookupReport) {
    println!(
        "{}",
        format!("=== {:?} LOOKUP ===", report.kind).to_uppercase().bold().cyan()
    );
    for entry in &report.entries {
        match (&entry.resolved, &entry.error) {
            (Some(r), _) => {
                let mut line = format!(
                    "  {:<10} {} {:>5}  {}",
                    entry.input,
                    "->".dimmed(),
                    r.id,
                    r.code.bold().green()
                );
                if let Some(iso3) = &r.iso3 {
                    line.push_str(&format!("  iso3={iso3}"));
                }
                if let Some(m49) = r.m49 {
                    line.push_str(&format!("  m49={m49:03}"));
                }
                if let Some(d) = r.decimals {
                    line.push_str(&format!("  decimals={d}"));
                }
                if let Some(inc) = r.rounding {
                    line.push_str(&format!("  rounding={inc}"));
                }
                if let Some(to) = &r.replacement {
                    let kind = r
                        .alias_kind
                        .map(|k| format!(" ({k:?})").to_lowercase())
                        .unwrap_or_default();
                    line.push_str(&format!("  {}", format!("alias of {to}{kind}").yellow()));
                }
                if !r.flags.is_empty() {
                    line.push_str(&format!("  [{}]", r.flags.join(",")));
                }
                println!("{line}");
            }
            (None, Some(err)) => {
                println!("  {:<10} {} {}", entry.input, "!!".red().bold(), err.to_string().red());
            }
            (None, None) => {}
        }
    }
    print_failures(report.failures(), report.entries.len());
}

/// Print a tag report to the console
pub fn print_tags(report: &TagReport) {
    println!("{}", "=== TAGS ===".bold().cyan());
    for entry in &report.entries {
        match (&entry.canonical, &entry.error) {
            (Some(canonical), _) => {
                let legacy = if entry.grandfathered {
                    format!("  {}", "legacy".yellow())
                } else {
                    String::new()
                };
                println!(
                    "  {:<16} {} {}{legacy}",
                    entry.input,
                    "->".dimmed(),
                    canonical.bold().green()
                );
            }
            (None, Some(err)) => {
                println!("  {:<16} {} {}", entry.input, "!!".red().bold(), err.to_string().red());
            }
            (None, None) => {}
        }
    }
    print_failures(report.failures(), report.entries.len());
}

/// Print registry counts and any table defects to the console
pub fn print_verify(report: &VerifyReport) {
    let info = &report.info;
    println!("{}", "=== REGISTRY ===".bold().cyan());
    println!("  fingerprint       {}", info.fingerprint.dimmed());
    println!("  languages         {}", info.languages);
    println!("  dense languages   {}", info.dense_languages);
    println!("  language aliases  {}", info.language_aliases);
    println!("  regions           {}", info.regions);
    println!("  region aliases    {}", info.region_aliases);
    println!("  scripts           {}", info.scripts);
    println!("  currencies        {}", info.currencies);
    println!("  legacy tags       {}", info.legacy_tags);
    println!();
    if report.defects.is_empty() {
        println!("{}", "All table invariants hold".green());
    } else {
        println!("{}", "TABLE DEFECTS".bold().red());
        for d in &report.defects {
            println!("  - {}", d.to_string().red());
        }
    }
}

fn print_failures(failed: usize, total: usize) {
    println!();
    if failed == 0 {
        println!("{}", format!("{total} resolved").green());
    } else {
        println!(
            "{}",
            format!("{} resolved, {failed} failed", total - failed).red().bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(kind: SubtagKind, input: &str, canonical: bool) -> LookupEntry {
        lookup(kind, &[input], canonical).entries.remove(0)
    }

    #[test]
    fn language_entry_carries_alias() {
        let e = one(SubtagKind::Language, "iw", false);
        let r = e.resolved.unwrap();
        assert_eq!(r.code, "iw");
        assert_eq!(r.replacement.as_deref(), Some("he"));
        assert_eq!(r.alias_kind, Some(LangAliasKind::Deprecated));

        let r = one(SubtagKind::Language, "iw", true).resolved.unwrap();
        assert_eq!(r.code, "he");
        assert_eq!(r.replacement, None);
    }

    #[test]
    fn region_entry_carries_codes_and_flags() {
        let r = one(SubtagKind::Region, "840", false).resolved.unwrap();
        assert_eq!(r.code, "US");
        assert_eq!(r.iso3.as_deref(), Some("USA"));
        assert_eq!(r.m49, Some(840));
        assert!(r.flags.contains(&"bcp47"));
    }

    #[test]
    fn currency_entry_carries_minor_units() {
        let r = one(SubtagKind::Currency, "jpy", false).resolved.unwrap();
        assert_eq!(r.code, "JPY");
        assert_eq!(r.decimals, Some(0));
        assert_eq!(one(SubtagKind::Currency, "XXX", false).resolved.unwrap().decimals, None);
    }

    #[test]
    fn failures_are_kept_per_entry() {
        let report = lookup(SubtagKind::Script, &["Latn", "zz", "Qqqq"], false);
        assert_eq!(report.failures(), 2);
        assert_eq!(report.entries[1].error, Some(SubtagError::Syntax));
        assert_eq!(report.registry, registry::fingerprint());
    }

    #[test]
    fn tag_entries_mark_legacy_input() {
        let report = parse_tags(&["i-klingon", "en-GB-x-oed", "en-"]);
        assert!(report.entries[0].grandfathered);
        assert_eq!(report.entries[0].canonical.as_deref(), Some("tlh"));
        assert!(!report.entries[1].grandfathered);
        assert_eq!(report.failures(), 1);
    }

    #[test]
    fn verify_reports_no_defects() {
        assert!(verify().defects.is_empty());
    }
}
