// SPDX-License-Identifier: PMPL-1.0-or-later

//! lang-registry: compact numeric identifiers for locale subtags.
//!
//! Converts BCP 47 language, region and script subtags and ISO 4217
//! currency codes to small integers and back, against a compiled-in
//! registry snapshot. Deprecated codes resolve to their own identifiers and
//! are mapped to replacements by the alias layer. Legacy whole tags such as
//! `i-klingon` are rewritten by [`grandfathered`].
//!
//! Identifiers are only comparable within one snapshot; see
//! [`registry::fingerprint`].

pub mod alias;
pub mod code;
pub mod currency;
pub mod error;
pub mod grandfathered;
pub mod index;
pub mod language;
pub mod packer;
pub mod region;
pub mod registry;
pub mod report;
pub mod script;
mod tables;
pub mod tag;

pub use alias::LangAliasKind;
pub use code::Code;
pub use currency::CurrencyId;
pub use error::{IdRangeError, SubtagError};
pub use language::LanguageId;
pub use region::RegionId;
pub use script::ScriptId;
pub use tag::Tag;
