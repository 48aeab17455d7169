// SPDX-License-Identifier: PMPL-1.0-or-later

//! Subtag resolution failures
//!
//! All three kinds are final: resolution is a pure function of the input and
//! the registry snapshot, so retrying cannot change the outcome.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SubtagError {
    /// The input has the wrong length or a character of the wrong class for
    /// the requested subtag kind. Detected before any table is consulted.
    #[error("ill-formed subtag")]
    Syntax,

    /// Well-formed input with no registry entry. Carries the case-fixed input.
    #[error("unknown subtag {0:?}")]
    InvalidSubtag(String),

    /// A three-digit region code outside the M.49 table.
    #[error("numeric region code {0:03} is not defined")]
    ValueRange(u16),
}

impl SubtagError {
    pub(crate) fn invalid(key: &[u8]) -> Self {
        SubtagError::InvalidSubtag(String::from_utf8_lossy(key).into_owned())
    }

    /// Short machine-friendly name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SubtagError::Syntax => "syntax",
            SubtagError::InvalidSubtag(_) => "invalid_subtag",
            SubtagError::ValueRange(_) => "value_range",
        }
    }
}

/// A stored identifier that the compiled-in registry could not have produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize)]
#[error("{kind} identifier {value} is not in this registry")]
pub struct IdRangeError {
    pub kind: &'static str,
    pub value: u16,
}

impl IdRangeError {
    pub(crate) fn new(kind: &'static str, value: u16) -> Self {
        Self { kind, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_payload() {
        assert_eq!(SubtagError::Syntax.to_string(), "ill-formed subtag");
        assert_eq!(
            SubtagError::InvalidSubtag("qq".into()).to_string(),
            "unknown subtag \"qq\""
        );
        assert_eq!(
            SubtagError::ValueRange(7).to_string(),
            "numeric region code 007 is not defined"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&SubtagError::ValueRange(998)).unwrap();
        assert_eq!(json, r#"{"kind":"value_range","value":998}"#);
        let json = serde_json::to_string(&SubtagError::Syntax).unwrap();
        assert_eq!(json, r#"{"kind":"syntax"}"#);
    }
}
