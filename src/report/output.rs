// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported reports

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            _ => None,
        }
    }

    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportOutputFormat::Json => "json",
            ReportOutputFormat::Yaml => "yaml",
        }
    }

    pub fn serialize<R: Serialize>(&self, report: &R) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }

    /// Serializes `report` and writes it to `path`.
    pub fn save<R: Serialize>(&self, report: &R, path: &Path) -> Result<()> {
        let text = self.serialize(report)?;
        std::fs::write(path, text)
            .with_context(|| format!("writing report to {}", path.display()))?;
        tracing::info!(path = %path.display(), format = self.extension(), "report saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{lookup, SubtagKind};

    #[test]
    fn names_and_extensions() {
        assert_eq!(ReportOutputFormat::parse("YML"), Some(ReportOutputFormat::Yaml));
        assert_eq!(ReportOutputFormat::parse("ncl"), None);
        assert_eq!(
            ReportOutputFormat::from_path(Path::new("out/report.json")),
            Some(ReportOutputFormat::Json)
        );
        assert_eq!(ReportOutputFormat::from_path(Path::new("report")), None);
    }

    #[test]
    fn json_carries_error_kind() {
        let report = lookup(SubtagKind::Region, &["998"], false);
        let text = ReportOutputFormat::Json.serialize(&report).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        let err = &v["entries"][0]["error"];
        assert_eq!(err["kind"], "value_range");
        assert_eq!(err["value"], 998);
        assert_eq!(v["kind"], "region");
    }

    #[test]
    fn yaml_round_trips_through_value() {
        let report = lookup(SubtagKind::Language, &["eng"], false);
        let text = ReportOutputFormat::Yaml.serialize(&report).unwrap();
        let v: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(v["entries"][0]["resolved"]["code"].as_str(), Some("en"));
    }

    #[test]
    fn save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lookup.yaml");
        let report = lookup(SubtagKind::Script, &["Zzzz"], false);
        ReportOutputFormat::Yaml.save(&report, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Zzzz"));
    }
}
