// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report building and export

use lang_registry::registry;
use lang_registry::report::{self, ReportOutputFormat, SubtagKind};
use tempfile::TempDir;

#[test]
fn test_lookup_report_exports_to_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("regions.json");

    let report = report::lookup(SubtagKind::Region, &["840", "BU", "1000"], true);
    assert_eq!(report.failures(), 1);
    ReportOutputFormat::Json.save(&report, &path).unwrap();

    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["registry"], registry::fingerprint());
    assert_eq!(v["entries"][0]["resolved"]["code"], "US");
    // Canonical lookups follow the alias.
    assert_eq!(v["entries"][1]["resolved"]["code"], "MM");
    assert_eq!(v["entries"][2]["error"]["kind"], "syntax");
}

#[test]
fn test_tag_report_exports_to_yaml() {
    let report = report::parse_tags(&["en-GB-oed", "sgn-BE-FR"]);
    let text = ReportOutputFormat::Yaml.serialize(&report).unwrap();
    let v: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
    assert_eq!(v["entries"][0]["canonical"].as_str(), Some("en-GB-x-oed"));
    assert_eq!(v["entries"][0]["grandfathered"].as_bool(), Some(true));
    assert_eq!(v["entries"][1]["canonical"].as_str(), Some("sfb"));
}

#[test]
fn test_verify_report_is_clean() {
    let report = report::verify();
    assert!(report.defects.is_empty(), "{:?}", report.defects);
    assert_eq!(report.info.fingerprint.len(), 64);
    assert!(report.info.languages > 100);
}
