//! Integration tests for directory scanning and reporting.

use std::fs;
use std::path::{Path, PathBuf};

use codegauge::config::{self, Config};
use codegauge::report::build_json_report;
use codegauge::{Language, Scanner};
use tempfile::TempDir;

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn load_test_config() -> Config {
    let config = Config::parse_file(testdata_path().join("codegauge.yaml"))
        .expect("should parse config");
    config::validate(&config).expect("config should be valid");
    config
}

#[test]
fn test_scan_testdata() {
    let config = load_test_config();
    assert_eq!(config.threshold, 50);

    let result = Scanner::new(testdata_path())
        .config(config)
        .scan()
        .expect("scan should succeed");

    let names: Vec<&str> = result.files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(names, vec!["sample.c", "sample.cpp", "sample.js", "sample.py"]);
    assert!(result.files.iter().all(|f| f.error.is_none()));
    assert!(result.passed());
    assert_eq!(result.threshold, 50);

    let scores: Vec<i32> = result
        .files
        .iter()
        .map(|f| f.quality.as_ref().map(|q| q.score).unwrap_or(-1))
        .collect();
    assert_eq!(scores, vec![92, 87, 87, 82]);
    assert_eq!(result.average_score(), Some(87.0));
}

#[test]
fn test_scan_with_forced_c() {
    let result = Scanner::new(testdata_path().join("sample.c"))
        .language(Some(Language::C))
        .scan()
        .expect("scan should succeed");

    let report = &result.files[0];
    let structure = report.structure.as_ref().expect("structure");
    assert_eq!(structure.language, Language::C);
    assert_eq!(structure.functions, vec!["duplicate"]);
}

#[test]
fn test_scan_strict_mismatch_fails_the_file() {
    let result = Scanner::new(testdata_path().join("sample.py"))
        .language(Some(Language::Cpp))
        .strict(true)
        .scan()
        .expect("scan should succeed");

    assert!(!result.passed());
    let error = result.files[0].error.as_deref().expect("error recorded");
    assert_eq!(error, "language mismatch: expected C++, detected Python");
}

#[test]
fn test_scan_threshold_and_exclusions() {
    let temp = TempDir::new().unwrap();
    let write = |rel: &str, content: &str| {
        let path = temp.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    };
    write("ok.py", "# documented\ndef ok():\n    return 1\n");
    write("third_party/big.js", &"var x = 1;\n".repeat(200));
    write("build/out.js", "var y = 2;\n");

    let config = Config {
        threshold: 90,
        excluded_paths: vec!["third_party/**".to_string()],
        ..Config::default()
    };
    let result = Scanner::new(temp.path()).config(config).scan().unwrap();

    assert_eq!(result.files_scanned(), 1);
    let report = &result.files[0];
    assert_eq!(report.file_name, "ok.py");
    // 1 comment over 3 lines is below 0.4: 100 - 5
    assert_eq!(report.quality.as_ref().unwrap().score, 95);
    assert!(result.passed());
}

#[test]
fn test_json_report_from_scan() {
    let config = load_test_config();
    let result = Scanner::new(testdata_path()).config(config).scan().unwrap();
    let report = build_json_report("testdata", Some("testdata/codegauge.yaml"), &result, true);

    let json = serde_json::to_value(&report).expect("should serialize");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["config"], "testdata/codegauge.yaml");
    assert_eq!(json["passed"], true);
    assert_eq!(json["files_scanned"], 4);
    assert_eq!(json["threshold"], 50);

    let files = json["files"].as_array().expect("files array");
    let js = files
        .iter()
        .find(|f| f["file_name"] == "sample.js")
        .expect("sample.js entry");
    for field in [
        "language",
        "complexity",
        "imports",
        "functions",
        "classes",
        "line_count",
        "comment_count",
        "comment_ratio",
        "nesting_depth",
        "cyclomatic_complexity",
        "potential_issues",
        "suggestions",
        "quality_score",
        "grade",
        "metadata",
        "token_frequency",
        "file_path",
        "file_name",
    ] {
        assert!(js.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(js["language"], "javascript");
    assert_eq!(js["functions"][0], "loadConfig");
    assert_eq!(js["metadata"]["import_count"], "1");
    assert_eq!(js["grade"], "B");
    assert!(js.get("error").is_none());
}

#[test]
fn test_config_discovery_in_directory() {
    assert!(Config::discover(&testdata_path()).is_some());
    assert!(Config::discover(Path::new("/nonexistent/codegauge")).is_none());
}
