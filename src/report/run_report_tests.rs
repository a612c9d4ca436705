use super::*;
use crate::output::{OutputFormat, RenderOptions};
use crate::report::{Finding, Severity};

fn file_with(path: &str, errors: usize, warnings: usize, advice: usize) -> FileReport {
    let mut file = FileReport::new(path);
    let mut line = 0;
    for (severity, n) in [
        (Severity::Error, errors),
        (Severity::Warning, warnings),
        (Severity::Advice, advice),
    ] {
        for _ in 0..n {
            line += 1;
            file.add(Finding::new(severity, line, format!("{severity} {line}"), ""));
        }
    }
    file
}

#[test]
fn totals_are_sum_of_files() {
    let mut report = RunReport::new();
    report.add(file_with("a.c", 2, 0, 1));
    report.add(file_with("b.c", 0, 1, 0));

    assert_eq!(report.errors(), 2);
    assert_eq!(report.warnings(), 1);
    assert_eq!(report.advice(), 1);
    assert_eq!(report.total(), 4);
    assert_eq!(report.file_count(), 2);
}

#[test]
fn files_keep_processing_order() {
    let report: RunReport = ["z.c", "a.c", "m.c"]
        .into_iter()
        .map(FileReport::new)
        .collect();
    let paths: Vec<_> = report.files().iter().map(|f| f.path().to_path_buf()).collect();
    assert_eq!(
        paths,
        vec![
            std::path::PathBuf::from("z.c"),
            std::path::PathBuf::from("a.c"),
            std::path::PathBuf::from("m.c")
        ]
    );
}

#[test]
fn counts_are_independent_of_threshold() {
    let report: RunReport = [file_with("a.c", 2, 0, 1), file_with("b.c", 0, 1, 0)]
        .into_iter()
        .collect();

    for threshold in Severity::ALL {
        let json = report
            .render_to_string(&RenderOptions::new(OutputFormat::Json, threshold))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["errors"], 2);
        assert_eq!(value["warnings"], 1);
        assert_eq!(value["advice"], 1);
    }
}

#[test]
fn two_file_scenario_at_warning_threshold() {
    let report: RunReport = [file_with("one.cpp", 2, 0, 1), file_with("two.cpp", 0, 1, 0)]
        .into_iter()
        .collect();
    let json = report
        .render_to_string(&RenderOptions::new(OutputFormat::Json, Severity::Warning))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let first_reports = value["files"][0]["reports"].as_array().unwrap();
    assert_eq!(first_reports.len(), 2);
    assert!(first_reports.iter().all(|r| r["level"] == "Error"));
    assert_eq!(value["files"][1]["reports"].as_array().unwrap().len(), 1);
}

#[test]
fn text_render_goes_to_sink() {
    let report: RunReport = std::iter::once(file_with("a.c", 1, 0, 0)).collect();
    let mut out = Vec::new();
    report
        .render(&mut out, &RenderOptions::new(OutputFormat::Text, Severity::Error))
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("[Error  ] a.c:1: Error 1\n"));
    assert!(text.contains("Errors: 1"));
}
