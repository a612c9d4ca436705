use super::*;
use crate::output::{OutputFormat, RenderOptions};

#[test]
fn add_counts_by_severity() {
    let mut file = FileReport::new("a.cpp");
    file.add(Finding::error(1, "e", ""));
    file.add(Finding::error(2, "e", ""));
    file.add(Finding::warning(3, "w", ""));
    file.add(Finding::advice(4, "a", ""));

    assert_eq!(file.errors(), 2);
    assert_eq!(file.warnings(), 1);
    assert_eq!(file.advice(), 1);
    assert_eq!(file.total(), file.findings().len());
}

#[test]
fn counter_invariant_holds_for_every_prefix() {
    let sequence = [
        Severity::Advice,
        Severity::Error,
        Severity::Advice,
        Severity::Warning,
        Severity::Error,
    ];
    let mut file = FileReport::new("x.c");
    for (i, severity) in sequence.iter().enumerate() {
        file.add(Finding::new(*severity, i + 1, "t", ""));
        assert_eq!(file.total(), i + 1);
        for s in Severity::ALL {
            let expected = file.findings().iter().filter(|f| f.severity() == s).count();
            assert_eq!(file.counts().get(s), expected);
        }
    }
}

#[test]
fn duplicates_and_odd_lines_are_kept() {
    let mut file = FileReport::new("x.c");
    file.add(Finding::error(0, "same", ""));
    file.add(Finding::error(0, "same", ""));
    file.add(Finding::error(10_000, "far", ""));
    assert_eq!(file.findings().len(), 3);
}

#[test]
fn visible_filters_by_threshold_in_order() {
    let mut file = FileReport::new("x.c");
    file.add(Finding::advice(1, "a", ""));
    file.add(Finding::error(2, "e", ""));
    file.add(Finding::warning(3, "w", ""));

    let titles: Vec<&str> = file.visible(Severity::Warning).map(Finding::title).collect();
    assert_eq!(titles, vec!["e", "w"]);
    assert_eq!(file.visible(Severity::Error).count(), 1);
    assert_eq!(file.visible(Severity::Advice).count(), 3);
}

#[test]
fn render_writes_to_given_sink() {
    let mut file = FileReport::new("sink.c");
    file.add(Finding::warning(8, "careful", ""));
    let mut out = Vec::new();
    file.render(
        &mut out,
        &RenderOptions::new(OutputFormat::Text, Severity::Advice),
    )
    .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[Warning] sink.c:8: careful\n");
}

#[test]
fn finding_accessors() {
    let finding = Finding::new(Severity::Warning, 12, "title", "description");
    assert_eq!(finding.severity(), Severity::Warning);
    assert_eq!(finding.line(), 12);
    assert_eq!(finding.title(), "title");
    assert_eq!(finding.description(), "description");
}
