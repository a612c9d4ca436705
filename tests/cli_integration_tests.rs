mod common;

use predicates::prelude::*;

use common::{CLEAN_HEADER, ERROR_AND_ADVICE, PAUSED_ERROR, TestFixture, WARNING_ONLY};

#[test]
fn missing_paths_is_usage_error() {
    let fixture = TestFixture::new();
    flint!(fixture.path()).assert().failure().code(2);
}

#[test]
fn clean_file_exits_success() {
    let fixture = TestFixture::new();
    fixture.create_file("clean.h", CLEAN_HEADER);

    flint!(fixture.path())
        .arg(".")
        .assert()
        .success()
        .stdout("\nLint Summary: 1 file\nErrors: 0 Warnings: 0 Advice: 0\n");
}

#[test]
fn errors_are_reported_and_fail() {
    let fixture = TestFixture::new();
    fixture.create_file("tok.cpp", ERROR_AND_ADVICE);

    flint!(fixture.path())
        .arg("tok.cpp")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "[Error  ] tok.cpp:1: 'strtok' is not thread safe. Consider 'strtok_r'.",
        ))
        .stdout(predicate::str::contains("[Advice ] tok.cpp:2:"))
        .stdout(predicate::str::ends_with(
            "Lint Summary: 1 file\nErrors: 1 Warnings: 0 Advice: 1\n",
        ));
}

#[test]
fn level_zero_hides_warnings_and_advice() {
    let fixture = TestFixture::new();
    fixture.create_file("tok.cpp", ERROR_AND_ADVICE);

    flint!(fixture.path())
        .args(["-l", "0", "tok.cpp"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[Advice ]").not())
        .stdout(predicate::str::ends_with("Errors: 1\n"));
}

#[test]
fn warnings_fail_only_when_shown() {
    let fixture = TestFixture::new();
    fixture.create_file("flag.cpp", WARNING_ONLY);

    flint!(fixture.path())
        .args(["--level", "0", "flag.cpp"])
        .assert()
        .success()
        .stdout("\nLint Summary: 1 file\nErrors: 0\n");

    flint!(fixture.path())
        .args(["--level", "1", "flag.cpp"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[Warning] flag.cpp:1:"));
}

#[test]
fn negative_level_is_clamped() {
    let fixture = TestFixture::new();
    fixture.create_file("flag.cpp", WARNING_ONLY);

    flint!(fixture.path())
        .args(["-l", "-3", "flag.cpp"])
        .assert()
        .success();
}

#[test]
fn paused_region_is_not_checked() {
    let fixture = TestFixture::new();
    fixture.create_file("paused.c", PAUSED_ERROR);

    flint!(fixture.path())
        .arg("paused.c")
        .assert()
        .success()
        .stdout(predicate::str::contains("strtok").not());
}

#[test]
fn cmode_skips_cpp_rules() {
    let fixture = TestFixture::new();
    fixture.create_file("flag.cpp", WARNING_ONLY);

    flint!(fixture.path())
        .args(["-c", "flag.cpp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("volatile").not());
}

#[test]
fn json_output_has_totals_and_filtered_reports() {
    let fixture = TestFixture::new();
    fixture.create_file("tok.cpp", ERROR_AND_ADVICE);

    let output = flint!(fixture.path())
        .args(["-j", "-l", "0", "tok.cpp"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["errors"], 1);
    assert_eq!(json["advice"], 1);
    let file = &json["files"][0];
    assert_eq!(file["path"], "tok.cpp");
    assert_eq!(file["advice"], 1);
    assert_eq!(file["reports"].as_array().unwrap().len(), 1);
    assert_eq!(file["reports"][0]["level"], "Error");
    assert_eq!(file["reports"][0]["line"], 1);
}

#[test]
fn directories_are_flat_unless_recursive() {
    let fixture = TestFixture::new();
    fixture.create_file("top.c", "strtok(a, b);\n");
    fixture.create_file("sub/deep.c", "strtok(a, b);\n");

    flint!(fixture.path())
        .arg(".")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("deep.c").not())
        .stdout(predicate::str::contains("Lint Summary: 1 file\n"));

    flint!(fixture.path())
        .args(["-r", "."])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("deep.c:1:"))
        .stdout(predicate::str::contains("Lint Summary: 2 files\n"));
}

#[test]
fn nolint_directory_is_skipped() {
    let fixture = TestFixture::new();
    fixture.create_file("vendor/.nolint", "");
    fixture.create_file("vendor/lib.c", "strtok(a, b);\n");
    fixture.create_file("own.h", CLEAN_HEADER);

    flint!(fixture.path())
        .args(["-r", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("lib.c").not());
}

#[test]
fn exclude_glob_filters_files() {
    let fixture = TestFixture::new();
    fixture.create_file("gen/out.c", "strtok(a, b);\n");
    fixture.create_file("main.c", "int main(void) { return 0; }\n");

    flint!(fixture.path())
        .args(["-r", "-x", "**/gen/**", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lint Summary: 1 file\n"));
}

#[test]
fn full_paths_keep_directories() {
    let fixture = TestFixture::new();
    fixture.create_file("src/tok.c", "strtok(a, b);\n");

    flint!(fixture.path())
        .args(["--full-paths", "src/tok.c"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[Error  ] src/tok.c:1:"));
}

#[test]
fn missing_path_is_skipped_with_warning() {
    let fixture = TestFixture::new();

    flint!(fixture.path())
        .arg("does-not-exist")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lint Summary: 0 files"))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn invalid_exclude_pattern_is_config_error() {
    let fixture = TestFixture::new();

    flint!(fixture.path())
        .args(["-x", "src/[", "."])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid glob pattern"));
}
