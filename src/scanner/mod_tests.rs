use std::path::Path;

use super::*;
use tempfile::TempDir;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

fn lint_filter() -> LintFilter {
    LintFilter::new(&[]).unwrap()
}

fn names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn finds_direct_children_in_sorted_order() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("b.cpp"), "").unwrap();
    std::fs::write(temp_dir.path().join("a.h"), "").unwrap();
    std::fs::write(temp_dir.path().join("notes.md"), "").unwrap();

    let scanner = DirectoryScanner::new(lint_filter(), false);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(names(&files), vec!["a.h", "b.cpp"]);
}

#[test]
fn non_recursive_skips_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    let sub_dir = temp_dir.path().join("src");
    std::fs::create_dir(&sub_dir).unwrap();
    std::fs::write(sub_dir.join("main.c"), "").unwrap();
    std::fs::write(temp_dir.path().join("top.c"), "").unwrap();

    let flat = DirectoryScanner::new(lint_filter(), false)
        .scan(temp_dir.path())
        .unwrap();
    assert_eq!(names(&flat), vec!["top.c"]);

    let deep = DirectoryScanner::new(lint_filter(), true)
        .scan(temp_dir.path())
        .unwrap();
    assert_eq!(deep.len(), 2);
}

#[test]
fn nolint_directory_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let vendored = temp_dir.path().join("vendor");
    std::fs::create_dir_all(vendored.join("deep")).unwrap();
    std::fs::write(vendored.join(NOLINT_FILE), "").unwrap();
    std::fs::write(vendored.join("x.c"), "").unwrap();
    std::fs::write(vendored.join("deep").join("y.c"), "").unwrap();
    std::fs::write(temp_dir.path().join("own.c"), "").unwrap();

    let files = DirectoryScanner::new(lint_filter(), true)
        .scan(temp_dir.path())
        .unwrap();
    assert_eq!(names(&files), vec!["own.c"]);
}

#[test]
fn git_directory_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join(".git")).unwrap();
    std::fs::write(temp_dir.path().join(".git").join("hook.c"), "").unwrap();

    let files = DirectoryScanner::new(AcceptAllFilter, true)
        .scan(temp_dir.path())
        .unwrap();
    assert!(files.is_empty());
}

#[test]
fn file_argument_is_taken_as_is() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("one.cc");
    std::fs::write(&file, "").unwrap();
    let other = temp_dir.path().join("one.txt");
    std::fs::write(&other, "").unwrap();

    let scanner = DirectoryScanner::new(lint_filter(), false);
    assert_eq!(scanner.scan(&file).unwrap(), vec![file.clone()]);
    assert!(scanner.scan(&other).unwrap().is_empty());
}

#[test]
fn missing_path_yields_nothing() {
    let scanner = DirectoryScanner::new(lint_filter(), false);
    let files = scanner.scan(Path::new("/definitely/not/here")).unwrap();
    assert!(files.is_empty());
}

#[test]
fn collect_files_keeps_argument_order() {
    let temp_dir = TempDir::new().unwrap();
    let z = temp_dir.path().join("z.c");
    let a = temp_dir.path().join("a.c");
    std::fs::write(&z, "").unwrap();
    std::fs::write(&a, "").unwrap();

    let scanner = DirectoryScanner::new(lint_filter(), false);
    let files = collect_files(&scanner, &[z.clone(), a.clone()]).unwrap();
    assert_eq!(files, vec![z, a]);
}
