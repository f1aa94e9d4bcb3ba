use std::fs;
use std::path::Path;

use chart_core::model::generate_lines;
use chart_core::{Backend, BaseNumber, ChartError, ChartRepo, ChartService, OpenParams, open_repo};
use tempfile::TempDir;

fn repo_at(dir: &Path) -> Box<dyn ChartRepo> {
    open_repo(
        Backend::Fs,
        OpenParams {
            dir: dir.to_path_buf(),
        },
    )
    .unwrap()
}

fn base(n: i64) -> BaseNumber {
    BaseNumber::new(n).unwrap()
}

#[test]
fn save_then_read_returns_original_lines() {
    let tmp = TempDir::new().unwrap();
    let repo = repo_at(tmp.path());
    for n in 1..=10 {
        let chart = generate_lines(base(n));
        repo.save(base(n), &chart).unwrap();
        assert_eq!(repo.read(base(n)).unwrap(), chart.into_lines());
    }
}

#[test]
fn second_save_is_rejected_and_leaves_file_untouched() {
    let tmp = TempDir::new().unwrap();
    let repo = repo_at(tmp.path());
    let path = repo.path_for(base(8));

    repo.save(base(8), &generate_lines(base(8))).unwrap();
    let first = fs::read(&path).unwrap();

    let err = repo.save(base(8), &generate_lines(base(8))).unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(err.to_string(), format!("File already exists {}", path.display()));
    assert_eq!(fs::read(&path).unwrap(), first);
}

#[test]
fn save_under_a_file_reports_io_error() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let repo = repo_at(&blocker.join("sub"));

    let err = repo.save(base(2), &generate_lines(base(2))).unwrap_err();
    assert!(matches!(err, ChartError::Io(_)), "{err:?}");
    assert!(!repo.exists(base(2)));
    assert_eq!(fs::read(&blocker).unwrap(), b"");
}

#[test]
fn delete_reports_whether_a_file_was_removed() {
    let tmp = TempDir::new().unwrap();
    let repo = repo_at(tmp.path());

    assert!(!repo.delete(base(3)));
    repo.save(base(3), &generate_lines(base(3))).unwrap();
    assert!(repo.exists(base(3)));
    assert!(repo.delete(base(3)));
    assert!(!repo.exists(base(3)));
    assert!(repo.read(base(3)).unwrap().is_empty());

    // a fresh save is allowed once the file is gone
    repo.save(base(3), &generate_lines(base(3))).unwrap();
}

#[test]
fn out_of_range_service_calls_leave_directory_absent() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("charts");
    let svc = ChartService::new(repo_at(&dir));

    assert!(!svc.generate_chart(0).unwrap());
    assert!(!svc.generate_chart(11).unwrap());
    assert!(svc.read_chart(-5).unwrap().is_empty());
    assert!(svc.read_chart_line(3, 11).unwrap().is_none());
    assert!(!dir.exists());
}

#[test]
fn base_three_scenario() {
    let tmp = TempDir::new().unwrap();
    let svc = ChartService::new(repo_at(tmp.path()));

    assert!(svc.generate_chart(3).unwrap());
    let expected: Vec<String> = (1..=10).map(|k| format!("3 * {k} = {}", 3 * k)).collect();
    assert_eq!(svc.read_chart(3).unwrap(), expected);
    assert_eq!(svc.read_chart_line(3, 4).unwrap().as_deref(), Some("3 * 4 = 12"));
    assert_eq!(svc.read_chart_line(3, 11).unwrap(), None);
    assert!(tmp.path().join("chart-3.txt").is_file());
}

#[test]
fn chart_serializes_with_base_and_lines() {
    let chart = generate_lines(base(1));
    let v = serde_json::to_value(&chart).unwrap();
    assert_eq!(v["base"], 1);
    assert_eq!(v["lines"][9], "1 * 10 = 10");
}
