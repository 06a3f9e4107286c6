/// Integration tests for bench-delta
///
/// These tests drive the compiled binary against a fixture statistics file
/// and verify the rendered reports and exit codes.
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir).join("test-data/statistics.csv")
}

fn run_bench_delta(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bench-delta"))
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run bench-delta {}: {}", args.join(" "), e))
}

#[test]
fn test_compare_reports_all_change_kinds() {
    let fixture = fixture();
    let output = run_bench_delta(&["compare", fixture.to_str().unwrap(), "confA", "confB"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("- Status Changes: 2 (conflicts: 1, positive: 1)"), "summary missing:\n{}", stdout);
    assert!(stdout.contains("- Runtime Changes: 1 (positive: 0)"), "summary missing:\n{}", stdout);
    assert!(stdout.contains("- Missing Instances: 1"), "summary missing:\n{}", stdout);

    assert!(stdout.contains("UNSATISFIABLE -> SATISFIED:"), "conflicting transition missing:\n{}", stdout);
    assert!(stdout.contains("UNKNOWN -> OPTIMAL_SOLUTION:"), "positive transition missing:\n{}", stdout);
    assert!(
        stdout.contains("- (50.0%: 10.0s -> 15.0s) queens.mzn data/queens/q8.dzn"),
        "timing detail missing:\n{}",
        stdout
    );
    assert!(stdout.contains("- golomb.mzn data/golomb/g9.dzn"), "missing instance detail missing:\n{}", stdout);

    // Conflicting feasibility results make the run fail.
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_compare_configuration_with_itself_is_quiet() {
    let fixture = fixture();
    let output = run_bench_delta(&["compare", fixture.to_str().unwrap(), "confA", "confA"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("- Status Changes: 0 (positive: 0)"), "unexpected changes:\n{}", stdout);
    assert!(!stdout.contains("Missing Instances:"), "self-comparison reported missing instances:\n{}", stdout);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_compare_json_output() {
    let fixture = fixture();
    let output = run_bench_delta(&["compare", fixture.to_str().unwrap(), "confA", "confB", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let report: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(report["from"], "confA");
    assert_eq!(report["summary"]["conflicting"], 1);
    assert_eq!(report["summary"]["missing_instances"], 1);
    assert_eq!(report["time_changes"][0]["from_time"], 10.0);
}

#[test]
fn test_status_table_with_average() {
    let fixture = fixture();
    let output =
        run_bench_delta(&["status", fixture.to_str().unwrap(), "--avg", "time", "--format", "pipe"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let header = stdout.lines().next().expect("table should have a header");

    assert!(header.starts_with("| configuration"), "unexpected header: {}", header);

    // Status columns in descending lexicographic order.
    let unsat = header.find("UNSATISFIABLE").expect("UNSATISFIABLE column");
    let unknown = header.find("UNKNOWN").expect("UNKNOWN column");
    let satisfied = header.find("SATISFIED").expect("SATISFIED column");
    let optimal = header.find("OPTIMAL_SOLUTION").expect("OPTIMAL_SOLUTION column");
    assert!(unsat < unknown && unknown < satisfied && satisfied < optimal);

    // confA has two SATISFIED runs at 10s and 55s.
    assert!(stdout.contains("2 (32.50s)"), "averaged cell missing:\n{}", stdout);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_unknown_table_format_fails() {
    let fixture = fixture();
    let output = run_bench_delta(&["status", fixture.to_str().unwrap(), "--format", "fancy"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("unknown table format 'fancy'"), "error message missing:\n{}", stdout);
}

#[test]
fn test_missing_statistics_file_fails() {
    let output = run_bench_delta(&["compare", "/no/such/statistics.csv", "confA", "confB"]);
    assert_eq!(output.status.code(), Some(1));
}
