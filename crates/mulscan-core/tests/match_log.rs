//! The optional match log written during configured runs.

use mulscan_core::{AppendFileSink, Solver, part_two};
use mulscan_test_utils::tracing_setup::init_test_tracing;
use mulscan_test_utils::{TempInput, TestConfigBuilder};
use pretty_assertions::assert_eq;

const INPUT: &str = "mul(2,4)don't()mul(5,5)\ndo()mul(8,5)mul(1, 2)\n";

#[test]
fn test_log_disabled_writes_nothing() {
    init_test_tracing();
    let input = TempInput::with_content(INPUT);
    Solver::new(input.config()).run().unwrap();
    assert!(!input.log_path().exists());
}

#[test]
fn test_log_contains_counted_literals_in_order() {
    init_test_tracing();
    let input = TempInput::with_content(INPUT);
    let report = Solver::new(input.config_with_log()).run().unwrap();
    assert_eq!(report.part_two, 48);
    assert_eq!(input.read_log(), vec!["mul(2,4)", "mul(8,5)"]);
}

#[test]
fn test_log_appends_across_runs() {
    init_test_tracing();
    let input = TempInput::with_content(INPUT);
    let solver = Solver::new(input.config_with_log());
    let first = solver.run().unwrap();
    let second = solver.run().unwrap();

    assert_eq!(first, second);
    assert_eq!(
        input.read_log(),
        vec!["mul(2,4)", "mul(8,5)", "mul(2,4)", "mul(8,5)"]
    );
}

#[test]
fn test_log_does_not_change_result() {
    let input = TempInput::with_content(INPUT);
    let quiet = Solver::new(input.config()).run().unwrap();
    let logged = Solver::new(input.config_with_log()).run().unwrap();
    assert_eq!(quiet, logged);
}

#[test]
fn test_existing_log_content_is_preserved() {
    let input = TempInput::with_content("mul(3,3)");
    std::fs::write(input.log_path(), "previous\n").unwrap();

    let mut sink = AppendFileSink::open(input.log_path()).unwrap();
    assert_eq!(part_two(input.path(), &mut sink).unwrap(), 9);
    assert_eq!(sink.finish().unwrap(), 1);

    assert_eq!(input.read_log(), vec!["previous", "mul(3,3)"]);
}

#[test]
fn test_missing_input_leaves_no_log_file() {
    let input = TempInput::with_content("");
    let config = TestConfigBuilder::new()
        .input_path(input.path().with_file_name("absent.txt"))
        .match_log(input.log_path())
        .build();

    assert!(Solver::new(config).run().is_err());
    assert!(!input.log_path().exists());
}

#[test]
fn test_log_directory_missing_fails_run() {
    let input = TempInput::with_content(INPUT);
    let config = TestConfigBuilder::new()
        .input_path(input.path())
        .match_log(input.log_path().join("nested").join("log.txt"))
        .log_level("debug")
        .build();
    assert!(Solver::new(config).run().is_err());
}
