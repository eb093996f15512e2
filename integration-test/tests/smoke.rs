use std::io::Write;

use test_driver::{field, run_demo, DemoRun};

fn demo_binary() -> &'static str {
    env!("CARGO_BIN_EXE_demo")
}

fn demo(args: &[&str]) -> DemoRun {
    run_demo(demo_binary(), args, None)
}

fn demo_with_config(args: &[&str], config: &str) -> (DemoRun, tempfile::NamedTempFile) {
    let mut file = tempfile::NamedTempFile::new().expect("creating config file");
    write!(file, "{}", config).expect("writing config file");
    let run = run_demo(demo_binary(), args, Some(file.path()));
    (run, file)
}

#[test]
fn no_input_reports_everything_unset() {
    let run = demo(&[]);
    assert!(run.status.success());
    assert_eq!(field(&run.stdout, "width"), Some("<unset>"));
    assert_eq!(field(&run.stdout, "title"), Some("<unset>"));
    assert_eq!(field(&run.stdout, "verbose"), Some("false"));
    assert_eq!(field(&run.stdout, "noimages"), Some("false"));
}

#[test]
fn long_option_with_equals() {
    let run = demo(&["--width=100"]);
    assert!(run.status.success());
    assert_eq!(field(&run.stdout, "width"), Some("100"));
}

#[test]
fn short_option_resolves_through_shared_slot() {
    // -w writes the same slot the report reads back by long name.
    let run = demo(&["-w", "100"]);
    assert_eq!(field(&run.stdout, "width"), Some("100"));
}

#[test]
fn flags_and_positionals() {
    let run = demo(&["foo", "-v", "bar"]);
    assert_eq!(field(&run.stdout, "verbose"), Some("true"));
    assert_eq!(field(&run.stdout, "arg0"), Some("foo"));
    assert_eq!(field(&run.stdout, "arg1"), Some("bar"));
}

#[test]
fn config_file_pairs_and_flags() {
    let (run, _file) = demo_with_config(&[], "# defaults\nwidth : 640\nnoimages\n");
    assert_eq!(field(&run.stdout, "config"), Some("true"));
    assert_eq!(field(&run.stdout, "width"), Some("640"));
    assert_eq!(field(&run.stdout, "noimages"), Some("true"));
}

#[test]
fn missing_config_file_is_soft_failure() {
    let run = run_demo(
        demo_binary(),
        &[],
        Some(std::path::Path::new("/no/such/demo.conf")),
    );
    assert!(run.status.success());
    assert_eq!(field(&run.stdout, "config"), Some("false"));
    assert_eq!(field(&run.stdout, "width"), Some("<unset>"));
}

#[test]
fn command_line_overrides_config_file() {
    // The demo resolves the file first, then argv: last writer wins.
    let (run, _file) = demo_with_config(&["--width=100"], "width : 640\n");
    assert_eq!(field(&run.stdout, "width"), Some("100"));
}

#[test]
fn roles_partition_the_sources() {
    // title is command-only, cache is file-only.
    let (run, _file) = demo_with_config(&["--cache=/tmp/c"], "title : from-file\n");
    assert_eq!(field(&run.stdout, "title"), Some("<unset>"));
    assert_eq!(field(&run.stdout, "cache"), Some("<unset>"));

    let (run, _file) = demo_with_config(&["--title=from-argv"], "cache : /tmp/c\n");
    assert_eq!(field(&run.stdout, "title"), Some("from-argv"));
    assert_eq!(field(&run.stdout, "cache"), Some("/tmp/c"));
}

#[test]
fn unknown_option_diagnostic_reaches_stderr() {
    let run = demo(&["--bogus"]);
    assert!(run.status.success());
    assert!(
        run.stderr.contains("unknown command argument option"),
        "stderr was: {}",
        run.stderr
    );
}
