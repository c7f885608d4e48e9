use std::ffi::OsString;
use std::fs;

use super::arguments::{Action, parse_args};
use super::*;

fn run_with(args: &[&str]) -> (i32, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run(args.iter().copied(), &mut stdout, &mut stderr);
    (
        code,
        String::from_utf8(stdout).unwrap(),
        String::from_utf8(stderr).unwrap(),
    )
}

// ============================================================================
// Argument parsing
// ============================================================================

#[test]
fn classify_without_file_reads_stdin() {
    let parsed = parse_args(["rsync-sieve", "classify"]).unwrap();
    assert_eq!(parsed.action, Action::Classify { input: None });

    let parsed = parse_args(["rsync-sieve", "classify", "-"]).unwrap();
    assert_eq!(parsed.action, Action::Classify { input: None });
}

#[test]
fn global_options_are_accepted_after_the_subcommand() {
    let parsed = parse_args(["rsync-sieve", "classify", "--json", "-vv", "report.txt"]).unwrap();
    assert!(parsed.global.json);
    assert_eq!(parsed.global.verbose, 2);
    assert_eq!(
        parsed.action,
        Action::Classify {
            input: Some("report.txt".into())
        }
    );
}

#[test]
fn run_passes_arguments_after_separator_verbatim() {
    let parsed = parse_args([
        "rsync-sieve",
        "--config",
        "sieve.json",
        "run",
        "--rsync",
        "/opt/bin/rsync",
        "--",
        "-a",
        "-vv",
        "-i",
        "--delete",
        "src/",
        "dst/",
    ])
    .unwrap();

    assert_eq!(parsed.global.config, Some("sieve.json".into()));
    let Action::Run { rsync, cwd, args } = parsed.action else {
        panic!("expected run action");
    };
    assert_eq!(rsync, Some("/opt/bin/rsync".into()));
    assert_eq!(cwd, None);
    let expected: Vec<OsString> = ["-a", "-vv", "-i", "--delete", "src/", "dst/"]
        .into_iter()
        .map(OsString::from)
        .collect();
    assert_eq!(args, expected);
}

#[test]
fn quiet_overrides_verbose() {
    let parsed = parse_args(["rsync-sieve", "-v", "-q", "classify"]).unwrap();
    assert!(parsed.global.quiet);
    assert_eq!(parsed.global.verbose, 0);
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let (code, stdout, stderr) = run_with(&["rsync-sieve"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(!stderr.is_empty());
}

// ============================================================================
// Execution
// ============================================================================

#[test]
fn help_goes_to_stdout() {
    let (code, stdout, stderr) = run_with(&["rsync-sieve", "--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("classify"));
    assert!(stdout.contains("run"));
    assert!(stderr.is_empty());
}

#[test]
fn classify_file_renders_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    fs::write(
        &path,
        "sending incremental file list\n>f+++++++++ newfile.txt\n*deleting   oldfile.txt\nNumber of files: 120\n",
    )
    .unwrap();

    let (code, stdout, stderr) =
        run_with(&["rsync-sieve", "-q", "classify", path.to_str().unwrap()]);
    assert_eq!(code, 0, "{stderr}");
    assert!(stdout.contains("created (1)\n  >f+++++++++ newfile.txt\n"));
    assert!(stdout.contains("deleted (1)\n  *deleting   oldfile.txt\n"));
    assert!(stdout.contains("stats (1)\n  Number of files: 120\n"));
    assert!(stdout.contains("dropped: 1 junk, 0 warning/error"));
}

#[test]
fn missing_input_file_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");
    let (code, stdout, stderr) =
        run_with(&["rsync-sieve", "-q", "classify", missing.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("rsync-sieve: failed to open "));
}

#[test]
fn invalid_config_pattern_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("sieve.json");
    fs::write(&config, r#"{ "patterns": { "junk": ["[broken"] } }"#).unwrap();
    let input = dir.path().join("report.txt");
    fs::write(&input, "").unwrap();

    let (code, _, stderr) = run_with(&[
        "rsync-sieve",
        "-q",
        "--config",
        config.to_str().unwrap(),
        "classify",
        input.to_str().unwrap(),
    ]);
    assert_eq!(code, 1);
    assert!(stderr.contains("[broken"));
}

#[cfg(unix)]
#[test]
fn run_passes_through_child_exit_code() {
    let (code, stdout, stderr) = run_with(&[
        "rsync-sieve",
        "-q",
        "run",
        "--rsync",
        "sh",
        "--",
        "-c",
        "printf '>f+++++++++ a\\n'; exit 24",
    ]);
    assert_eq!(code, 24);
    assert!(stdout.contains("created (1)\n  >f+++++++++ a\n"));
    assert!(stderr.contains("exited with code 24"));
}

#[test]
fn run_with_missing_program_exits_with_one() {
    let (code, _, stderr) = run_with(&[
        "rsync-sieve",
        "-q",
        "run",
        "--rsync",
        "/nonexistent/rsync-sieve-missing",
    ]);
    assert_eq!(code, 1);
    assert!(stderr.contains("failed to spawn /nonexistent/rsync-sieve-missing"));
}

#[test]
fn exit_codes_are_clamped() {
    assert_eq!(exit_code_from(-3), std::process::ExitCode::from(0));
    assert_eq!(exit_code_from(300), std::process::ExitCode::from(255));
    assert_eq!(exit_code_from(23), std::process::ExitCode::from(23));
}
