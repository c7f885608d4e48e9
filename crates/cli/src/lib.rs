#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end of `rsync-sieve`. Two
//! subcommands are recognised:
//!
//! - `classify [FILE]` reads a captured rsync report (standard input when
//!   `FILE` is absent or `-`) and prints the classification.
//! - `run [--rsync PROGRAM] [--cwd DIR] -- ARGS...` spawns rsync with `ARGS`
//!   passed through verbatim and classifies its output as it arrives.
//!
//! Global options: `--config FILE` (JSON [`engine::SieveConfig`]), `--json`,
//! `-v`/`--verbose` (repeatable) and `-q`/`--quiet`.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error and returns the process exit code, so the binary
//! is a thin wrapper and tests can drive the whole front-end in memory. A
//! [`clap`](https://docs.rs/clap/) builder definition performs the parse;
//! help and version requests are rendered to standard output.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as diagnostics on `stderr` and a
//!   non-zero exit code.
//! - A report is printed for every run that produced one, including runs whose
//!   child exited non-zero and runs interrupted by a stream failure.
//!
//! # Errors
//!
//! Usage, configuration and I/O failures exit with `1`. For `run`, a non-zero
//! child exit code is passed through unchanged.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["rsync-sieve", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("rsync-sieve "));
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, Write};

use clap::error::ErrorKind;

use engine::{ClassificationReport, LineClassifier, SieveConfig, run_and_classify};
use logging::{Subsystem, VerbosityConfig};

mod arguments;
mod error;
mod render;

use arguments::{Action, GlobalArgs, PROGRAM_NAME, parse_args};
use render::{Format, write_report};

pub use error::CliError;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Returns the process exit code that should be used by the caller.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => return report_clap_error(&error, stdout, stderr),
    };

    init_logging(&parsed.global);

    match execute(&parsed.global, parsed.action, stdout, stderr) {
        Ok(code) => code,
        Err(error) => {
            tracing::debug!(target: Subsystem::Run.target(), ?error, "command failed");
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            1
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

fn report_clap_error<Out: Write, Err: Write>(
    error: &clap::Error,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32 {
    let rendered = error.render().to_string();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if stdout.write_all(rendered.as_bytes()).is_err() {
                return 1;
            }
            0
        }
        _ => {
            let _ = stderr.write_all(rendered.as_bytes());
            1
        }
    }
}

fn init_logging(global: &GlobalArgs) {
    let verbosity = if global.quiet {
        VerbosityConfig::quiet()
    } else {
        VerbosityConfig::from_verbose_level(global.verbose)
    };
    // A subscriber may already be installed when embedded or under test.
    let _ = logging::init_tracing(&verbosity);
}

fn execute<Out: Write, Err: Write>(
    global: &GlobalArgs,
    action: Action,
    stdout: &mut Out,
    stderr: &mut Err,
) -> Result<i32, CliError> {
    let format = if global.json {
        if !cfg!(feature = "json") {
            return Err(CliError::JsonUnavailable);
        }
        Format::Json
    } else {
        Format::Text
    };

    let config = match &global.config {
        Some(path) => SieveConfig::from_path(path)?,
        None => SieveConfig::default(),
    };
    let classifier = config.classifier()?;

    match action {
        Action::Classify { input } => {
            let report = match input {
                Some(path) => {
                    let file = File::open(&path).map_err(|source| CliError::Open {
                        path: path.clone(),
                        source,
                    })?;
                    classify_stream(&classifier, BufReader::new(file), stdout, format)?
                }
                None => classify_stream(&classifier, io::stdin().lock(), stdout, format)?,
            };
            tracing::debug!(
                target: Subsystem::Run.target(),
                lines = report.total_lines(),
                "classification finished"
            );
            Ok(0)
        }
        Action::Run { rsync, cwd, args } => {
            let mut config = config;
            if rsync.is_some() {
                config.rsync = rsync;
            }
            if cwd.is_some() {
                config.base_dir = cwd;
            }
            let invocation = config.invocation(args);

            match run_and_classify(&invocation, &classifier) {
                Ok(outcome) => {
                    write_report(stdout, &outcome.report, format)?;
                    if !outcome.success() {
                        let _ = writeln!(
                            stderr,
                            "{PROGRAM_NAME}: {} exited with code {}",
                            invocation.program().display(),
                            outcome.exit_code
                        );
                    }
                    Ok(outcome.exit_code)
                }
                Err(error) => {
                    if let Some(partial) = error.partial_report() {
                        write_report(stdout, partial, format)?;
                    }
                    Err(CliError::Run(error))
                }
            }
        }
    }
}

/// Classifies `reader` and prints the report, including a partial one when
/// the input fails midway.
fn classify_stream<R: io::BufRead, Out: Write>(
    classifier: &LineClassifier,
    reader: R,
    stdout: &mut Out,
    format: Format,
) -> Result<ClassificationReport, CliError> {
    match classifier.classify_reader(reader) {
        Ok(report) => {
            write_report(stdout, &report, format)?;
            Ok(report)
        }
        Err(error) => {
            write_report(stdout, &error.partial, format)?;
            Err(CliError::Stream(error))
        }
    }
}

#[cfg(test)]
mod tests;
