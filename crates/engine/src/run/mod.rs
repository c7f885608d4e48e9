//! Spawning rsync and classifying its output as it arrives.
//!
//! The child's stdout and stderr are drained by one reader thread each. The
//! threads forward complete lines over a channel and the calling thread, the
//! sole owner of the [`ReportBuilder`], classifies them in arrival order.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc;

#[cfg(unix)]
use std::os::unix::process::ExitStatusExt;

use crate::{ClassificationReport, LineClassifier, ReportBuilder, RunError};

mod reader;

pub use reader::StreamKind;
use reader::{StreamMessage, join_reader, spawn_line_reader, terminate_child};

/// Largest exit code reported for a child.
pub const MAX_EXIT_CODE: i32 = 255;

/// Program, arguments and working directory of one run.
///
/// Arguments are passed through verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl Invocation {
    /// Invocation of `program` without arguments.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Appends one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Runs the child in `dir`.
    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Program to spawn.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments in order.
    #[must_use]
    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    /// Working directory, when set.
    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

/// Result of a completed run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunOutcome {
    /// Classified output of the child.
    pub report: ClassificationReport,
    /// Exit code of the child; `128 + signal` when it was killed.
    pub exit_code: i32,
}

impl RunOutcome {
    /// `true` when the child exited with status zero.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Spawns `invocation`, classifies its merged output and waits for it.
///
/// A non-zero exit is reported in [`RunOutcome::exit_code`], not as an error.
///
/// # Errors
///
/// - [`RunError::Spawn`] when the program cannot be started.
/// - [`RunError::Stream`] when reading an output stream fails; the child is
///   killed and the lines seen so far are returned with the error.
/// - [`RunError::Wait`] when the exit status cannot be collected.
pub fn run_and_classify(
    invocation: &Invocation,
    classifier: &LineClassifier,
) -> Result<RunOutcome, RunError> {
    let mut child = invocation
        .command()
        .spawn()
        .map_err(|source| RunError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;
    logging::trace_run!(
        program = %invocation.program.display(),
        pid = child.id(),
        "spawned child"
    );

    let (sender, receiver) = mpsc::channel();
    let mut stdout_thread = child
        .stdout
        .take()
        .map(|handle| spawn_line_reader(handle, StreamKind::Stdout, sender.clone()));
    let mut stderr_thread = child
        .stderr
        .take()
        .map(|handle| spawn_line_reader(handle, StreamKind::Stderr, sender.clone()));
    drop(sender);

    let mut builder = ReportBuilder::new();
    let mut stdout_open = stdout_thread.is_some();
    let mut stderr_open = stderr_thread.is_some();

    while stdout_open || stderr_open {
        match receiver.recv() {
            Ok(StreamMessage::Line(kind, line)) => {
                tracing::trace!(
                    target: logging::Subsystem::Run.target(),
                    stream = %kind,
                    line = filters::strip_line_terminator(&line),
                    "received line"
                );
                classifier.feed(&mut builder, &line);
            }
            Ok(StreamMessage::Error(kind, source)) => {
                terminate_child(&mut child, &mut stdout_thread, &mut stderr_thread);
                return Err(RunError::Stream {
                    kind,
                    source,
                    partial: Box::new(builder.finish()),
                });
            }
            Ok(StreamMessage::Finished(StreamKind::Stdout)) => stdout_open = false,
            Ok(StreamMessage::Finished(StreamKind::Stderr)) => stderr_open = false,
            // Every sender is gone, so both readers have exited.
            Err(_) => break,
        }
    }

    join_reader(&mut stdout_thread);
    join_reader(&mut stderr_thread);

    let status = child.wait().map_err(|source| RunError::Wait { source })?;
    let exit_code = exit_code_of(status);
    logging::trace_run!(exit_code, "child exited");

    Ok(RunOutcome {
        report: builder.finish(),
        exit_code,
    })
}

fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        if let Some(signal) = status.signal() {
            return (128 + signal).min(MAX_EXIT_CODE);
        }
    }
    MAX_EXIT_CODE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_builder_keeps_arguments_verbatim() {
        let invocation = Invocation::new("rsync")
            .arg("-a")
            .args(["--exclude", "*.tmp"])
            .current_dir("/srv");
        assert_eq!(invocation.program(), Path::new("rsync"));
        assert_eq!(invocation.arguments(), ["-a", "--exclude", "*.tmp"]);
        assert_eq!(invocation.working_dir(), Some(Path::new("/srv")));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let invocation = Invocation::new("/nonexistent/rsync-sieve-test-binary");
        let err = run_and_classify(&invocation, &LineClassifier::default()).unwrap_err();
        assert!(matches!(err, RunError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn signal_exit_maps_above_128() {
        assert_eq!(exit_code_of(ExitStatus::from_raw(9)), 137);
        assert_eq!(exit_code_of(ExitStatus::from_raw(3 << 8)), 3);
    }
}
