use std::fmt;
use std::io::{self, BufRead, BufReader, Read};
use std::process::Child;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

/// Output stream of the child process.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum StreamKind {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

impl StreamKind {
    const fn name(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(super) enum StreamMessage {
    Line(StreamKind, String),
    Error(StreamKind, io::Error),
    Finished(StreamKind),
}

/// Forwards whole lines of `handle` until end of stream or the first error.
pub(super) fn spawn_line_reader<R>(
    handle: R,
    kind: StreamKind,
    sender: Sender<StreamMessage>,
) -> JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(handle);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    let _ = sender.send(StreamMessage::Finished(kind));
                    break;
                }
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf).into_owned();
                    if sender.send(StreamMessage::Line(kind, line)).is_err() {
                        break;
                    }
                }
                Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
                Err(error) => {
                    let _ = sender.send(StreamMessage::Error(kind, error));
                    break;
                }
            }
        }
    })
}

pub(super) fn join_reader(handle: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = handle.take() {
        let _ = handle.join();
    }
}

/// Stops the child and reaps both readers.
pub(super) fn terminate_child(
    child: &mut Child,
    stdout_thread: &mut Option<JoinHandle<()>>,
    stderr_thread: &mut Option<JoinHandle<()>>,
) {
    let _ = child.kill();
    let _ = child.wait();
    join_reader(stdout_thread);
    join_reader(stderr_thread);
}
