//! Text and JSON rendering of a [`ClassificationReport`].
//!
//! The text form lists every bucket with its count followed by its lines
//! (terminators removed, indented by two spaces), then the statistics and
//! the dropped-line counters:
//!
//! ```text
//! created (1)
//!   >f+++++++++ newfile.txt
//! deleted (0)
//! ...
//! stats (1)
//!   Number of files: 120
//! dropped: 2 junk, 0 warning/error
//! ```

use std::fmt::Write as _;
use std::io::Write;

use engine::ClassificationReport;

use crate::CliError;

/// Output format selected on the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Format {
    #[default]
    Text,
    Json,
}

/// Renders `report` in the requested format and writes it to `out`.
pub(crate) fn write_report<W: Write>(
    out: &mut W,
    report: &ClassificationReport,
    format: Format,
) -> Result<(), CliError> {
    let rendered = match format {
        Format::Text => render_text(report),
        Format::Json => render_json(report)?,
    };
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Human-readable rendering.
pub(crate) fn render_text(report: &ClassificationReport) -> String {
    let mut text = String::new();
    for (bucket, lines) in report.iter() {
        let _ = writeln!(text, "{bucket} ({})", lines.len());
        for line in lines {
            let _ = writeln!(text, "  {}", line.trim_end_matches(['\n', '\r']));
        }
    }

    let _ = writeln!(text, "stats ({})", report.stats().len());
    for (label, value) in report.stats().iter() {
        let _ = writeln!(text, "  {label}: {value}");
    }

    let dropped = report.dropped();
    let _ = writeln!(
        text,
        "dropped: {} junk, {} warning/error",
        dropped.junk, dropped.warn_err
    );
    text
}

#[cfg(feature = "json")]
fn render_json(report: &ClassificationReport) -> Result<String, CliError> {
    let mut json = serde_json::to_string_pretty(report)
        .map_err(|error| CliError::Output(std::io::Error::other(error)))?;
    json.push('\n');
    Ok(json)
}

#[cfg(not(feature = "json"))]
fn render_json(_report: &ClassificationReport) -> Result<String, CliError> {
    Err(CliError::JsonUnavailable)
}
