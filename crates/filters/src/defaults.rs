//! Built-in sub-patterns for each filter group.
//!
//! Every pattern is anchored at the start of the line and is evaluated on the
//! line with its terminator removed. Optional `[role] ` prefixes cover the
//! `[sender]` / `[receiver]` / `[generator]` tags rsync adds at `-vv`.

/// Lines with no classification value.
pub const DEFAULT_JUNK_PATTERNS: &[&str] = &[
    r"^\s*$",
    r"^sending incremental file list",
    r"^receiving incremental file list",
    r"^building file list",
    r"^total[: ]",
    r"^wrote ",
    r"^sent ",
    r"^done$",
    r"^excluding ",
    r"^(?:\[\w+\] )?hiding ",
    r"^delta-transmission (?:enabled|disabled)",
    r"^deleting in ",
    r"^(?:\[\w+\] )?heap statistics:",
    r"^\s+(?:arena|ordblks|smblks|hblks|hblkhd|allmem|usmblks|fsmblks|uordblks|fordblks|keepcost):",
];

/// Generator notices about filter-excluded or protected paths.
pub const DEFAULT_EXCLUDED_PATTERNS: &[&str] =
    &[r"^\[generator\] (?:excluding|protecting) (?:directory|file) .+ because of pattern .+"];

/// Warnings and errors reported during the run.
pub const DEFAULT_WARN_ERR_PATTERNS: &[&str] = &[
    r"^(?:WARNING|ERROR): .+ failed verification",
    r"^IO error encountered -- skipping file deletion",
    r"^file has vanished: ",
    r"^rsync error: ",
    r"^rsync warning: ",
    r"^cannot delete non-empty directory: ",
];

/// Labels of the `--stats` summary lines, matched verbatim.
pub const DEFAULT_STATS_LABELS: &[&str] = &[
    "Number of files",
    "Number of files transferred",
    "Total file size",
    "Total transferred file size",
    "Literal data",
    "Matched data",
    "File list size",
    "File list generation time",
    "File list transfer time",
    "Total bytes sent",
    "Total bytes received",
];
