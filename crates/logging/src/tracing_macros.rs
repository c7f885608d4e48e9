//! crates/logging/src/tracing_macros.rs
//! Convenience macros emitting under the workspace's subsystem targets.

/// Emit a filter-group trace.
///
/// # Example
/// ```ignore
/// trace_filter!(group = %group, "line matched");
/// ```
#[macro_export]
macro_rules! trace_filter {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::Subsystem::Filter.target(), $($arg)*);
    };
}

/// Emit an itemized-classification trace.
///
/// # Example
/// ```ignore
/// trace_item!(category = %category, "classified {}", path);
/// ```
#[macro_export]
macro_rules! trace_item {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: $crate::Subsystem::Itemize.target(), $($arg)*);
    };
}

/// Emit a statistics trace.
///
/// # Example
/// ```ignore
/// trace_stats!("recorded {} = {}", label, value);
/// ```
#[macro_export]
macro_rules! trace_stats {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::Subsystem::Stats.target(), $($arg)*);
    };
}

/// Emit a process-execution trace.
///
/// # Example
/// ```ignore
/// trace_run!("spawned {}", program);
/// ```
#[macro_export]
macro_rules! trace_run {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::Subsystem::Run.target(), $($arg)*);
    };
}
