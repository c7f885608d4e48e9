//! crates/logging/src/config.rs
//! Verbosity configuration derived from `-v` / `--quiet` flags.

use tracing::level_filters::LevelFilter;

/// Highest `-v` count with a distinct meaning; larger counts saturate.
const MAX_VERBOSE_LEVEL: u8 = 3;

/// Requested diagnostic verbosity.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VerbosityConfig {
    /// Number of `-v` flags supplied (saturates at 3).
    pub verbose: u8,
    /// Suppress everything below `error`.
    pub quiet: bool,
}

impl VerbosityConfig {
    /// Create a configuration from a verbose level (0-3, larger values saturate).
    pub fn from_verbose_level(level: u8) -> Self {
        Self {
            verbose: level.min(MAX_VERBOSE_LEVEL),
            quiet: false,
        }
    }

    /// Configuration used by `--quiet`.
    pub const fn quiet() -> Self {
        Self {
            verbose: 0,
            quiet: true,
        }
    }

    /// Level applied to the workspace's own `sieve::*` targets.
    pub const fn sieve_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Level applied to every other target (dependencies).
    pub const fn global_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 | 1 => LevelFilter::WARN,
            2 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        }
    }

    /// Renders the configuration as an `EnvFilter` directive string.
    pub fn directive(&self) -> String {
        let global = level_name(self.global_level());
        let sieve = level_name(self.sieve_level());
        if global == sieve {
            global.to_owned()
        } else {
            format!("{global},sieve={sieve}")
        }
    }
}

fn level_name(level: LevelFilter) -> &'static str {
    if level == LevelFilter::OFF {
        "off"
    } else if level == LevelFilter::ERROR {
        "error"
    } else if level == LevelFilter::WARN {
        "warn"
    } else if level == LevelFilter::INFO {
        "info"
    } else if level == LevelFilter::DEBUG {
        "debug"
    } else {
        "trace"
    }
}
