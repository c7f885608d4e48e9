//! Command definition and argument parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, builder::OsStringValueParser};

/// Program name used when the argument list is empty.
pub(crate) const PROGRAM_NAME: &str = "rsync-sieve";

/// Global options shared by every subcommand.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct GlobalArgs {
    pub(crate) config: Option<PathBuf>,
    pub(crate) json: bool,
    pub(crate) verbose: u8,
    pub(crate) quiet: bool,
}

/// The requested action.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Action {
    /// Classify a captured report; `None` reads standard input.
    Classify { input: Option<PathBuf> },
    /// Spawn rsync and classify its output.
    Run {
        rsync: Option<PathBuf>,
        cwd: Option<PathBuf>,
        args: Vec<OsString>,
    },
}

/// Fully parsed command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ParsedArgs {
    pub(crate) global: GlobalArgs,
    pub(crate) action: Action,
}

pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Classify rsync itemized output into change buckets and transfer statistics.")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Load pattern and program configuration from a JSON file.")
                .global(true)
                .num_args(1)
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the report as JSON.")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase diagnostic verbosity (repeatable).")
                .global(true)
                .action(ArgAction::Count)
                .overrides_with("quiet"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors.")
                .global(true)
                .action(ArgAction::SetTrue)
                .overrides_with("verbose"),
        )
        .subcommand(
            Command::new("classify")
                .about("Classify a captured rsync report (standard input when FILE is absent or '-').")
                .arg(
                    Arg::new("input")
                        .value_name("FILE")
                        .num_args(1)
                        .value_parser(OsStringValueParser::new()),
                ),
        )
        .subcommand(
            Command::new("run")
                .about("Run rsync with ARGS verbatim and classify its output.")
                .arg(
                    Arg::new("rsync")
                        .long("rsync")
                        .value_name("PROGRAM")
                        .help("Program to spawn instead of rsync.")
                        .num_args(1)
                        .action(ArgAction::Set)
                        .value_parser(OsStringValueParser::new()),
                )
                .arg(
                    Arg::new("cwd")
                        .long("cwd")
                        .value_name("DIR")
                        .help("Working directory for the spawned program.")
                        .num_args(1)
                        .action(ArgAction::Set)
                        .value_parser(OsStringValueParser::new()),
                )
                .arg(
                    Arg::new("args")
                        .value_name("ARGS")
                        .action(ArgAction::Append)
                        .num_args(0..)
                        .last(true)
                        .value_parser(OsStringValueParser::new()),
                ),
        )
}

/// Parses `arguments` (program name first).
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;
    let global = GlobalArgs {
        config: take_path(&mut matches, "config"),
        json: matches.get_flag("json"),
        verbose: matches.get_count("verbose"),
        quiet: matches.get_flag("quiet"),
    };

    let action = match matches.remove_subcommand() {
        Some((name, mut sub)) if name == "classify" => Action::Classify {
            input: take_path(&mut sub, "input").filter(|path| path.as_os_str() != "-"),
        },
        Some((_, mut sub)) => Action::Run {
            rsync: take_path(&mut sub, "rsync"),
            cwd: take_path(&mut sub, "cwd"),
            args: sub
                .remove_many::<OsString>("args")
                .map(Iterator::collect)
                .unwrap_or_default(),
        },
        None => {
            return Err(clap_command().error(
                clap::error::ErrorKind::MissingSubcommand,
                "a subcommand is required",
            ));
        }
    };

    Ok(ParsedArgs { global, action })
}

fn take_path(matches: &mut ArgMatches, id: &str) -> Option<PathBuf> {
    matches.remove_one::<OsString>(id).map(PathBuf::from)
}
