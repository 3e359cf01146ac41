//! Shared argument helpers
//!
//! Both tools accept options that may be given without a value (`-i` on its
//! own). Those parse as an empty string so the command can report them.

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};

use crate::errors::{StatusBarError, StatusResult};

pub(crate) const NO_ARGUMENTS: &str = "no arguments specified; use -? or --help arguments to see help";

/// Common skeleton for both tools: `-?`/`--help`, `-v`, and a help page that
/// starts with the usage line
pub(crate) fn base_cli(name: &'static str, about: &'static str) -> ClapCommand {
    ClapCommand::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .disable_help_flag(true)
        .help_template("{usage-heading} {usage}\n\n{about}\n\n{all-args}")
        .arg(
            Arg::new("help")
                .short('?')
                .long("help")
                .help("Print help")
                .action(ArgAction::Help),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Option taking one value that may also appear with no value at all
pub(crate) fn optional_value_arg(id: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .num_args(0..=1)
        .default_missing_value("")
}

/// Fail when none of `ids` was given on the command line
pub(crate) fn require_any(args: &ArgMatches, ids: &[&str]) -> StatusResult<()> {
    let given = ids
        .iter()
        .any(|id| args.value_source(id) == Some(ValueSource::CommandLine));

    if given {
        Ok(())
    } else {
        Err(StatusBarError::MissingArgument(NO_ARGUMENTS.to_string()))
    }
}

/// Value of an option: `None` when absent, `Some("")` when given bare
pub(crate) fn value<'a>(args: &'a ArgMatches, id: &str) -> Option<&'a str> {
    args.get_one::<String>(id).map(String::as_str)
}
