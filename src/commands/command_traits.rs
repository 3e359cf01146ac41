//! Command pattern interfaces
//!
//! Each binary parses its arguments with clap, turns them into one typed
//! command, and executes it.

use clap::ArgMatches;
use log::debug;

use crate::errors::{StatusBarError, StatusResult};

/// Represents an executable command in the application
///
/// Command objects hold fully validated parameters; `execute` runs the
/// pipeline for them.
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> StatusResult<()>;
}

/// Commands that can be built from parsed CLI arguments
pub trait FromArgs: Sized {
    /// Validate the arguments and build the command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// The command, or the first missing or invalid parameter
    fn from_args(args: &ArgMatches) -> StatusResult<Self>;

    /// Single-line diagnostic printed for a failure of this tool
    fn diagnostic(error: &StatusBarError) -> String {
        error.to_string()
    }
}

/// Build and execute a command, returning the process exit code
///
/// Failures print their single-line diagnostic to stderr and map to the
/// exit code of their kind.
pub fn run<C: Command + FromArgs>(args: &ArgMatches) -> i32 {
    let result = C::from_args(args).and_then(|command| command.execute());
    match result {
        Ok(()) => 0,
        Err(e) => {
            debug!("Command failed ({:?}): {}", e.kind(), e);
            eprintln!("{}", C::diagnostic(&e));
            e.exit_code()
        }
    }
}
