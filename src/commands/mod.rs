//! CLI command implementations
//!
//! One command per binary, built from clap matches into validated
//! parameters and executed through the Command pattern.

mod args;
pub mod command_traits;
pub mod composite_command;
pub mod get_status_bar_command;

pub use command_traits::{run, Command, FromArgs};
pub use composite_command::{CompositeCommand, CompositeParams};
pub use get_status_bar_command::{ExtractParams, GetStatusBarCommand};
