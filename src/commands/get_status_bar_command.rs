//! `get_status_bar`: extract the bottom strip of an image

use std::path::PathBuf;

use clap::{ArgMatches, Command as ClapCommand};
use log::info;

use crate::api;
use crate::commands::args::{base_cli, optional_value_arg, require_any, value};
use crate::commands::command_traits::{Command, FromArgs};
use crate::errors::{StatusBarError, StatusResult};

/// Validated parameters for a strip extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractParams {
    /// Source image
    pub input: PathBuf,
    /// Strip height in rows, always positive
    pub height: i64,
    /// Image to create
    pub output: PathBuf,
}

/// Command extracting a status bar from the bottom of an image
pub struct GetStatusBarCommand {
    params: ExtractParams,
}

impl GetStatusBarCommand {
    /// Argument definitions for the `get_status_bar` binary
    pub fn cli() -> ClapCommand {
        base_cli("get_status_bar", "Crop a full-width status bar strip from the bottom of an image")
            .arg(
                optional_value_arg("input")
                    .short('i')
                    .value_name("FILE")
                    .help("Source image"),
            )
            .arg(
                optional_value_arg("height")
                    .value_name("ROWS")
                    .allow_negative_numbers(true)
                    .help("Status bar height in pixels, counted from the bottom edge"),
            )
            .arg(
                optional_value_arg("output")
                    .short('o')
                    .value_name("FILE")
                    .help("Status bar image to create; the format follows the extension"),
            )
    }

    /// Create a command from already validated parameters
    pub fn new(params: ExtractParams) -> Self {
        GetStatusBarCommand { params }
    }

    /// Parameters this command will run with
    pub fn params(&self) -> &ExtractParams {
        &self.params
    }
}

impl FromArgs for GetStatusBarCommand {
    fn from_args(args: &ArgMatches) -> StatusResult<Self> {
        require_any(args, &["input", "height", "output"])?;

        let input = match value(args, "input") {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => {
                return Err(StatusBarError::MissingArgument(
                    "no input file name is specified".to_string(),
                ))
            }
        };

        let height = value(args, "height")
            .and_then(|h| h.trim().parse::<i64>().ok())
            .ok_or_else(|| {
                StatusBarError::MissingArgument(
                    "no status bar height is specified or provided height value is invalid".to_string(),
                )
            })?;
        if height <= 0 {
            return Err(StatusBarError::InvalidHeight(height));
        }

        let output = match value(args, "output") {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => {
                return Err(StatusBarError::MissingArgument(
                    "no output file name is specified".to_string(),
                ))
            }
        };

        info!("Input file: {}", input.display());
        info!("Status bar height: {}", height);
        info!("Output file: {}", output.display());

        Ok(GetStatusBarCommand::new(ExtractParams { input, height, output }))
    }

    fn diagnostic(error: &StatusBarError) -> String {
        match error {
            StatusBarError::OutputAlreadyExists(_) => "output file already exists".to_string(),
            other => other.to_string(),
        }
    }
}

impl Command for GetStatusBarCommand {
    fn execute(&self) -> StatusResult<()> {
        api::extract_bottom_strip(&self.params.input, self.params.height, &self.params.output)
    }
}
