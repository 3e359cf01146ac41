//! `csb`: composite a status bar onto the bottom of an image
//!
//! Each image is decoded as soon as its option has been read, so an
//! unreadable input is reported before a missing status bar, and an
//! unreadable status bar before a missing output.

use std::path::PathBuf;

use clap::{ArgMatches, Command as ClapCommand};
use image::DynamicImage;
use log::info;

use crate::api;
use crate::commands::args::{base_cli, optional_value_arg, require_any, value};
use crate::commands::command_traits::{Command, FromArgs};
use crate::errors::{ImageRole, StatusBarError, StatusResult};
use crate::io::image_io::load_image;

/// Validated parameters for a composition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeParams {
    /// Base image whose bottom rows are replaced
    pub input: PathBuf,
    /// Previously extracted status bar
    pub status_bar: PathBuf,
    /// Image to create
    pub output: PathBuf,
}

/// Command replacing the status bar of an image
pub struct CompositeCommand {
    params: CompositeParams,
    base: DynamicImage,
    bar: DynamicImage,
}

impl CompositeCommand {
    /// Argument definitions for the `csb` binary
    pub fn cli() -> ClapCommand {
        base_cli("csb", "Replace the bottom strip of an image with a status bar image")
            .arg(
                optional_value_arg("input")
                    .short('i')
                    .value_name("FILE")
                    .help("Image to put the status bar on"),
            )
            .arg(
                optional_value_arg("status-bar")
                    .short('s')
                    .value_name("FILE")
                    .help("Status bar image, as wide as the input and no taller"),
            )
            .arg(
                optional_value_arg("output")
                    .short('o')
                    .value_name("FILE")
                    .help("Image to create; the format follows the extension"),
            )
    }

    /// Create a command from validated parameters and the images they name
    pub fn new(params: CompositeParams, base: DynamicImage, bar: DynamicImage) -> Self {
        CompositeCommand { params, base, bar }
    }

    /// Parameters this command will run with
    pub fn params(&self) -> &CompositeParams {
        &self.params
    }
}

/// Read a path option that reports `missing argument: -x` when given bare
fn path_option(args: &ArgMatches, id: &str, short: char, absent: &str) -> StatusResult<PathBuf> {
    match value(args, id) {
        None => Err(StatusBarError::MissingArgument(absent.to_string())),
        Some("") => Err(StatusBarError::MissingArgument(format!("missing argument: -{}", short))),
        Some(path) => Ok(PathBuf::from(path)),
    }
}

impl FromArgs for CompositeCommand {
    fn from_args(args: &ArgMatches) -> StatusResult<Self> {
        require_any(args, &["input", "status-bar", "output"])?;

        let input = path_option(args, "input", 'i', "no input image specified, use -i option")?;
        info!("Input file: {}", input.display());
        let base = load_image(&input, ImageRole::Input)?;

        let status_bar = path_option(args, "status-bar", 's', "no status bar image specified, use -s option")?;
        info!("Status bar file: {}", status_bar.display());
        let bar = load_image(&status_bar, ImageRole::StatusBar)?;

        let output = match value(args, "output") {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => {
                return Err(StatusBarError::MissingArgument(
                    "no output specified, use -o option".to_string(),
                ))
            }
        };
        info!("Output file: {}", output.display());

        Ok(CompositeCommand::new(CompositeParams { input, status_bar, output }, base, bar))
    }
}

impl Command for CompositeCommand {
    fn execute(&self) -> StatusResult<()> {
        api::composite_images(&self.base, &self.bar, &self.params.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use image::RgbImage;
    use tempfile::TempDir;

    fn message(argv: &[&str]) -> String {
        let matches = CompositeCommand::cli().try_get_matches_from(argv).unwrap();
        match CompositeCommand::from_args(&matches) {
            Ok(_) => panic!("expected {:?} to be rejected", argv),
            Err(e) => e.to_string(),
        }
    }

    fn images() -> (TempDir, String, String) {
        let dir = tempfile::tempdir().unwrap();
        let shot = dir.path().join("shot.png");
        let bar = dir.path().join("bar.png");
        RgbImage::new(8, 6).save(&shot).unwrap();
        RgbImage::new(8, 2).save(&bar).unwrap();
        let shot = shot.to_str().unwrap().to_string();
        let bar = bar.to_str().unwrap().to_string();
        (dir, shot, bar)
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(message(&["csb"]), "no arguments specified; use -? or --help arguments to see help");
    }

    #[test]
    fn test_bare_options_are_missing_arguments() {
        let (_dir, shot, _) = images();
        assert_eq!(message(&["csb", "-i"]), "missing argument: -i");
        assert_eq!(message(&["csb", &format!("--input={}", shot), "-s"]), "missing argument: -s");
    }

    #[test]
    fn test_absent_options() {
        let (_dir, shot, bar) = images();
        assert_eq!(
            message(&["csb", &format!("--input={}", shot)]),
            "no status bar image specified, use -s option"
        );
        assert_eq!(
            message(&["csb", &format!("--input={}", shot), &format!("--status-bar={}", bar)]),
            "no output specified, use -o option"
        );
        assert_eq!(
            message(&["csb", "-s", &bar, "-o", "out.png"]),
            "no input image specified, use -i option"
        );
    }

    #[test]
    fn test_unreadable_input_reported_before_missing_status_bar() {
        let matches = CompositeCommand::cli().try_get_matches_from(["csb", "-i=some"]).unwrap();
        let err = CompositeCommand::from_args(&matches).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::FileOpenFailure);
        assert_eq!(err.to_string(), "failed to open the input file: some");
    }

    #[test]
    fn test_unreadable_status_bar_reported_before_missing_output() {
        let (_dir, shot, _) = images();
        let input_arg = format!("--input={}", shot);
        let matches = CompositeCommand::cli()
            .try_get_matches_from(["csb", input_arg.as_str(), "--status-bar=some"])
            .unwrap();
        let err = CompositeCommand::from_args(&matches).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::FileOpenFailure);
        assert_eq!(err.to_string(), "failed to open the status bar image file: some");
    }

    #[test]
    fn test_valid_arguments() {
        let (_dir, shot, bar) = images();
        let input_arg = format!("-i={}", shot);
        let matches = CompositeCommand::cli()
            .try_get_matches_from(["csb", input_arg.as_str(), "-s", bar.as_str(), "--output=out.png"])
            .unwrap();
        let command = CompositeCommand::from_args(&matches).unwrap();
        assert_eq!(
            command.params(),
            &CompositeParams {
                input: PathBuf::from(&shot),
                status_bar: PathBuf::from(&bar),
                output: PathBuf::from("out.png"),
            }
        );
    }

    #[test]
    fn test_existing_output_diagnostic_names_path() {
        let err = StatusBarError::OutputAlreadyExists(PathBuf::from("out.png"));
        assert_eq!(CompositeCommand::diagnostic(&err), "output file already exists: out.png");
    }

    #[test]
    fn test_help_starts_with_usage() {
        let help = CompositeCommand::cli().render_help().to_string();
        assert!(help.starts_with("Usage: csb"));
    }
}
