use std::process;

use statuskit::commands::{run, GetStatusBarCommand};
use statuskit::utils::logger::init_logging;

fn main() {
    let matches = GetStatusBarCommand::cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    process::exit(run::<GetStatusBarCommand>(&matches));
}
