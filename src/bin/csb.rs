use std::process;

use statuskit::commands::{run, CompositeCommand};
use statuskit::utils::logger::init_logging;

fn main() {
    let matches = CompositeCommand::cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    process::exit(run::<CompositeCommand>(&matches));
}
