use std::env;
use std::process;

use lotto_odds::{cli, logging};

fn main() {
    logging::init_tracing();
    let args: Vec<String> = env::args().collect();
    process::exit(cli::run_with_args(&args));
}
