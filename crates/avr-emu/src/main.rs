mod cli;
mod runner;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();
    env_logger::Builder::new()
        .filter_level(cli::log_level_for(args.verbose))
        .format_timestamp(None)
        .init();

    let config = cli::Config::from(args);
    std::process::exit(runner::run(&config));
}
