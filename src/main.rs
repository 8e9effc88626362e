//! `wikiforge` — taxonomy scaffolder for a Docusaurus study wiki

use clap::Parser;

use wikiforge::cli::args::Cli;
use wikiforge::cli::commands;
use wikiforge::error::ExitCode;
use wikiforge::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
