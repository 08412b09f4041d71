//! HappyLibsWordGen demo CLI.

use clap::Parser;
use happylibs_cli::cli::Cli;
use happylibs_cli::demo::{load_hint, load_store, print_demo};
use happylibs_cli::logging::init_logging;
use happylibs_words::WordsError;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    if let Err(error) = run(&cli) {
        eprintln!("error: {error:#}");
        if let Some(hint) = error.downcast_ref::<WordsError>().and_then(load_hint) {
            eprintln!("hint: {hint}");
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let store = load_store(cli.words_file.as_deref())?;
    print_demo(&store)
}
