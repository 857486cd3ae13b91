use clap::Parser;
use tracing_subscriber::EnvFilter;

use fastqc_report::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fastqc_report=debug,info")
    } else {
        EnvFilter::new("fastqc_report=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let options = cli.load_options();

    match cli.command {
        cli::Commands::Summary(args) => {
            cli::summary::run(args, cli.format, &options)?;
        }
        cli::Commands::Raw(args) => {
            cli::module::run_raw(args, cli.format, &options)?;
        }
        cli::Commands::Clean(args) => {
            cli::module::run_clean(args, cli.format, &options)?;
        }
        cli::Commands::Content(args) => {
            cli::content::run(args, &options)?;
        }
    }

    Ok(())
}
