use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod extract;
mod locators;
mod matching;
mod parsing;
mod sites;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("reg_verify=debug,info")
    } else {
        EnvFilter::new("reg_verify=warn")
    };

    // Diagnostics go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Extract(args) => {
            cli::extract::run(&args, cli.format, &cli.base_dir, cli.verbose)?;
        }
        cli::Commands::Pair(args) => {
            cli::pair::run(&args, cli.format, &cli.base_dir, cli.verbose)?;
        }
        cli::Commands::Locators(args) => {
            cli::locators::run(&args, cli.format)?;
        }
    }

    Ok(())
}
