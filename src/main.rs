use clap::Parser;
use miette::Result;
use msgc::cli::{Cli, Commands};
use msgc::output::Printer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Some(Commands::Check(args)) => msgc::cli::check::run(args, &printer)?,
        Some(Commands::Dump(args)) => msgc::cli::dump::run(args)?,
        Some(Commands::Init(args)) => msgc::cli::init::run(args, &printer)?,
        Some(Commands::Completions(args)) => msgc::cli::completions::run(args)?,
        None => msgc::cli::compile::run(cli.compile, &printer)?,
    }

    Ok(())
}
