mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands;

fn main() {
    let cli = cli::Cli::parse();

    // Logs go to stderr so stdout carries only the transformed text
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(level.into()),
        )
        .init();

    // Run the command and handle errors gracefully
    if let Err(err) = run_command(cli) {
        commands::display_error(&err);
        std::process::exit(1);
    }
}

fn run_command(cli: cli::Cli) -> Result<()> {
    use cli::Commands;

    match cli.command {
        Commands::Process(args) => commands::process::handle(args),
        Commands::Init { path } => commands::init::handle(&path),
        Commands::Config { action } => commands::config::handle(action),
    }
}
