//! Tokentrail CLI - trace where opaque values in captured HTTP traffic came from.

use clap::Parser;
use tokentrail_cli::commands;
use tokentrail_cli::{init_logging, Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> tokentrail_cli::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Trace(args) => commands::execute_trace(args, &config, &formatter).await?,
        Command::Seeds(args) => commands::execute_seeds(args, &config, &formatter)?,
        Command::Survey(args) => commands::execute_survey(args, &config, &formatter)?,
        Command::Locate(args) => commands::execute_locate(args, &formatter)?,
    }

    Ok(())
}
