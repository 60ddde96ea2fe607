use std::process::ExitCode;

use clap::Parser;
use eyre::Result;
use scribewise_cli::commands::{self, Cli};
use scribewise_cli::{config, notify::TerminalNotifier};

const LOG_FORMAT_VAR: &str = "SCRIBEWISE_LOG_FORMAT";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if std::env::var(LOG_FORMAT_VAR).is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let cli = Cli::parse();

    let config = config::load_or_default()?;
    commands::run(cli.command, config, &TerminalNotifier).await
}
