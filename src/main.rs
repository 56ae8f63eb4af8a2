use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bookcat::{config::Cli, core::catalog::Catalog, shell::Shell};

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_directive()));

    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = cli.shell_config();
    tracing::debug!(data_file = %config.data_file.display(), "starting shell");

    let stdin = io::stdin();
    let mut shell = Shell::new(Catalog::new(), config, stdin.lock(), io::stdout());
    shell.run().context("terminal I/O failed")?;
    Ok(())
}
