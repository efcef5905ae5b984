//! materialize-credentials entry point.

use std::process;

use anyhow::Result;
use clap::Parser;

use credential_materializer::cli::{self, Cli};
use credential_materializer::infrastructure::env::ProcessEnv;
use credential_materializer::infrastructure::logging::LoggerImpl;

fn main() {
    let cli = Cli::parse();

    let code = match try_main(&cli) {
        Ok(()) => 0,
        Err(err) => cli::report_error(&err, cli.json),
    };
    process::exit(code);
}

fn try_main(cli: &Cli) -> Result<()> {
    let config = cli::load_config(cli)?;
    let _logger = LoggerImpl::init(&config.logging)?;

    let result = cli::run(&config, ProcessEnv)?;
    cli::output(&result, cli.json);
    Ok(())
}
