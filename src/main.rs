use std::{io, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use pkginfo::{
    commands::{self, Outcome},
    Fetcher,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(Outcome::Found) => ExitCode::SUCCESS,
        Ok(Outcome::NotFound) => ExitCode::from(1),
        Err(err) => {
            debug!("{:?}", err);
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: &Cli) -> Result<Outcome> {
    let fetcher = Fetcher::new(&cli.config())?;
    let mut stdout = io::stdout().lock();

    commands::info(&fetcher, &cli.package_name, cli.aur, &mut stdout).await
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,pkginfo={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
