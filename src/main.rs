//! # Tubestat Main Entry Point
//!
//! Fetch once, render once, exit. A failed fetch prints a single `ERROR`
//! line to stderr and exits non-zero without any per-line output.

use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};
use tubestat::cmd_args::CommandLineArgs;
use tubestat::{config, render_report, StatusClient};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CommandLineArgs::parse();
    init_tracing_subscriber(args.verbose());

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("status fetch failed: {err:#}");
            eprintln!("ERROR");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &CommandLineArgs) -> Result<()> {
    let client = StatusClient::new()?;
    let doc = client.fetch(&config::status_url()).await?;

    let color = !args.no_color() && atty::is(atty::Stream::Stdout);
    let stdout = std::io::stdout();
    render_report(&mut stdout.lock(), &doc, color)?;
    Ok(())
}

fn init_tracing_subscriber(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(format!(
                "{}_LOG_LEVEL",
                env!("CARGO_PKG_NAME").to_uppercase()
            ))
            .unwrap_or_else(|_| EnvFilter::new(default_level))
            .add_directive("reqwest=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("hyper_util=warn".parse().unwrap())
            .add_directive("rustls=warn".parse().unwrap())
            .add_directive("tokio=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
