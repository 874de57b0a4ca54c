//! WalkNav CLI
//!
//! Interactive walking navigation: resolves two addresses through AMap and
//! prints step-by-step walking directions between them.

mod app_config;
mod flow;
mod prompt;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use app_config::AppConfig;
use clap::Parser;
use integration_amap::AmapNavigationClient;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// WalkNav CLI
#[derive(Parser)]
#[command(name = "walknav")]
#[command(author, version, about = "Step-by-step walking directions between two addresses", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: walknav.toml if present)
    #[arg(short, long, env = "WALKNAV_CONFIG")]
    config: Option<PathBuf>,

    /// Origin address (prompted for if omitted)
    #[arg(long)]
    origin: Option<String>,

    /// Destination address (prompted for if omitted)
    #[arg(long)]
    destination: Option<String>,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to WalkNav walking navigation!")?;
    writeln!(
        out,
        "Enter a start and an end address to get step-by-step walking directions."
    )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the rendered route
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(cli.verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    debug!(
        geocode_url = %config.amap.geocode_url,
        walking_url = %config.amap.walking_url,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let client = match AmapNavigationClient::new(&config.amap) {
        Ok(client) => client,
        Err(e) => {
            writeln!(out, "{e}")?;
            writeln!(
                out,
                "Set the AMap key in walknav.toml ([amap] api_key) or WALKNAV_AMAP__API_KEY."
            )?;
            return Ok(ExitCode::FAILURE);
        },
    };

    print_banner(&mut out)?;

    let Some(origin) = prompt::resolve_address_input(cli.origin, &mut input, &mut out, "origin")?
    else {
        return Ok(ExitCode::FAILURE);
    };
    let Some(destination) =
        prompt::resolve_address_input(cli.destination, &mut input, &mut out, "destination")?
    else {
        return Ok(ExitCode::FAILURE);
    };

    let outcome = flow::run_navigation(&client, &origin, &destination, &mut out).await?;
    debug!(?outcome, "Navigation finished");
    out.flush()?;

    Ok(outcome.exit_code())
}
