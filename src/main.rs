//! Entry point: parse CLI, set up logging and dispatch to the command handler.

use clap::Parser;
use fpl_api::{cli::Fpl, commands::handle_command};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Fpl::parse();

    init_logging(app.opts.verbose);

    handle_command(&app.opts, &app.command).await?;

    Ok(())
}

/// Log to stderr so stdout stays pure JSON. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "fpl_api=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
