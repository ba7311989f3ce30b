// Entrypoint for the dashboard.
// - Logging goes to stderr and defaults to `warn` so the screen stays
//   readable; raise it with `RUST_LOG`.
// - Backend failures are shown on screen; only terminal errors end up here.

use stock_live::{api::ApiClient, config::Config, ui};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let api = ApiClient::new(&config.api_url)?;

    tracing::info!(api_url = %config.api_url, "starting dashboard");
    ui::run(&api)?;
    Ok(())
}
