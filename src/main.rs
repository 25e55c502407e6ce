use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use billfold::api::ApiClient;
use billfold::config::{Config, ConfigStore};
use billfold::logging;
use billfold::session::SessionStore;
use billfold::ui::app::App;
use billfold::ui::events::{AppEvent, EventHandler};
use billfold::ui::{runtime, worker};

#[derive(Parser, Debug)]
#[command(name = "billfold")]
#[command(version, about = "Terminal client for a self-hosted personal ledger server")]
struct Cli {
    /// Config file path (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server base URL, overriding the config file
    #[arg(long, value_name = "URL")]
    server: Option<String>,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let (mut config, config_path) = match &cli.config {
        Some(path) => {
            let config = Config::load_from(path)
                .with_context(|| format!("load config from {}", path.display()))?;
            (config, path.clone())
        }
        None => (Config::load().context("load config")?, Config::config_path()),
    };
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }
    config.validate().context("invalid config")?;

    let session = SessionStore::load_or_default(&SessionStore::session_path());

    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let events = EventHandler::new(tick_rate);

    // The client pings this channel whenever the server says our token
    // is no longer good, so the UI can drop back to sign-in.
    let expired_tx = events.sender();
    let client = ApiClient::new(&config, session.clone(), move || {
        let _ = expired_tx.send(AppEvent::SessionExpired);
    })
    .context("build http client")?;

    let rt = tokio::runtime::Runtime::new().context("start async runtime")?;
    let (api_tx, api_rx) = tokio::sync::mpsc::channel(32);
    rt.spawn(worker::run(api_rx, Arc::new(client), events.sender()));

    let app = App::new(ConfigStore::new(config, config_path), session, api_tx);
    runtime::run(app, events, tick_rate)?;
    Ok(())
}
