use gazetteer::app_config::AppConfig;
use gazetteer::backend::{self, Api};
use gazetteer::console::{self, ConsoleSurface, ConsoleUi};
use gazetteer::domain::events::Event;
use gazetteer::session::FormSession;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let client = backend::new_client(&config)?;
    let api = Api::new(client, &config);

    let surface = Arc::new(ConsoleSurface);
    let ui = Arc::new(ConsoleUi::new(&config));

    let mut session = FormSession::new(api, ui, surface);
    session.start().await?;
    info!("✅  Loaded country catalog and saved locations");

    let (tx, rx) = mpsc::channel::<Event>(config.core().event_buffer_size());
    task::spawn(async move {
        session.listen(rx).await;
    });
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    console::run(tx).await?;

    Ok(())
}
