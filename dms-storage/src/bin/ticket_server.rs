use std::net::SocketAddr;
use std::sync::Arc;

use dms_storage::logger::init_logger;
use dms_storage::{AppState, Config, UsbConnector, router};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    init_logger(config.log_level.as_deref(), config.log_dir.as_deref());

    let state = AppState::new(Arc::new(UsbConnector::default()));
    let app = router(state, &config.web_root);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, web_root = %config.web_root.display(), "Ticket server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
