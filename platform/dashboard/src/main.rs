use dashboard::config::Config;
use dashboard::run;
use std::io;
use std::net::TcpListener;
use std::sync::Arc;
use tickerboard::dashboard::Dashboard;
use tickerboard::data::{Client as DataClient, Interface as DataInterface};
use tickerboard::logger::init_tracing;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let config = Config::from_env()?;

    let data_client = DataClient::new(config.provider_base_url.clone(), config.provider_timeout)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let data_client: Arc<dyn DataInterface> = Arc::new(data_client);

    let listener = TcpListener::bind(("0.0.0.0", config.server_port))?;

    info!(
        "Serving dashboard on port {} with provider {}",
        config.server_port, config.provider_base_url
    );

    run(listener, Dashboard::new(data_client))?.await
}
