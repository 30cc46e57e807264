pub mod handlers;
pub mod middlewares;
pub mod router;
pub mod state;

use std::time::Duration;

use crate::{conf::settings, prelude::Result};
use router::build_routes;
use state::{wait_for_db, AppState};

pub async fn listen() -> Result<()> {
    let state = AppState::new()?;
    if let Err(err) = wait_for_db(&state.db_pool, Duration::from_secs(5)).await {
        tracing::warn!("database not reachable yet: {}", err);
    }
    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", settings.listen_port.clone())).await?;
    tracing::info!("Listening at port {}", settings.listen_port);
    tokio::select! {
        r = axum::serve(listener, build_routes(state)) => {
            tracing::warn!("server ended unexpectedly: {:?}", &r)
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}
