use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::handlers::{load_index_template, AppState, FALLBACK_SHELL};

mod config;
mod error;
mod handlers;
mod logging;
mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_path(".env").ok();
    logging::setup();

    let config = Config::from_env()?;

    let index_template = match load_index_template(&config.frontend_dist).await {
        Ok(template) => template,
        Err(e) => {
            warn!("{} ({}), serving the built-in shell", e, config.frontend_dist.display());
            FALLBACK_SHELL.to_string()
        }
    };

    let state = Arc::new(AppState::new(config, index_template));
    let addr = state.config.addr();
    let app = routes::create_router(state);

    info!("listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
