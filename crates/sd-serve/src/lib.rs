pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod static_files;

use axum::Router;
use sd_core::SkillDeck;
use sd_gen::GeminiModel;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Shared per-process state. One deck serves every request; token counters
/// stay monotonic for the lifetime of the server, which is what lets
/// consumers discard stale responses.
#[derive(Clone)]
pub struct AppState {
    pub deck: Arc<SkillDeck<GeminiModel>>,
}

impl AppState {
    pub fn new(model: GeminiModel) -> Self {
        Self {
            deck: Arc::new(SkillDeck::new(model)),
        }
    }
}

pub fn app(state: AppState) -> Router {
    routes::router(state)
}

pub async fn serve(state: AppState, addr: SocketAddr) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app(state)).await
}
