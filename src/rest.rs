//! HTTP surface of the mock server.

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::fixtures;

/// Assembles every fixture route into the served app.
pub fn router() -> Router {
    Router::new()
        .merge(fixtures::binance_explorer::routes())
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub struct RestApi {
    rest_addr: String,
    app: Option<Router>,
}

impl RestApi {
    pub fn new(rest_addr: String) -> Self {
        RestApi {
            rest_addr,
            app: Some(router()),
        }
    }

    pub async fn serve(&mut self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.rest_addr)
            .await
            .context("Starting rest server")?;

        info!("rest listening on {}", self.rest_addr);

        axum::serve(listener, self.app.take().expect("app is not set"))
            .await
            .context("Starting rest server")
    }
}
