//! # HTTP Server
//!
//! Combines the animal API, the site routes and optional static assets
//! into one Axum router.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;

use super::animal_routes::{animal_routes, AnimalState};
use super::config::HttpServerConfig;
use super::site_routes::site_routes;
use crate::observability::Logger;
use crate::storage::AnimalStore;

/// HTTP server for the animal API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an already-opened store
    pub fn new(config: HttpServerConfig, store: Arc<AnimalStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<AnimalStore>) -> Router {
        let animal_state = Arc::new(AnimalState::new(store));

        let router = Router::new()
            .merge(site_routes())
            .nest("/api", animal_routes(animal_state));

        let router = match &config.public_dir {
            Some(dir) => router.fallback_service(ServeDir::new(dir)),
            None => router,
        };

        router.layer(ServiceBuilder::new().layer(Self::cors_layer(config)))
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;

        Logger::info(
            "SERVER_LISTENING",
            &[
                ("addr", addr.to_string().as_str()),
                ("data_path", self.config.data_path.display().to_string().as_str()),
            ],
        );

        axum::serve(listener, self.router).await
    }
}
