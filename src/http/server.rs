//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Mount the routes produced by the route factory
//! - Wire up middleware (CORS, request ID, tracing)
//! - Publish service metadata
//! - Bind to `host:port` and serve until shutdown

use std::future::Future;
use std::io;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::RunConfiguration;
use crate::http::metadata::{openapi_document, OPENAPI_PATH, SERVICE_METADATA};
use crate::lifecycle::signals::shutdown_signal;
use crate::routing::{RouteFactory, RouteOptions};
use crate::security::permissive_cors;

/// Errors from binding or serving.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

/// The assembled ScrapyRT-compatible service.
pub struct HttpServer {
    router: Router,
    config: Arc<RunConfiguration>,
}

impl HttpServer {
    /// Assemble the application: metadata, factory routes, middleware.
    pub fn new(config: RunConfiguration, factory: &dyn RouteFactory) -> Self {
        let config = Arc::new(config);
        let routes = factory.routes(&RouteOptions::from(config.as_ref()));
        let router = Self::build_router(routes);

        tracing::debug!(
            title = SERVICE_METADATA.title,
            version = SERVICE_METADATA.version,
            "Service assembled"
        );
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(routes: Router) -> Router {
        Router::new()
            .route(OPENAPI_PATH, get(openapi_document))
            .merge(routes)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(permissive_cors()),
            )
    }

    /// The assembled router, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &RunConfiguration {
        &self.config
    }

    /// Bind to the configured `host:port`.
    pub async fn bind(&self) -> Result<TcpListener, ServeError> {
        let address = self.config.bind_address();
        TcpListener::bind(&address)
            .await
            .map_err(|source| ServeError::Bind { address, source })
    }

    /// Bind and serve until Ctrl-C or SIGTERM.
    pub async fn serve(self) -> Result<(), ServeError> {
        let listener = self.bind().await?;
        self.run_until(listener, shutdown_signal()).await
    }

    /// Serve on `listener` until `shutdown` resolves.
    pub async fn run_until<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            debug = self.config.debug,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
