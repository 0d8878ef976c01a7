//! ServerBuilder for fluent API to build the HTTP server

use super::handlers::PuppyAppState;
use super::router::build_puppy_routes;
use crate::core::service::PuppyService;
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the puppy HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_puppy_service(InMemoryPuppyService::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    puppy_service: Option<Arc<dyn PuppyService>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            puppy_service: None,
        }
    }

    /// Set the puppy service (required)
    pub fn with_puppy_service(mut self, service: impl PuppyService + 'static) -> Self {
        self.puppy_service = Some(Arc::new(service));
        self
    }

    /// Set an already shared puppy service (required)
    pub fn with_shared_service(mut self, service: Arc<dyn PuppyService>) -> Self {
        self.puppy_service = Some(service);
        self
    }

    /// Build the router
    ///
    /// Every route is wrapped in request tracing and a permissive CORS layer,
    /// so a browser UI served from any origin can call the API.
    pub fn build(mut self) -> Result<Router> {
        let service = self.puppy_service.take().ok_or_else(|| {
            anyhow::anyhow!("PuppyService is required. Call .with_puppy_service()")
        })?;

        let app = build_puppy_routes(PuppyAppState { service }).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

        Ok(app)
    }

    /// Serve the application
    ///
    /// Binds `addr` and serves until the process is terminated.
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_puppy_service(service)
    ///     .serve(config.listen_addr())
    ///     .await?;
    /// ```
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server is running on port {}", addr.port());

        axum::serve(listener, app).await?;

        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
