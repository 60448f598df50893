//! HTTP server core implementation

use crate::auth::JwtHandler;
use crate::config::{Config, ServerConfig};
use crate::core::providers::{HaikuProvider, OpenAIProvider};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use tracing::{info, warn};

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a server that calls the configured OpenAI endpoint
    pub fn new(config: &Config, jwt: JwtHandler) -> Result<Self> {
        info!("Creating HTTP server");

        if config.upstream.api_key.is_empty() {
            warn!("No upstream API key configured, model calls will be rejected upstream");
        }
        let provider: Arc<dyn HaikuProvider> =
            Arc::new(OpenAIProvider::new(config.upstream.clone())?);

        Ok(Self::with_state(AppState::new(config.clone(), jwt, provider)))
    }

    /// Create a server around prepared state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.server.clone(),
            state,
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "img2haiku-rs")))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    fn format_bind_error(error: std::io::Error, bind_addr: &str) -> GatewayError {
        match error.kind() {
            std::io::ErrorKind::AddrInUse => GatewayError::server(format!(
                "Failed to bind {}: address already in use, set PORT or server.port to another value",
                bind_addr
            )),
            std::io::ErrorKind::PermissionDenied => GatewayError::server(format!(
                "Failed to bind {}: permission denied",
                bind_addr
            )),
            _ => GatewayError::server(format!("Failed to bind {}: {}", bind_addr, error)),
        }
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
