//! Startup: configuration loading, key material and `run_server`

use crate::auth::{JwtHandler, KeyPair};
use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use crate::utils::logging::init_tracing;
use std::path::Path;
use tracing::{info, warn};

/// Resolve key material and build the verifier the server runs with
///
/// In dev mode a missing key pair is generated. A missing public key is
/// derived from the private key. Whenever a private key is available a
/// token for the configured subject and audience is issued and logged, so
/// the endpoint can be exercised right away. Startup fails if that token
/// does not validate against the public key.
pub fn prepare_auth(config: &mut Config) -> Result<JwtHandler> {
    let auth = &mut config.auth;

    if !auth.has_private_key() && !auth.has_public_key() {
        if !config.server.dev_mode {
            return Err(GatewayError::config(
                "No JWT key configured; set JWT_PUBLIC_KEY or enable dev_mode",
            ));
        }
        warn!("Dev mode: generating an ephemeral RSA key pair");
        let pair = KeyPair::generate()?;
        auth.private_key = Some(pair.private);
        auth.public_key = Some(pair.public);
    }

    if auth.has_private_key() && !auth.has_public_key() {
        if let Some(private) = auth.private_key.clone() {
            let pair = KeyPair::from_private_pem(&private)?;
            auth.public_key = Some(pair.public);
        }
    }

    let public = auth
        .public_key
        .as_deref()
        .ok_or_else(|| GatewayError::config("No JWT public key available"))?;
    let verifier = JwtHandler::verifier(public, auth.expected_claims())?;

    if let Some(pair) = auth.key_pair() {
        let issuer = JwtHandler::new(&pair, auth.expected_claims())?;
        let token = issuer.issue_token(&auth.subject, &auth.audience, auth.token_ttl())?;
        verifier.validate_token(&token).map_err(|e| {
            GatewayError::config(format!(
                "JWT_PRIVATE_KEY and JWT_PUBLIC_KEY do not belong to the same key pair: {}",
                e
            ))
        })?;
        info!("JWT for testing: {}", token);
    }

    Ok(verifier)
}

/// Load configuration, prepare keys and serve until shutdown
pub async fn run_server(config_path: &Path) -> Result<()> {
    let mut config = Config::load(config_path).await?;
    init_tracing(&config.logging);

    info!("Starting img2haiku-rs {}", crate::VERSION);

    let jwt = prepare_auth(&mut config)?;
    let server = HttpServer::new(&config, jwt)?;

    info!("Server starting at: http://{}", server.config().address());
    info!("API Endpoints:");
    info!("   POST /       - Compose a haiku for an image");
    info!("   GET  /health - Health check");

    server.start().await
}
