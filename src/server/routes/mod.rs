//! HTTP route modules

pub mod compose;
pub mod health;

use actix_web::web;

/// Register all routes
///
/// `/` accepts every method so that authentication runs before the method
/// check.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/", web::route().to(compose::compose_haiku));
}
