pub mod health;
pub mod tenants;

use crate::database::Repository;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router.
pub fn build_router(repository: Arc<Repository>) -> Router {
    // Public routes (no tenant state needed)
    let public_routes = Router::new().route("/health", get(health::health_check));

    let admin_routes = Router::new()
        .route(
            "/admin/tenants",
            get(tenants::list_tenants_handler).post(tenants::create_tenant_handler),
        )
        .route(
            "/admin/tenants/{tenant_id}",
            get(tenants::get_tenant_handler)
                .put(tenants::update_tenant_handler)
                .delete(tenants::delete_tenant_handler),
        )
        .layer(Extension(repository));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        // CORS
        .layer(CorsLayer::permissive())
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
