//! Composición del router HTTP de la API

pub mod customer_routes;
pub mod parcel_routes;
pub mod scan_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/customers", customer_routes::create_customer_router())
        // Los scans cuelgan de /parcels/:tracking_code/scans, así que su
        // router se fusiona con el de parcels bajo el mismo prefijo
        .nest(
            "/parcels",
            parcel_routes::create_parcel_router().merge(scan_routes::create_scan_router()),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(&state.config))
        .with_state(state)
}

/// GET /health - Health check del servicio
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "parcel-tracking",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
