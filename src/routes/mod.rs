pub mod ship_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router completo de la aplicación con sus capas
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/rest/ships", ship_routes::create_ship_router())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de salud
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
