use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::debug;

use crate::state::AppState;

/// GET /health
/// Returns service status plus reachability of the analysis backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let backend = match state
        .backend
        .get_json::<Value>(&state.config.backend_health_path)
        .await
    {
        Ok(_) => "reachable",
        Err(e) => {
            debug!("Analysis backend health probe failed: {e}");
            "unreachable"
        }
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "placement-api",
        "services": {
            "ats_calculator": "active",
            "analysis_backend": backend
        }
    }))
}
