use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET / and GET /health
/// Fixed identity string plus a timestamp, for uptime checks.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "メディクロック求人ボット Webhookサーバー",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
