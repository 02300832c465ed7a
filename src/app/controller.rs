use axum::Json;
use serde_json::{json, Value};

pub async fn get_root() -> Json<Value> {
    Json(json!({
        "message": "WordCloud API",
        "endpoints": {
            "/generate-wordcloud": "POST - Generate wordcloud from comments",
            "/health": "GET - Health check"
        }
    }))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
