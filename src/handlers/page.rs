use axum::response::Html;
use axum::Json;

static INDEX_HTML: &str = include_str!("../web/index.html");

pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
