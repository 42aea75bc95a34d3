use crate::tools::analyze;
use crate::types::*;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/analyze", post(analyze_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "cite-scout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<ErrorResponse>)> {
    // A body that is not JSON is treated like one without a URL.
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected analyze body: {}", rejection);
            AnalyzeRequest::default()
        }
    };

    match analyze::analyze_url(&state, request.url.as_deref()).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            error!("Analyze error: {}", e);
            Err((
                e.status_code(),
                Json(ErrorResponse {
                    error: e.public_message(),
                }),
            ))
        }
    }
}
