use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::application::EnhancePromptUseCase;
use crate::domain::{DomainError, Mode};

/// Request body for `POST /api/enhance`.
#[derive(Debug, Deserialize)]
pub struct EnhanceBody {
    pub prompt: String,
    pub mode: Mode,
}

#[derive(Debug, Serialize)]
pub struct EnhanceReply {
    pub enhanced: String,
}

struct ApiError(DomainError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            DomainError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Validation", "detail": msg}),
            ),
            DomainError::Service(msg) => (
                StatusCode::BAD_GATEWAY,
                json!({"error": "Upstream", "detail": msg}),
            ),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "Internal", "detail": other.to_string()}),
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// HTTP routes exposing prompt enhancement.
///
/// The completion-service key lives only in this process; browsers and other
/// clients talk to `/api/enhance` and never see it.
pub fn router(use_case: Arc<EnhancePromptUseCase>) -> Router {
    Router::new()
        .route("/api/enhance", post(enhance))
        .route("/health", get(health))
        .with_state(use_case)
}

pub async fn serve(use_case: Arc<EnhancePromptUseCase>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Prompt enhancer listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(use_case)).await?;
    Ok(())
}

async fn enhance(
    State(use_case): State<Arc<EnhancePromptUseCase>>,
    Json(body): Json<EnhanceBody>,
) -> Result<Json<EnhanceReply>, ApiError> {
    match use_case.execute(&body.prompt, body.mode).await {
        Ok(enhanced) => Ok(Json(EnhanceReply { enhanced })),
        Err(e) => {
            warn!("Enhance request failed: {}", e);
            Err(ApiError(e))
        }
    }
}

async fn health() -> &'static str {
    "ok"
}
