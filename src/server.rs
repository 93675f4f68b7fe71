//! HTTP surface: a single question endpoint over the answer pipeline.
//!
//! Each request snapshots the data directory and runs the pipeline
//! independently; there is no shared cache and no locking. Concurrent
//! requests may decode the same file redundantly, which is fine because
//! nothing is mutated.

use crate::answer::{MatchResult, select_and_answer};
use crate::config::MatchConfig;
use crate::error::Result;
use crate::select::DirSnapshot;
use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Read-only server state shared across requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub config: MatchConfig,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub images: Vec<String>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new().route("/ask", post(ask)).with_state(state)
}

/// Bind and serve until the task is dropped.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let router = build_router(Arc::new(state));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}

type AskError = (StatusCode, Json<serde_json::Value>);

async fn ask(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskRequest>,
) -> std::result::Result<Json<AskResponse>, AskError> {
    let worker = {
        let state = Arc::clone(&state);
        // Decoding is blocking: file I/O plus CPU-bound parsing.
        tokio::task::spawn_blocking(move || -> Result<Option<MatchResult>> {
            let snapshot = DirSnapshot::scan(&state.data_dir)?;
            Ok(select_and_answer(&request.question, &snapshot, &state.config)?)
        })
    };

    match worker.await {
        Ok(Ok(Some(result))) => Ok(Json(AskResponse {
            answer: result.content,
            filename: Some(result.filename),
            images: result.images,
        })),
        Ok(Ok(None)) => Ok(Json(AskResponse {
            answer: state.config.fallback_message.clone(),
            filename: None,
            images: Vec::new(),
        })),
        Ok(Err(error)) => {
            tracing::error!("request failed: {:#}", error);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": error.to_string() })),
            ))
        }
        Err(join_error) => {
            tracing::error!("answer task failed: {}", join_error);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "internal error" })),
            ))
        }
    }
}
