use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::pipeline::observer::TracingObserver;
use crate::server::{ApiError, ApiResult, AppState};
use crate::types::AnalysisReport;

#[derive(Deserialize, Debug)]
pub struct UploadRequest {
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn home() -> &'static str {
    "transcript-graph backend is running."
}

/// Replace the active document
///
/// A body that is not JSON, or has no string `text` field, is a missing input.
pub async fn upload_text(
    State(state): State<AppState>,
    payload: Result<Json<UploadRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let text = match payload {
        Ok(Json(request)) => request.text,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Rejected upload body");
            None
        }
    };

    let bytes = text.as_ref().map(String::len);
    state.store.ingest(text).inspect_err(|e| warn!("Upload rejected: {e}"))?;
    info!(bytes, "Transcript stored");

    Ok(Json(MessageResponse {
        message: "Text stored".to_string(),
    }))
}

/// Analyze the active document
pub async fn preprocess(State(state): State<AppState>) -> ApiResult<Json<AnalysisReport>> {
    let text = state
        .store
        .require_document()
        .inspect_err(|e| warn!("Analysis rejected: {e}"))?;

    let pipeline = state.pipeline.clone();
    let report = tokio::task::spawn_blocking(move || {
        pipeline.analyze_with(&text, &mut TracingObserver)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    info!(
        nodes = report.node_count(),
        links = report.link_count(),
        tokens = report.total_tokens(),
        "Transcript analyzed"
    );

    Ok(Json(report))
}

