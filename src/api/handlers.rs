//! Request handlers for the `/api/servers` routes

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::IntoResponse;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::{ApiError, AppState};
use crate::model::ServerConfig;

type Payload = Result<Json<ServerConfig>, JsonRejection>;

pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Payload,
) -> Result<Json<Value>, ApiError> {
    let Json(config) = payload?;
    let response = state.generator.generate(&config).await?;

    Ok(Json(json!({
        "status": "success",
        "message": "Server generated successfully",
        "location": response.location.display().to_string(),
    })))
}

pub async fn preview(
    State(state): State<Arc<AppState>>,
    payload: Payload,
) -> Result<Json<Value>, ApiError> {
    let Json(config) = payload?;
    let response = state.generator.preview(&config).await?;

    Ok(Json(json!({
        "status": "success",
        "preview": response.text,
    })))
}

pub async fn download(
    State(state): State<Arc<AppState>>,
    payload: Payload,
) -> Result<impl IntoResponse, ApiError> {
    let Json(config) = payload?;
    let archive = state.generator.download_archive(&config).await?;

    // The filename is a validated server name, always a legal header value
    let disposition = format!("attachment; filename=\"{}\"", archive.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        archive.bytes,
    ))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
