use axum::{
    Json,
    body::Bytes,
    extract::State,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::handlers::image_validation::{InvalidReason, extension_for, validate_magic_bytes};
use crate::infra::app_state::AppState;
use verdex_core::ApiResponse;

/// Public prefix uploaded files are served under.
pub const UPLOADS_PREFIX: &str = "/uploads/";

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub image_url: String,
    pub content_type: String,
}

/// `POST /upload` — raw image bytes in, public URL out.
pub async fn upload_image_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ApiResponse<UploadResponse>>> {
    let content_type = validate_magic_bytes(&body).map_err(|reason| match reason {
        InvalidReason::TooSmall => AppError::bad_request("upload too small to be an image"),
        InvalidReason::UnrecognizedFormat => {
            AppError::bad_request("unrecognized image format")
        }
    })?;

    let dir = state.config.data_dir.join("uploads");
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|err| AppError::internal(format!("creating uploads dir: {err}")))?;

    let filename = format!("{}.{}", Uuid::new_v4().simple(), extension_for(content_type));
    let path = dir.join(&filename);
    tokio::fs::write(&path, &body)
        .await
        .map_err(|err| AppError::internal(format!("writing upload: {err}")))?;

    info!(file = %filename, bytes = body.len(), content_type, "image uploaded");
    Ok(Json(ApiResponse::success(UploadResponse {
        image_url: format!("{UPLOADS_PREFIX}{filename}"),
        content_type: content_type.to_string(),
    })))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteUploadRequest {
    pub image_url: String,
}

/// `DELETE /upload` — by the URL returned at upload time.
pub async fn delete_image_handler(
    State(state): State<AppState>,
    Json(request): Json<DeleteUploadRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let filename = request
        .image_url
        .strip_prefix(UPLOADS_PREFIX)
        .ok_or_else(|| AppError::bad_request("not an uploaded image URL"))?;

    // Single path component only; no escaping the uploads directory.
    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
    {
        return Err(AppError::bad_request("invalid upload filename"));
    }

    let path = state.config.data_dir.join("uploads").join(filename);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => {
            info!(file = %filename, "uploaded image deleted");
            Ok(Json(
                ApiResponse::success(()).with_message("image deleted".to_string()),
            ))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::not_found("no such uploaded image"))
        }
        Err(err) => Err(AppError::internal(format!("deleting upload: {err}"))),
    }
}
