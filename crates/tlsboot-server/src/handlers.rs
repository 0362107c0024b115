//! HTTP request handlers for the harness endpoints.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};

/// Shared state for the harness handlers.
#[derive(Debug)]
pub struct AppState {
    /// Directory uploaded files are saved into.
    pub upload_dir: PathBuf,
}

/// Body accepted by the JSON echo endpoint.
#[derive(Debug, Deserialize)]
pub struct EchoRequest {
    /// Message to echo back.
    pub message: String,
}

/// Handle GET / - greeting.
pub async fn home() -> &'static str {
    "Welcome to the TLS test server!"
}

/// Handle POST /postjson - decode a JSON body and echo its message.
pub async fn post_json(Json(body): Json<EchoRequest>) -> String {
    debug!(message = %body.message, "JSON echo request");
    format!("Received JSON: {}", body.message)
}

/// Handle POST /upload - save the `uploadfile` multipart field.
///
/// Only the basename of the client-supplied filename is used, so uploads
/// cannot escape the configured upload directory.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<String> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("failed to read multipart field: {e}")))?
    {
        if field.name() == Some("uploadfile") {
            filename = field.file_name().map(ToString::to_string);
            file_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("failed to read file: {e}")))?
                    .to_vec(),
            );
        }
    }

    let file_data =
        file_data.ok_or_else(|| ApiError::BadRequest("missing uploadfile field".to_string()))?;
    let filename = sanitize_filename(filename.as_deref());

    tokio::fs::create_dir_all(&state.upload_dir)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to create upload directory: {e}")))?;

    let dest = state.upload_dir.join(&filename);
    tokio::fs::write(&dest, &file_data)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to save {}: {e}", dest.display())))?;

    info!(file = %dest.display(), bytes = file_data.len(), "File uploaded");

    Ok(format!("File uploaded successfully: {filename}"))
}

/// Reduces a client-supplied filename to a safe basename.
fn sanitize_filename(name: Option<&str>) -> String {
    name.and_then(|n| Path::new(n).file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.bin".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_plain_name() {
        assert_eq!(sanitize_filename(Some("report.txt")), "report.txt");
    }

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(sanitize_filename(Some("../../etc/passwd")), "passwd");
        assert_eq!(sanitize_filename(Some("/tmp/x/file.bin")), "file.bin");
    }

    #[test]
    fn sanitize_missing_name_falls_back() {
        assert_eq!(sanitize_filename(None), "upload.bin");
        assert_eq!(sanitize_filename(Some("..")), "upload.bin");
    }

    #[tokio::test]
    async fn home_greeting() {
        assert_eq!(home().await, "Welcome to the TLS test server!");
    }

    #[tokio::test]
    async fn post_json_echoes_message() {
        let reply = post_json(Json(EchoRequest {
            message: "Hello, server!".to_string(),
        }))
        .await;
        assert_eq!(reply, "Received JSON: Hello, server!");
    }
}
