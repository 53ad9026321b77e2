//! Single-file multipart upload handler.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use tracing::{error, info, warn};

use crate::pairs::{self, PairResult};

use super::ServerState;

/// `POST /api/upload` with a `file` form part.
///
/// Oversized payloads get 413 with an empty list body, processing failures
/// an empty 400; success is the result rows of the most collaborative
/// pair.
pub async fn handle_upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> std::result::Result<Response, StatusCode> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Unreadable multipart request: {e}");
        StatusCode::BAD_REQUEST
    })? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload.csv").to_string();
            let bytes = field.bytes().await.map_err(|e| {
                warn!("Failed to read uploaded file: {e}");
                StatusCode::BAD_REQUEST
            })?;
            file = Some((filename, bytes.to_vec()));
            break;
        }
    }

    let Some((filename, bytes)) = file else {
        warn!("Upload request without a 'file' part");
        return Err(StatusCode::BAD_REQUEST);
    };

    info!(
        "Received file upload request: filename='{}', size={} bytes",
        filename,
        bytes.len()
    );

    let max_bytes = state.config.max_upload_bytes();
    if bytes.len() > max_bytes {
        warn!(
            "File size {} exceeds max allowed size {}",
            bytes.len(),
            max_bytes
        );
        return Ok((
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(Vec::<PairResult>::new()),
        )
            .into_response());
    }

    let today = Local::now().date_naive();
    match pairs::most_collaborative(bytes.as_slice(), today) {
        Ok(results) => {
            info!("Processed CSV successfully, found {} result rows", results.len());
            Ok((StatusCode::OK, Json(results)).into_response())
        }
        Err(e) => {
            error!("Error processing CSV file '{}': {}", filename, e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
