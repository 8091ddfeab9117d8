use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use futures::StreamExt;
use serde::Serialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::upload::application::use_cases::upload_background::UploadBackgroundError;
use crate::AppState;

// Hard cap while draining the stream; the per-type limit is enforced
// by the use case once the content type is known.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub path: String,
}

#[post("/api/upload/background")]
pub async fn upload_background_handler(
    user: AuthenticatedUser,
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(f) => f,
            Err(e) => {
                return ApiResponse::bad_request(
                    "INVALID_MULTIPART",
                    &format!("Invalid multipart data: {}", e),
                )
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let content_type = match field.content_type() {
            Some(mime) => mime.essence_str().to_string(),
            None => {
                return ApiResponse::bad_request(
                    "UNSUPPORTED_FILE_TYPE",
                    "File part must declare a content type",
                )
            }
        };

        let mut buffer = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => {
                    if buffer.len() + bytes.len() > MAX_UPLOAD_BYTES {
                        return ApiResponse::bad_request(
                            "FILE_TOO_LARGE",
                            "File exceeds the maximum upload size",
                        );
                    }
                    buffer.extend_from_slice(&bytes);
                }
                Err(e) => {
                    error!("Failed to read upload chunk: {}", e);
                    return ApiResponse::bad_request(
                        "INVALID_MULTIPART",
                        "Failed to read uploaded file",
                    );
                }
            }
        }

        file_data = Some((content_type, buffer));
    }

    let (content_type, bytes) = match file_data {
        Some(parts) => parts,
        None => {
            return ApiResponse::bad_request("VALIDATION_ERROR", "Missing 'file' form field")
        }
    };

    match data
        .upload_background_use_case
        .execute(user.user_id, &content_type, bytes)
        .await
    {
        Ok(path) => {
            info!(user_id = %user.user_id, path = %path, "Background uploaded");
            ApiResponse::success(UploadResponse { path })
        }
        Err(UploadBackgroundError::UnsupportedType) => ApiResponse::bad_request(
            "UNSUPPORTED_FILE_TYPE",
            "Only jpeg, png, webp images and mp4, webm videos are accepted",
        ),
        Err(UploadBackgroundError::FileTooLarge) => ApiResponse::bad_request(
            "FILE_TOO_LARGE",
            "File exceeds the limit for its type",
        ),
        Err(UploadBackgroundError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UploadBackgroundError::StorageError(e)) => {
            error!("Storage error saving background: {}", e);
            ApiResponse::internal_error()
        }
        Err(UploadBackgroundError::RepositoryError(e)) => {
            error!("Repository error saving background path: {}", e);
            ApiResponse::internal_error()
        }
    }
}
