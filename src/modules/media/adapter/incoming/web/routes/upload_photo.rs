use actix_multipart::Multipart;
use actix_web::{http::header, post, web, HttpRequest, HttpResponse, Responder};
use futures::StreamExt;
use serde::Serialize;
use tracing::{error, warn};

use crate::{
    api::schemas::{ErrorResponse, PhotoUploadResponse},
    media::application::ports::incoming::use_cases::{EncodePhotoCommand, EncodePhotoCommandError},
    shared::api::ApiResponse,
    AppState,
};

pub const PHOTO_FIELD: &str = "photo";
pub const NO_FILE_UPLOADED: &str = "No file uploaded";
pub const FILE_TOO_LARGE: &str = "File too large";
pub const UPLOAD_FAILED: &str = "Failed to upload photo";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PhotoUploadBody {
    photo_url: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Upload a profile photo
///
/// The file comes back inlined as a data URI; nothing is stored server-side.
#[utoipa::path(
    post,
    path = "/api/upload-photo",
    tag = "media",
    request_body(content_type = "multipart/form-data",
        description = "Single file in the `photo` field"),
    responses(
        (status = 200, description = "Photo encoded", body = PhotoUploadResponse),
        (status = 400, description = "No `photo` part, or file above the size limit",
            body = ErrorResponse,
            example = json!({ "success": false, "error": "No file uploaded" })),
        (status = 500, description = "Upload stream failed", body = ErrorResponse),
    )
)]
#[post("/api/upload-photo")]
pub async fn upload_photo_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
    mut payload: Multipart,
) -> impl Responder {
    if !is_multipart(&req) {
        warn!("Photo upload without a multipart body");
        return ApiResponse::bad_request(NO_FILE_UPLOADED);
    }

    let policy = &data.photo_upload_policy;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                error!("Failed to read multipart body: {}", e);
                return ApiResponse::internal_error(UPLOAD_FAILED);
            }
        };

        // A `photo` part only counts as a file when it carries a filename.
        let is_photo = field.content_disposition().is_some_and(|cd| {
            cd.get_name() == Some(PHOTO_FIELD) && cd.get_filename().is_some()
        });
        let mime_type = field.content_type().map(|m| m.essence_str().to_string());

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    error!("Failed to read multipart field: {}", e);
                    return ApiResponse::internal_error(UPLOAD_FAILED);
                }
            };
            if !is_photo {
                continue;
            }
            // Stop buffering as soon as the limit is crossed.
            if !policy.allows_size((bytes.len() + chunk.len()) as u64) {
                warn!(
                    max_bytes = policy.max_file_size_bytes,
                    "Photo upload rejected: file too large"
                );
                return ApiResponse::bad_request(FILE_TOO_LARGE);
            }
            bytes.extend_from_slice(&chunk);
        }

        if !is_photo {
            continue;
        }

        let command = match EncodePhotoCommand::build(mime_type.as_deref(), bytes, policy) {
            Ok(cmd) => cmd,
            Err(err) => return map_command_error(err),
        };

        let data_uri = data.media.encode_photo.execute(command).await;
        return ApiResponse::success(PhotoUploadBody {
            photo_url: data_uri.into_string(),
        });
    }

    ApiResponse::bad_request(NO_FILE_UPLOADED)
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
}

fn map_command_error(err: EncodePhotoCommandError) -> HttpResponse {
    warn!("Photo upload rejected: {}", err);
    match err {
        EncodePhotoCommandError::FileTooLarge { .. } => ApiResponse::bad_request(FILE_TOO_LARGE),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    use crate::{
        media::application::{
            domain::policies::upload_policy::UploadPolicy, services::EncodePhotoService,
        },
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    const BOUNDARY: &str = "----portfolio-test-boundary";

    struct Part<'a> {
        name: &'a str,
        file_name: Option<&'a str>,
        content_type: Option<&'a str>,
        bytes: &'a [u8],
    }

    fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            let disposition = match part.file_name {
                Some(file) => format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    part.name, file
                ),
                None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name),
            };
            body.extend_from_slice(disposition.as_bytes());
            if let Some(ct) = part.content_type {
                body.extend_from_slice(format!("Content-Type: {}\r\n", ct).as_bytes());
            }
            body.extend_from_slice(b"\r\n");
            body.extend_from_slice(part.bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    async fn upload(policy: UploadPolicy, body: Vec<u8>) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_encode_photo(EncodePhotoService::new())
            .with_photo_upload_policy(policy)
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(upload_photo_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/upload-photo")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(body)
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn photo_part_comes_back_as_data_uri() {
        let bytes = [0x89, b'P', b'N', b'G', 0x0d, 0x0a];
        let body = multipart_body(&[Part {
            name: "photo",
            file_name: Some("me.png"),
            content_type: Some("image/png"),
            bytes: &bytes,
        }]);

        let resp = upload(UploadPolicy::default(), body).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], true);
        let url = json["photoUrl"].as_str().unwrap();
        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), bytes);
    }

    #[actix_web::test]
    async fn part_without_content_type_defaults_to_octet_stream() {
        let body = multipart_body(&[Part {
            name: "photo",
            file_name: Some("me"),
            content_type: None,
            bytes: b"raw",
        }]);

        let resp = upload(UploadPolicy::default(), body).await;

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["photoUrl"], "data:application/octet-stream;base64,cmF3");
    }

    #[actix_web::test]
    async fn other_fields_are_ignored() {
        let body = multipart_body(&[
            Part {
                name: "caption",
                file_name: None,
                content_type: None,
                bytes: b"hello",
            },
            Part {
                name: "photo",
                file_name: Some("me.jpg"),
                content_type: Some("image/jpeg"),
                bytes: b"jpg",
            },
        ]);

        let resp = upload(UploadPolicy::default(), body).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["photoUrl"], "data:image/jpeg;base64,anBn");
    }

    #[actix_web::test]
    async fn missing_photo_field_is_bad_request() {
        let body = multipart_body(&[Part {
            name: "avatar",
            file_name: Some("me.png"),
            content_type: Some("image/png"),
            bytes: b"png",
        }]);

        let resp = upload(UploadPolicy::default(), body).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], NO_FILE_UPLOADED);
    }

    #[actix_web::test]
    async fn photo_field_without_filename_is_not_a_file() {
        let body = multipart_body(&[Part {
            name: "photo",
            file_name: None,
            content_type: None,
            bytes: b"https://example.com/me.png",
        }]);

        let resp = upload(UploadPolicy::default(), body).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], NO_FILE_UPLOADED);
    }

    #[actix_web::test]
    async fn file_above_limit_is_rejected() {
        let body = multipart_body(&[Part {
            name: "photo",
            file_name: Some("big.png"),
            content_type: Some("image/png"),
            bytes: &[7u8; 64],
        }]);

        let resp = upload(UploadPolicy::new(16), body).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], FILE_TOO_LARGE);
    }

    #[actix_web::test]
    async fn non_multipart_request_is_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_encode_photo(EncodePhotoService::new())
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(upload_photo_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/upload-photo")
            .set_json(serde_json::json!({ "photo": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], NO_FILE_UPLOADED);
    }
}
