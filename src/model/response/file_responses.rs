use once_cell::sync::Lazy;
use regex::Regex;
use rocket::http::{Header, RawStr};
use rocket::serde::json::Json;

use crate::model::api::{ExportApi, FileApi};
use crate::model::response::{failure_responses, BasicMessage, ErrorMessage};
use crate::service::file_service::FileDownload;

static UNSAFE_FILENAME_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").unwrap());

/// raw file bytes sent as a download. The plain `filename` is ascii-only for old clients,
/// `filename*` carries the real name
#[derive(Responder)]
#[response(content_type = "binary")]
pub struct FileAttachment {
    pub bytes: Vec<u8>,
    pub disposition: Header<'static>,
}

impl From<FileDownload> for FileAttachment {
    fn from(download: FileDownload) -> Self {
        let safe_name = UNSAFE_FILENAME_CHARS.replace_all(&download.name, "_");
        let encoded_name = RawStr::new(&download.name).percent_encode();
        FileAttachment {
            bytes: download.bytes,
            disposition: Header::new(
                "Content-Disposition",
                format!("attachment; filename=\"{safe_name}\"; filename*=UTF-8''{encoded_name}"),
            ),
        }
    }
}

#[derive(Responder)]
pub enum GetFileResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<FileApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum SaveFileResponse {
    #[response(status = 201, content_type = "json")]
    Created(Json<FileApi>),
    /// the content of an existing file was replaced
    #[response(status = 200, content_type = "json")]
    Updated(Json<FileApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<ErrorMessage>),
}

/// used for both renames and moves
#[derive(Responder)]
pub enum UpdateFileResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<FileApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum DeleteFileResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum DownloadFileResponse {
    #[response(status = 200)]
    Success(FileAttachment),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum ExportResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<ExportApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<ErrorMessage>),
}

failure_responses!(
    GetFileResponse,
    DownloadFileResponse,
    SaveFileResponse,
    UpdateFileResponse,
    DeleteFileResponse,
    ExportResponse
);

#[cfg(test)]
mod tests {
    use super::*;

    fn disposition(name: &str) -> String {
        let attachment = FileAttachment::from(FileDownload {
            name: name.to_string(),
            bytes: vec![],
        });
        attachment.disposition.value().to_string()
    }

    #[test]
    fn disposition_of_plain_name() {
        assert_eq!(
            "attachment; filename=\"notes.md\"; filename*=UTF-8''notes.md",
            disposition("notes.md")
        );
    }

    #[test]
    fn disposition_replaces_unsafe_chars() {
        let value = disposition("my \"notes\".md");
        assert!(value.starts_with("attachment; filename=\"my__notes_.md\"; filename*=UTF-8''my"));
        assert!(!value.contains("my \""));
    }
}
