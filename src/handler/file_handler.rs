use rocket::serde::json::Json;

use crate::guard::UserAuth;
use crate::handler::run_blocking;
use crate::model::api::FileApi;
use crate::model::error::file_errors::{CreateFileError, RenameFileError, UpdateFileError};
use crate::model::request::file_requests::SaveFileRequest;
use crate::model::request::{MoveRequest, RenameRequest};
use crate::model::response::file_responses::{
    DeleteFileResponse, DownloadFileResponse, FileAttachment, GetFileResponse, SaveFileResponse,
    UpdateFileResponse,
};
use crate::model::response::BasicMessage;
use crate::service::file_service;
use crate::store::external::DiskFileStore;

#[get("/file/<id>")]
pub async fn get_file(id: u32, auth: UserAuth) -> GetFileResponse {
    let user_id = auth.user_id;
    let res = run_blocking(move || {
        file_service::get_file(user_id, id, &DiskFileStore::from_config())
    })
    .await;
    match res {
        Ok(file) => GetFileResponse::Success(Json(FileApi::from(file))),
        Err(e) => GetFileResponse::failure(e.as_ref()),
    }
}

/// sends the file's bytes as an attachment. Uploads are read from the upload directory
#[get("/download/<id>")]
pub async fn download_file(id: u32, auth: UserAuth) -> DownloadFileResponse {
    let user_id = auth.user_id;
    let res = run_blocking(move || {
        file_service::download_file(user_id, id, &DiskFileStore::from_config())
    })
    .await;
    match res {
        Ok(download) => DownloadFileResponse::Success(FileAttachment::from(download)),
        Err(e) => DownloadFileResponse::failure(e.as_ref()),
    }
}

/// creates a note, or replaces the content of an existing one when the body carries a `fileId`
#[post("/file", data = "<request>")]
pub async fn save_file(request: Json<SaveFileRequest>, auth: UserAuth) -> SaveFileResponse {
    let request = request.into_inner();
    let user_id = auth.user_id;
    if let Some(file_id) = request.file_id {
        let Some(content) = request.content else {
            return SaveFileResponse::failure(&UpdateFileError::MissingContent);
        };
        let res = run_blocking(move || {
            file_service::update_file_content(user_id, file_id, &content, &DiskFileStore::from_config())
        })
        .await;
        return match res {
            Ok(file) => SaveFileResponse::Updated(Json(FileApi::from(file))),
            Err(e) => SaveFileResponse::failure(e.as_ref()),
        };
    }
    let Some(name) = request.name else {
        return SaveFileResponse::failure(&CreateFileError::InvalidName);
    };
    // new notes may start out empty
    let content = request.content.unwrap_or_default();
    let parent_id = request.parent_id;
    let res = run_blocking(move || {
        file_service::create_file(user_id, &name, &content, parent_id, None)
    })
    .await;
    match res {
        Ok(file) => SaveFileResponse::Created(Json(FileApi::from(file))),
        Err(e) => SaveFileResponse::failure(e.as_ref()),
    }
}

#[put("/file/<id>/rename", data = "<request>")]
pub async fn rename_file(id: u32, request: Json<RenameRequest>, auth: UserAuth) -> UpdateFileResponse {
    let Some(name) = request.into_inner().name else {
        return UpdateFileResponse::failure(&RenameFileError::InvalidName);
    };
    let user_id = auth.user_id;
    match run_blocking(move || file_service::rename_file(user_id, id, &name)).await {
        Ok(file) => UpdateFileResponse::Success(Json(FileApi::from(file))),
        Err(e) => UpdateFileResponse::failure(e.as_ref()),
    }
}

#[put("/file/<id>/move", data = "<request>")]
pub async fn move_file(id: u32, request: Json<MoveRequest>, auth: UserAuth) -> UpdateFileResponse {
    let user_id = auth.user_id;
    let parent_id = request.parent_id;
    match run_blocking(move || file_service::move_file(user_id, id, parent_id)).await {
        Ok(file) => UpdateFileResponse::Success(Json(FileApi::from(file))),
        Err(e) => UpdateFileResponse::failure(e.as_ref()),
    }
}

#[delete("/file/<id>")]
pub async fn delete_file(id: u32, auth: UserAuth) -> DeleteFileResponse {
    let user_id = auth.user_id;
    match run_blocking(move || file_service::delete_file(user_id, id)).await {
        Ok(()) => DeleteFileResponse::Success(BasicMessage::new("File deleted.")),
        Err(e) => DeleteFileResponse::failure(e.as_ref()),
    }
}
