use rocket::serde::json::Json;

use crate::model::api::{FolderApi, TreeListingApi};
use crate::model::response::{failure_responses, BasicMessage, ErrorMessage};

#[derive(Responder)]
pub enum GetTreeResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<TreeListingApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum GetFolderResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<FolderApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum CreateFolderResponse {
    #[response(status = 201, content_type = "json")]
    Created(Json<FolderApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<ErrorMessage>),
}

/// used for both renames and moves
#[derive(Responder)]
pub enum UpdateFolderResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<FolderApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum DeleteFolderResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<ErrorMessage>),
}

failure_responses!(
    GetTreeResponse,
    GetFolderResponse,
    CreateFolderResponse,
    UpdateFolderResponse,
    DeleteFolderResponse
);
