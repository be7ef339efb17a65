use rocket::serde::json::Json;

use crate::guard::UserAuth;
use crate::handler::run_blocking;
use crate::model::api::{FolderApi, TreeListingApi};
use crate::model::error::folder_errors::{CreateFolderError, RenameFolderError};
use crate::model::request::folder_requests::{CreateFolderRequest, TreeQuery};
use crate::model::request::{MoveRequest, RenameRequest};
use crate::model::response::folder_responses::{
    CreateFolderResponse, DeleteFolderResponse, GetFolderResponse, GetTreeResponse,
    UpdateFolderResponse,
};
use crate::model::response::BasicMessage;
use crate::service::folder_service;

#[get("/tree?<query..>")]
pub async fn get_tree(query: TreeQuery, auth: UserAuth) -> GetTreeResponse {
    let user_id = auth.user_id;
    let parent_id = query.parent_id;
    match run_blocking(move || folder_service::list_children(user_id, parent_id)).await {
        Ok(listing) => GetTreeResponse::Success(Json(TreeListingApi::from(listing))),
        Err(e) => GetTreeResponse::failure(e.as_ref()),
    }
}

#[get("/folder/<id>")]
pub async fn get_folder(id: u32, auth: UserAuth) -> GetFolderResponse {
    let user_id = auth.user_id;
    match run_blocking(move || folder_service::get_folder(user_id, id)).await {
        Ok(folder) => GetFolderResponse::Success(Json(FolderApi::from(folder))),
        Err(e) => GetFolderResponse::failure(e.as_ref()),
    }
}

#[post("/folder", data = "<request>")]
pub async fn create_folder(request: Json<CreateFolderRequest>, auth: UserAuth) -> CreateFolderResponse {
    let request = request.into_inner();
    let Some(name) = request.name else {
        return CreateFolderResponse::failure(&CreateFolderError::InvalidName);
    };
    let user_id = auth.user_id;
    match run_blocking(move || folder_service::create_folder(user_id, &name, request.parent_id)).await {
        Ok(folder) => CreateFolderResponse::Created(Json(FolderApi::from(folder))),
        Err(e) => CreateFolderResponse::failure(e.as_ref()),
    }
}

#[put("/folder/<id>/rename", data = "<request>")]
pub async fn rename_folder(id: u32, request: Json<RenameRequest>, auth: UserAuth) -> UpdateFolderResponse {
    let Some(name) = request.into_inner().name else {
        return UpdateFolderResponse::failure(&RenameFolderError::InvalidName);
    };
    let user_id = auth.user_id;
    match run_blocking(move || folder_service::rename_folder(user_id, id, &name)).await {
        Ok(folder) => UpdateFolderResponse::Success(Json(FolderApi::from(folder))),
        Err(e) => UpdateFolderResponse::failure(e.as_ref()),
    }
}

#[put("/folder/<id>/move", data = "<request>")]
pub async fn move_folder(id: u32, request: Json<MoveRequest>, auth: UserAuth) -> UpdateFolderResponse {
    let user_id = auth.user_id;
    let parent_id = request.parent_id;
    match run_blocking(move || folder_service::move_folder(user_id, id, parent_id)).await {
        Ok(folder) => UpdateFolderResponse::Success(Json(FolderApi::from(folder))),
        Err(e) => UpdateFolderResponse::failure(e.as_ref()),
    }
}

#[delete("/folder/<id>")]
pub async fn delete_folder(id: u32, auth: UserAuth) -> DeleteFolderResponse {
    let user_id = auth.user_id;
    match run_blocking(move || folder_service::delete_folder(user_id, id)).await {
        Ok(()) => DeleteFolderResponse::Success(BasicMessage::new("Folder deleted.")),
        Err(e) => DeleteFolderResponse::failure(e.as_ref()),
    }
}
