use rocket::serde::json::Json;

use crate::guard::UserAuth;
use crate::handler::run_blocking;
use crate::model::api::ExportApi;
use crate::model::response::file_responses::ExportResponse;
use crate::service::export_service;
use crate::store::external::DiskFileStore;

/// every folder and file the caller owns, with paths resolved relative to the top of their tree
#[get("/export")]
pub async fn export_tree(auth: UserAuth) -> ExportResponse {
    let user_id = auth.user_id;
    let res = run_blocking(move || {
        export_service::export_user_tree(user_id, &DiskFileStore::from_config())
    })
    .await;
    match res {
        Ok(export) => {
            log::info!(
                "Exported {} folders and {} files for user {user_id}",
                export.folders.len(),
                export.files.len()
            );
            ExportResponse::Success(Json(ExportApi::from(export)))
        }
        Err(e) => ExportResponse::failure(e.as_ref()),
    }
}
