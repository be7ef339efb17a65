use rocket::serde::Deserialize;

pub mod file_requests;
pub mod folder_requests;

/// body of a rename, for both files and folders
#[derive(Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct RenameRequest {
    pub name: Option<String>,
}

/// body of a move, for both files and folders. A missing or `0` parent means the root
#[derive(Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct MoveRequest {
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<u32>,
}
