use rocket::serde::Deserialize;

/// creates a file, or replaces the content of an existing one if `file_id` is set
#[derive(Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct SaveFileRequest {
    /// required when creating
    pub name: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<u32>,
    #[serde(rename = "fileId", default)]
    pub file_id: Option<u32>,
}
