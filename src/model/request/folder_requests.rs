use rocket::serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct CreateFolderRequest {
    pub name: Option<String>,
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<u32>,
}

/// query string of a tree listing
#[derive(FromForm, Debug)]
pub struct TreeQuery {
    #[field(name = "parentId")]
    pub parent_id: Option<u32>,
}
