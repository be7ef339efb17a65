use chrono::NaiveDateTime;
use rocket::serde::{Deserialize, Serialize};

use crate::model::repository::{FileRecord, Folder};
use crate::service::export_service::{ExportedFile, ExportedFolder, TreeExport};
use crate::service::folder_service::TreeListing;

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct FolderApi {
    pub id: u32,
    pub name: String,
    /// `None` only for the shared root
    #[serde(rename = "parentId")]
    pub parent_id: Option<u32>,
    pub path: String,
    #[serde(rename = "createDate")]
    pub create_date: NaiveDateTime,
    #[serde(rename = "updateDate")]
    pub update_date: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct FileApi {
    pub id: u32,
    pub name: String,
    #[serde(rename = "parentId")]
    pub parent_id: u32,
    #[serde(rename = "type")]
    pub file_type: String,
    pub size: u64,
    #[serde(rename = "isUploaded")]
    pub is_uploaded: bool,
    /// left out of listings, only sent when a single file is requested or saved
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
    #[serde(rename = "createDate")]
    pub create_date: NaiveDateTime,
    #[serde(rename = "updateDate")]
    pub update_date: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct TreeListingApi {
    pub folders: Vec<FolderApi>,
    pub files: Vec<FileApi>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ExportedFolderApi {
    pub id: u32,
    pub name: String,
    /// relative to the top of the user's tree, e.g. `Work/Projects`
    pub path: String,
    #[serde(rename = "parentId")]
    pub parent_id: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ExportedFileApi {
    pub path: String,
    pub content: String,
    pub metadata: FileApi,
}

/// the manifest of a full tree export
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ExportApi {
    #[serde(rename = "exportDate")]
    pub export_date: NaiveDateTime,
    #[serde(rename = "totalFiles")]
    pub total_files: usize,
    #[serde(rename = "totalFolders")]
    pub total_folders: usize,
    pub folders: Vec<ExportedFolderApi>,
    pub files: Vec<ExportedFileApi>,
}

impl From<Folder> for FolderApi {
    fn from(value: Folder) -> Self {
        Self {
            id: value.id,
            name: value.name,
            parent_id: value.parent_id,
            path: value.path,
            create_date: value.create_date,
            update_date: value.update_date,
        }
    }
}

impl FileApi {
    /// the file's metadata, without its content
    pub fn metadata(value: &FileRecord) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            parent_id: value.parent_id,
            file_type: value.file_type.clone(),
            size: value.size,
            is_uploaded: value.content.is_uploaded(),
            content: None,
            create_date: value.create_date,
            update_date: value.update_date,
        }
    }
}

impl From<FileRecord> for FileApi {
    fn from(value: FileRecord) -> Self {
        let mut api = FileApi::metadata(&value);
        api.content = Some(value.content.text().to_string());
        api
    }
}

impl From<TreeListing> for TreeListingApi {
    fn from(value: TreeListing) -> Self {
        Self {
            folders: value.folders.into_iter().map(FolderApi::from).collect(),
            files: value.files.iter().map(FileApi::metadata).collect(),
        }
    }
}

impl From<ExportedFolder> for ExportedFolderApi {
    fn from(value: ExportedFolder) -> Self {
        Self {
            id: value.folder.id,
            name: value.folder.name,
            path: value.path,
            parent_id: value.folder.parent_id,
        }
    }
}

impl From<ExportedFile> for ExportedFileApi {
    fn from(value: ExportedFile) -> Self {
        Self {
            metadata: FileApi::metadata(&value.file),
            path: value.path,
            content: value.content,
        }
    }
}

impl From<TreeExport> for ExportApi {
    fn from(value: TreeExport) -> Self {
        Self {
            export_date: value.export_date,
            total_files: value.files.len(),
            total_folders: value.folders.len(),
            folders: value.folders.into_iter().map(ExportedFolderApi::from).collect(),
            files: value.files.into_iter().map(ExportedFileApi::from).collect(),
        }
    }
}
