use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;

use crate::model::error::file_errors::ExportError;
use crate::model::repository::{FileRecord, Folder};
use crate::repository::{file_repository, folder_repository};
use crate::service::connect;
use crate::store::external::ExternalFileStore;
use crate::store::{file_store, log_db_error};
use crate::util::now;

#[derive(Debug, PartialEq)]
pub struct ExportedFolder {
    /// folder names from the top of the user's tree, joined with `/` and without a leading slash
    pub path: String,
    pub folder: Folder,
}

#[derive(Debug, PartialEq)]
pub struct ExportedFile {
    /// the containing folder's export path plus the file name
    pub path: String,
    pub content: String,
    pub file: FileRecord,
}

/// everything a user owns, flattened with paths resolved, ready to be written into an archive
#[derive(Debug, PartialEq)]
pub struct TreeExport {
    pub export_date: NaiveDateTime,
    pub folders: Vec<ExportedFolder>,
    pub files: Vec<ExportedFile>,
}

/// fetches every folder and file the user owns in two queries and resolves their paths in memory
pub fn export_user_tree(
    user_id: u32,
    store: &dyn ExternalFileStore,
) -> Result<TreeExport, ExportError> {
    let con = connect(ExportError::DbError)?;
    let db_error = |e: rusqlite::Error| {
        log_db_error(&format!("Failed to export files for user {user_id}"), &e);
        ExportError::DbError
    };
    let folders = folder_repository::get_folders_for_user(user_id, &con).map_err(db_error)?;
    let files = file_repository::get_files_for_user(user_id, &con).map_err(db_error)?;
    let by_id: HashMap<u32, &Folder> = folders.iter().map(|f| (f.id, f)).collect();
    let mut resolved: HashMap<u32, String> = HashMap::new();
    for folder in &folders {
        let path = resolve_folder_path(folder.id, &by_id);
        resolved.insert(folder.id, path);
    }
    let exported_files = files
        .into_iter()
        .map(|file| {
            let path = join(resolved.get(&file.parent_id).map(String::as_str).unwrap_or(""), &file.name);
            let content = file_store::load_content(&file, store);
            ExportedFile { path, content, file }
        })
        .collect();
    let exported_folders = folders
        .into_iter()
        .map(|folder| ExportedFolder {
            path: resolved.remove(&folder.id).unwrap_or_default(),
            folder,
        })
        .collect();
    Ok(TreeExport {
        export_date: now(),
        folders: exported_folders,
        files: exported_files,
    })
}

/// walks parent links up from `folder_id` until reaching a folder that isn't in `folders` (the shared root).
/// A parent chain that loops back on itself stops at the repeated folder
fn resolve_folder_path(folder_id: u32, folders: &HashMap<u32, &Folder>) -> String {
    let mut names = Vec::new();
    let mut seen = HashSet::new();
    let mut current = Some(folder_id);
    while let Some(id) = current {
        let Some(folder) = folders.get(&id) else {
            break;
        };
        if !seen.insert(id) {
            log::warn!("Folder {id} is its own ancestor, cutting its export path short");
            break;
        }
        names.push(folder.name.as_str());
        current = folder.parent_id;
    }
    names.reverse();
    names.join("/")
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}
