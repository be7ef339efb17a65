use crate::model::error::folder_errors::{
    CreateFolderError, DeleteFolderError, GetFolderError, ListChildrenError, MoveFolderError,
    RenameFolderError,
};
use crate::model::repository::{FileRecord, Folder};
use crate::service::access::{can_read_folder, owns_folder, resolve_parent};
use crate::service::connect;
use crate::store::{file_store, folder_store, log_db_error};

/// the direct contents of one folder
#[derive(Debug, PartialEq)]
pub struct TreeListing {
    pub folders: Vec<Folder>,
    pub files: Vec<FileRecord>,
}

/// lists the caller's folders and files directly inside `parent_id` (the root if `None`), both ordered by name
pub fn list_children(
    user_id: u32,
    parent_id: Option<u32>,
) -> Result<TreeListing, ListChildrenError> {
    let parent_id = resolve_parent(parent_id);
    let con = connect(ListChildrenError::DbError)?;
    match folder_store::get_folder(parent_id, &con) {
        Ok(parent) if can_read_folder(&parent, user_id) => {}
        Ok(_) | Err(GetFolderError::NotFound) => return Err(ListChildrenError::FolderNotFound),
        Err(GetFolderError::DbError) => return Err(ListChildrenError::DbError),
    };
    let db_error = |e: rusqlite::Error| {
        log_db_error(&format!("Failed to list contents of folder {parent_id}"), &e);
        ListChildrenError::DbError
    };
    let folders = folder_store::list_folder_children(user_id, parent_id, &con).map_err(db_error)?;
    let files = file_store::list_file_children(user_id, parent_id, &con).map_err(db_error)?;
    Ok(TreeListing { folders, files })
}

pub fn get_folder(user_id: u32, folder_id: u32) -> Result<Folder, GetFolderError> {
    let con = connect(GetFolderError::DbError)?;
    let folder = folder_store::get_folder(folder_id, &con)?;
    if can_read_folder(&folder, user_id) {
        Ok(folder)
    } else {
        Err(GetFolderError::NotFound)
    }
}

/// loads the folder, treating one the caller doesn't own the same as one that doesn't exist
fn get_owned_folder<E>(
    user_id: u32,
    folder_id: u32,
    con: &rusqlite::Connection,
    not_found: E,
    db_error: E,
) -> Result<Folder, E> {
    match folder_store::get_folder(folder_id, con) {
        Ok(folder) if owns_folder(&folder, user_id) => Ok(folder),
        Ok(_) | Err(GetFolderError::NotFound) => Err(not_found),
        Err(GetFolderError::DbError) => Err(db_error),
    }
}

pub fn create_folder(
    user_id: u32,
    name: &str,
    parent_id: Option<u32>,
) -> Result<Folder, CreateFolderError> {
    let parent_id = resolve_parent(parent_id);
    let mut con = connect(CreateFolderError::DbError)?;
    match folder_store::get_folder(parent_id, &con) {
        Ok(parent) if can_read_folder(&parent, user_id) => {}
        Ok(_) | Err(GetFolderError::NotFound) => return Err(CreateFolderError::ParentNotFound),
        Err(GetFolderError::DbError) => return Err(CreateFolderError::DbError),
    };
    folder_store::create_folder(name, parent_id, user_id, &mut con)
}

pub fn rename_folder(
    user_id: u32,
    folder_id: u32,
    new_name: &str,
) -> Result<Folder, RenameFolderError> {
    let mut con = connect(RenameFolderError::DbError)?;
    get_owned_folder(
        user_id,
        folder_id,
        &con,
        RenameFolderError::NotFound,
        RenameFolderError::DbError,
    )?;
    folder_store::rename_folder(folder_id, new_name, &mut con)
}

/// moves the folder into `new_parent_id` (the root if `None`).
///
/// No-op moves and cycles are rejected here before the store is asked to do anything; the store repeats the
/// cycle check under its write lock in case another move landed in between
pub fn move_folder(
    user_id: u32,
    folder_id: u32,
    new_parent_id: Option<u32>,
) -> Result<Folder, MoveFolderError> {
    let new_parent_id = resolve_parent(new_parent_id);
    let mut con = connect(MoveFolderError::DbError)?;
    let folder = get_owned_folder(
        user_id,
        folder_id,
        &con,
        MoveFolderError::NotFound,
        MoveFolderError::DbError,
    )?;
    let target = match folder_store::get_folder(new_parent_id, &con) {
        Ok(target) if can_read_folder(&target, user_id) => target,
        Ok(_) | Err(GetFolderError::NotFound) => return Err(MoveFolderError::ParentNotFound),
        Err(GetFolderError::DbError) => return Err(MoveFolderError::DbError),
    };
    folder_store::check_folder_move(&folder, &target)?;
    folder_store::move_folder(folder_id, new_parent_id, &mut con)
}

/// deletes the folder along with everything inside it
pub fn delete_folder(user_id: u32, folder_id: u32) -> Result<(), DeleteFolderError> {
    let mut con = connect(DeleteFolderError::DbError)?;
    get_owned_folder(
        user_id,
        folder_id,
        &con,
        DeleteFolderError::NotFound,
        DeleteFolderError::DbError,
    )?;
    match folder_store::delete_folder(folder_id, &mut con)? {
        true => Ok(()),
        // deleted by someone else in the meantime
        false => Err(DeleteFolderError::NotFound),
    }
}
