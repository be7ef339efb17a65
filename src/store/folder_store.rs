use std::collections::HashSet;

use rusqlite::Connection;

use crate::model::error::folder_errors::{
    CreateFolderError, DeleteFolderError, GetFolderError, MoveFolderError, RenameFolderError,
};
use crate::model::repository::Folder;
use crate::repository::{file_repository, folder_repository};
use crate::store::path::{compute_path, descendant_paths, is_within};
use crate::store::{begin, clean_name, log_db_error};

pub fn get_folder(id: u32, con: &Connection) -> Result<Folder, GetFolderError> {
    match folder_repository::get_by_id(id, con) {
        Ok(folder) => Ok(folder),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(GetFolderError::NotFound),
        Err(e) => {
            log_db_error(&format!("Failed to retrieve folder {id}"), &e);
            Err(GetFolderError::DbError)
        }
    }
}

/// the user's folders directly inside `parent_id`, ordered by name
pub fn list_folder_children(
    user_id: u32,
    parent_id: u32,
    con: &Connection,
) -> Result<Vec<Folder>, rusqlite::Error> {
    folder_repository::get_child_folders(user_id, parent_id, con)
}

/// creates a folder named `name` inside `parent_id`, with its path built from the parent's current path
pub fn create_folder(
    name: &str,
    parent_id: u32,
    user_id: u32,
    con: &mut Connection,
) -> Result<Folder, CreateFolderError> {
    let name = clean_name(name).ok_or(CreateFolderError::InvalidName)?;
    let db_error = |e: rusqlite::Error| {
        log_db_error(&format!("Failed to create folder {name} in {parent_id}"), &e);
        CreateFolderError::DbError
    };
    let tx = begin(con).map_err(db_error)?;
    let parent = match folder_repository::get_by_id(parent_id, &tx) {
        Ok(parent) => parent,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Err(CreateFolderError::ParentNotFound),
        Err(e) => return Err(db_error(e)),
    };
    let existing = folder_repository::count_siblings_with_name(user_id, parent.id, &name, 0, &tx)
        .map_err(db_error)?;
    if existing > 0 {
        return Err(CreateFolderError::AlreadyExists);
    }
    let path = compute_path(Some(&parent.path), &name);
    let folder = folder_repository::create_folder(&name, parent.id, user_id, &path, &tx).map_err(db_error)?;
    tx.commit().map_err(db_error)?;
    log::debug!("Created folder {} at {}", folder.id, folder.path);
    Ok(folder)
}

/// renames the folder and rewrites the path of it and every folder beneath it, all in one transaction
pub fn rename_folder(
    folder_id: u32,
    new_name: &str,
    con: &mut Connection,
) -> Result<Folder, RenameFolderError> {
    let new_name = clean_name(new_name).ok_or(RenameFolderError::InvalidName)?;
    let db_error = |e: rusqlite::Error| {
        log_db_error(&format!("Failed to rename folder {folder_id}"), &e);
        RenameFolderError::DbError
    };
    let tx = begin(con).map_err(db_error)?;
    let folder = match folder_repository::get_by_id(folder_id, &tx) {
        Ok(f) if !f.is_root() => f,
        Ok(_) | Err(rusqlite::Error::QueryReturnedNoRows) => return Err(RenameFolderError::NotFound),
        Err(e) => return Err(db_error(e)),
    };
    if folder.name == new_name {
        return Err(RenameFolderError::NoChange);
    }
    // everything but the root has a parent and an owner
    let (Some(parent_id), Some(user_id)) = (folder.parent_id, folder.user_id) else {
        return Err(RenameFolderError::NotFound);
    };
    let existing =
        folder_repository::count_siblings_with_name(user_id, parent_id, &new_name, folder.id, &tx)
            .map_err(db_error)?;
    if existing > 0 {
        return Err(RenameFolderError::AlreadyExists);
    }
    let parent = folder_repository::get_by_id(parent_id, &tx).map_err(db_error)?;
    let new_path = compute_path(Some(&parent.path), &new_name);
    folder_repository::rename_folder(folder.id, &new_name, &new_path, &tx).map_err(db_error)?;
    rewrite_descendant_paths(folder.id, user_id, &new_path, &tx).map_err(db_error)?;
    let renamed = folder_repository::get_by_id(folder.id, &tx).map_err(db_error)?;
    tx.commit().map_err(db_error)?;
    log::debug!("Renamed folder {} from {} to {}", folder.id, folder.path, renamed.path);
    Ok(renamed)
}

/// checks whether `folder` may be moved into `target`, without touching the database
pub fn check_folder_move(folder: &Folder, target: &Folder) -> Result<(), MoveFolderError> {
    if folder.parent_id == Some(target.id) {
        return Err(MoveFolderError::NoChange);
    }
    if target.id == folder.id || is_within(&folder.path, &target.path) {
        return Err(MoveFolderError::Cycle);
    }
    Ok(())
}

/// re-parents the folder under `new_parent_id` and rewrites the path of it and every folder beneath it.
///
/// The cycle check and the parent swap happen under the same write lock, so two crossing moves can't both pass
pub fn move_folder(
    folder_id: u32,
    new_parent_id: u32,
    con: &mut Connection,
) -> Result<Folder, MoveFolderError> {
    let db_error = |e: rusqlite::Error| {
        log_db_error(
            &format!("Failed to move folder {folder_id} to {new_parent_id}"),
            &e,
        );
        MoveFolderError::DbError
    };
    let tx = begin(con).map_err(db_error)?;
    let folder = match folder_repository::get_by_id(folder_id, &tx) {
        Ok(f) if !f.is_root() => f,
        Ok(_) | Err(rusqlite::Error::QueryReturnedNoRows) => return Err(MoveFolderError::NotFound),
        Err(e) => return Err(db_error(e)),
    };
    let target = match folder_repository::get_by_id(new_parent_id, &tx) {
        Ok(t) => t,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Err(MoveFolderError::ParentNotFound),
        Err(e) => return Err(db_error(e)),
    };
    check_folder_move(&folder, &target)?;
    let Some(user_id) = folder.user_id else {
        return Err(MoveFolderError::NotFound);
    };
    let existing =
        folder_repository::count_siblings_with_name(user_id, target.id, &folder.name, folder.id, &tx)
            .map_err(db_error)?;
    if existing > 0 {
        return Err(MoveFolderError::AlreadyExists);
    }
    let new_path = compute_path(Some(&target.path), &folder.name);
    folder_repository::move_folder(folder.id, target.id, &new_path, &tx).map_err(db_error)?;
    rewrite_descendant_paths(folder.id, user_id, &new_path, &tx).map_err(db_error)?;
    let moved = folder_repository::get_by_id(folder.id, &tx).map_err(db_error)?;
    tx.commit().map_err(db_error)?;
    log::debug!("Moved folder {} from {} to {}", folder.id, folder.path, moved.path);
    Ok(moved)
}

/// deletes the folder, every folder beneath it, and every file in any of them, in one transaction.
///
/// Returns `false` if the folder row was already gone
pub fn delete_folder(folder_id: u32, con: &mut Connection) -> Result<bool, DeleteFolderError> {
    let db_error = |e: rusqlite::Error| {
        log_db_error(&format!("Failed to delete folder {folder_id}"), &e);
        DeleteFolderError::DbError
    };
    let tx = begin(con).map_err(db_error)?;
    match folder_repository::get_by_id(folder_id, &tx) {
        Ok(f) if !f.is_root() => {}
        Ok(_) | Err(rusqlite::Error::QueryReturnedNoRows) => return Err(DeleteFolderError::NotFound),
        Err(e) => return Err(db_error(e)),
    };
    let subtree = collect_subtree(folder_id, &tx).map_err(db_error)?;
    let removed_files = file_repository::delete_files_in_folders(&subtree, &tx).map_err(db_error)?;
    // parents are discovered before their children, so reversing deletes innermost folders first
    let mut deleted = false;
    for id in subtree.iter().rev() {
        let removed = folder_repository::delete_folder(*id, &tx).map_err(db_error)?;
        if *id == folder_id {
            deleted = removed > 0;
        }
    }
    tx.commit().map_err(db_error)?;
    log::debug!(
        "Deleted folder {folder_id} along with {} sub folders and {removed_files} files",
        subtree.len() - 1
    );
    Ok(deleted)
}

/// the ids of `folder_id` and every folder beneath it, each parent before its children
fn collect_subtree(folder_id: u32, con: &Connection) -> Result<Vec<u32>, rusqlite::Error> {
    let mut seen = HashSet::from([folder_id]);
    let mut subtree = vec![folder_id];
    let mut stack = vec![folder_id];
    while let Some(id) = stack.pop() {
        for child in folder_repository::get_child_folder_ids(id, con)? {
            if seen.insert(child) {
                subtree.push(child);
                stack.push(child);
            }
        }
    }
    Ok(subtree)
}

/// loads the user's folders once, recomputes the subtree in memory, and writes the new paths back in a batch
fn rewrite_descendant_paths(
    folder_id: u32,
    user_id: u32,
    folder_path: &str,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let folders = folder_repository::get_folders_for_user(user_id, con)?;
    let paths = descendant_paths(folder_id, folder_path, &folders);
    folder_repository::update_folder_paths(&paths, con)
}
