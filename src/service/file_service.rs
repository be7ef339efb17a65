use rusqlite::Connection;

use crate::model::error::file_errors::{
    CreateFileError, DeleteFileError, DownloadFileError, GetFileError, MoveFileError,
    RenameFileError, UpdateFileError,
};
use crate::model::error::folder_errors::GetFolderError;
use crate::model::repository::{FileRecord, NewFile, Upload};
use crate::service::access::{can_read_folder, owns_file, resolve_parent};
use crate::service::connect;
use crate::store::external::ExternalFileStore;
use crate::store::{file_store, folder_store};

/// loads the file, treating one the caller doesn't own the same as one that doesn't exist
fn get_owned_file<E>(
    user_id: u32,
    file_id: u32,
    con: &Connection,
    not_found: E,
    db_error: E,
) -> Result<FileRecord, E> {
    match file_store::get_file(file_id, con) {
        Ok(file) if owns_file(&file, user_id) => Ok(file),
        Ok(_) | Err(GetFileError::NotFound) => Err(not_found),
        Err(GetFileError::DbError) => Err(db_error),
    }
}

/// retrieves the file with its current content. Uploaded markdown is read through from `store`
pub fn get_file(
    user_id: u32,
    file_id: u32,
    store: &dyn ExternalFileStore,
) -> Result<FileRecord, GetFileError> {
    let con = connect(GetFileError::DbError)?;
    let mut file = get_owned_file(
        user_id,
        file_id,
        &con,
        GetFileError::NotFound,
        GetFileError::DbError,
    )?;
    if file.is_mirrored_markdown() {
        file.content = file.content.with_text(file_store::load_content(&file, store));
    }
    Ok(file)
}

/// a file's name and raw bytes, ready to be sent as an attachment
#[derive(Debug, PartialEq)]
pub struct FileDownload {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// the bytes of the file. Inline notes come from the database, uploads from `store`
pub fn download_file(
    user_id: u32,
    file_id: u32,
    store: &dyn ExternalFileStore,
) -> Result<FileDownload, DownloadFileError> {
    let con = connect(DownloadFileError::DbError)?;
    let file = get_owned_file(
        user_id,
        file_id,
        &con,
        DownloadFileError::NotFound,
        DownloadFileError::DbError,
    )?;
    let bytes = file_store::load_bytes(&file, store)?;
    Ok(FileDownload { name: file.name, bytes })
}

/// creates a file in `parent_id` (the root if `None`). `upload` is present when the bytes were already
/// persisted by the upload collaborator
pub fn create_file(
    user_id: u32,
    name: &str,
    content: &str,
    parent_id: Option<u32>,
    upload: Option<Upload>,
) -> Result<FileRecord, CreateFileError> {
    let parent_id = resolve_parent(parent_id);
    let mut con = connect(CreateFileError::DbError)?;
    match folder_store::get_folder(parent_id, &con) {
        Ok(parent) if can_read_folder(&parent, user_id) => {}
        Ok(_) | Err(GetFolderError::NotFound) => return Err(CreateFileError::ParentFolderNotFound),
        Err(GetFolderError::DbError) => return Err(CreateFileError::DbError),
    };
    let file = NewFile {
        name: name.to_string(),
        content: content.to_string(),
        parent_id,
        user_id,
        upload,
    };
    file_store::create_file(file, &mut con)
}

pub fn update_file_content(
    user_id: u32,
    file_id: u32,
    content: &str,
    store: &dyn ExternalFileStore,
) -> Result<FileRecord, UpdateFileError> {
    let con = connect(UpdateFileError::DbError)?;
    get_owned_file(
        user_id,
        file_id,
        &con,
        UpdateFileError::NotFound,
        UpdateFileError::DbError,
    )?;
    file_store::update_file_content(file_id, content, store, &con)
}

pub fn rename_file(
    user_id: u32,
    file_id: u32,
    new_name: &str,
) -> Result<FileRecord, RenameFileError> {
    let con = connect(RenameFileError::DbError)?;
    get_owned_file(
        user_id,
        file_id,
        &con,
        RenameFileError::NotFound,
        RenameFileError::DbError,
    )?;
    file_store::rename_file(file_id, new_name, &con)
}

/// moves the file into `new_parent_id` (the root if `None`)
pub fn move_file(
    user_id: u32,
    file_id: u32,
    new_parent_id: Option<u32>,
) -> Result<FileRecord, MoveFileError> {
    let new_parent_id = resolve_parent(new_parent_id);
    let mut con = connect(MoveFileError::DbError)?;
    let file = get_owned_file(
        user_id,
        file_id,
        &con,
        MoveFileError::NotFound,
        MoveFileError::DbError,
    )?;
    if file.parent_id == new_parent_id {
        return Err(MoveFileError::NoChange);
    }
    match folder_store::get_folder(new_parent_id, &con) {
        Ok(target) if can_read_folder(&target, user_id) => {}
        Ok(_) | Err(GetFolderError::NotFound) => return Err(MoveFileError::FolderNotFound),
        Err(GetFolderError::DbError) => return Err(MoveFileError::DbError),
    };
    file_store::move_file(file_id, new_parent_id, &mut con)
}

pub fn delete_file(user_id: u32, file_id: u32) -> Result<(), DeleteFileError> {
    let con = connect(DeleteFileError::DbError)?;
    get_owned_file(
        user_id,
        file_id,
        &con,
        DeleteFileError::NotFound,
        DeleteFileError::DbError,
    )?;
    match file_store::delete_file(file_id, &con)? {
        true => Ok(()),
        false => Err(DeleteFileError::NotFound),
    }
}
