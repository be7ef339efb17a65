use std::path::Path;

use rusqlite::Connection;

use crate::model::error::file_errors::{
    CreateFileError, DeleteFileError, DownloadFileError, GetFileError, MoveFileError,
    RenameFileError, UpdateFileError,
};
use crate::model::repository::{FileContent, FileRecord, NewFile};
use crate::repository::{file_repository, folder_repository};
use crate::store::external::ExternalFileStore;
use crate::store::{begin, clean_name, log_db_error};

/// the lowercase extension of `name`, dot included. Files without one are markdown notes,
/// unless they were uploaded, in which case they have no type
pub fn derive_file_type(name: &str, uploaded: bool) -> String {
    match Path::new(name).extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None if uploaded => String::new(),
        None => ".md".to_string(),
    }
}

pub fn get_file(id: u32, con: &Connection) -> Result<FileRecord, GetFileError> {
    match file_repository::get_by_id(id, con) {
        Ok(file) => Ok(file),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(GetFileError::NotFound),
        Err(e) => {
            log_db_error(&format!("Failed to retrieve file {id}"), &e);
            Err(GetFileError::DbError)
        }
    }
}

/// the user's files directly inside `parent_id`, ordered by name
pub fn list_file_children(
    user_id: u32,
    parent_id: u32,
    con: &Connection,
) -> Result<Vec<FileRecord>, rusqlite::Error> {
    file_repository::get_child_files(user_id, parent_id, con)
}

/// the current text of the file. Uploaded markdown is read from the external store, falling back to the
/// database copy if the external copy is missing or can't be read
pub fn load_content(file: &FileRecord, store: &dyn ExternalFileStore) -> String {
    let cached = file.content.text();
    let Some(path) = file.content.external_path().filter(|_| file.is_markdown()) else {
        return cached.to_string();
    };
    match store.read(path) {
        Ok(Some(content)) => content,
        Ok(None) => {
            log::warn!("Uploaded file {} is missing from {path}, using the database copy", file.id);
            cached.to_string()
        }
        Err(e) => {
            log::error!("Failed to read uploaded markdown file {path}: {e:?}");
            cached.to_string()
        }
    }
}

/// the raw bytes of a file. Uploads other than markdown only exist in `store`, so a missing copy is an error
pub fn load_bytes(
    file: &FileRecord,
    store: &dyn ExternalFileStore,
) -> Result<Vec<u8>, DownloadFileError> {
    let path = match file.content.external_path() {
        Some(path) if !file.is_markdown() => path,
        _ => return Ok(load_content(file, store).into_bytes()),
    };
    match store.read_bytes(path) {
        Ok(Some(bytes)) => Ok(bytes),
        Ok(None) => {
            log::warn!("Uploaded file {} is missing from {path}", file.id);
            Err(DownloadFileError::ContentMissing)
        }
        Err(e) => {
            log::error!("Failed to read uploaded file {path}: {e:?}");
            Err(DownloadFileError::ReadFailed)
        }
    }
}

pub fn create_file(file: NewFile, con: &mut Connection) -> Result<FileRecord, CreateFileError> {
    let name = clean_name(&file.name).ok_or(CreateFileError::InvalidName)?;
    let (content, size) = match file.upload {
        Some(upload) => (
            FileContent::Mirrored {
                path: upload.file_path,
                cached: file.content,
            },
            upload.size,
        ),
        None => {
            let size = file.content.len() as u64;
            (FileContent::Inline(file.content), size)
        }
    };
    let file_type = derive_file_type(&name, content.is_uploaded());
    let db_error = |e: rusqlite::Error| {
        log_db_error(&format!("Failed to create file {name} in {}", file.parent_id), &e);
        CreateFileError::DbError
    };
    let tx = begin(con).map_err(db_error)?;
    match folder_repository::get_by_id(file.parent_id, &tx) {
        Ok(_) => {}
        Err(rusqlite::Error::QueryReturnedNoRows) => return Err(CreateFileError::ParentFolderNotFound),
        Err(e) => return Err(db_error(e)),
    };
    let created = file_repository::create_file(
        &name,
        &content,
        file.parent_id,
        file.user_id,
        &file_type,
        size,
        &tx,
    )
    .map_err(db_error)?;
    tx.commit().map_err(db_error)?;
    Ok(created)
}

/// replaces the text of the file and recomputes its size.
///
/// Uploaded markdown is also written to the external store. The database is the record of truth: a failed
/// external write is logged and the update still succeeds, leaving the external copy stale until the next edit
pub fn update_file_content(
    file_id: u32,
    content: &str,
    store: &dyn ExternalFileStore,
    con: &Connection,
) -> Result<FileRecord, UpdateFileError> {
    let db_error = |e: rusqlite::Error| {
        log_db_error(&format!("Failed to update content of file {file_id}"), &e);
        UpdateFileError::DbError
    };
    let file = match file_repository::get_by_id(file_id, con) {
        Ok(f) => f,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Err(UpdateFileError::NotFound),
        Err(e) => return Err(db_error(e)),
    };
    let size = content.len() as u64;
    let updated = file_repository::update_file_content(file_id, content, size, con).map_err(db_error)?;
    if updated == 0 {
        return Err(UpdateFileError::NotFound);
    }
    if file.is_mirrored_markdown() {
        if let Some(path) = file.content.external_path() {
            if let Err(e) = store.write(path, content) {
                log::error!(
                    "Failed to write uploaded markdown file {path} for file {file_id}, database copy was still updated: {e:?}"
                );
            }
        }
    }
    file_repository::get_by_id(file_id, con).map_err(db_error)
}

/// renames the file, re-deriving its type from the new name
pub fn rename_file(
    file_id: u32,
    new_name: &str,
    con: &Connection,
) -> Result<FileRecord, RenameFileError> {
    let new_name = clean_name(new_name).ok_or(RenameFileError::InvalidName)?;
    let db_error = |e: rusqlite::Error| {
        log_db_error(&format!("Failed to rename file {file_id}"), &e);
        RenameFileError::DbError
    };
    let file = match file_repository::get_by_id(file_id, con) {
        Ok(f) => f,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Err(RenameFileError::NotFound),
        Err(e) => return Err(db_error(e)),
    };
    if file.name == new_name {
        return Err(RenameFileError::NoChange);
    }
    let file_type = derive_file_type(&new_name, file.content.is_uploaded());
    file_repository::rename_file(file_id, &new_name, &file_type, con).map_err(db_error)?;
    file_repository::get_by_id(file_id, con).map_err(db_error)
}

pub fn move_file(
    file_id: u32,
    new_parent_id: u32,
    con: &mut Connection,
) -> Result<FileRecord, MoveFileError> {
    let db_error = |e: rusqlite::Error| {
        log_db_error(&format!("Failed to move file {file_id} to {new_parent_id}"), &e);
        MoveFileError::DbError
    };
    let tx = begin(con).map_err(db_error)?;
    let file = match file_repository::get_by_id(file_id, &tx) {
        Ok(f) => f,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Err(MoveFileError::NotFound),
        Err(e) => return Err(db_error(e)),
    };
    if file.parent_id == new_parent_id {
        return Err(MoveFileError::NoChange);
    }
    match folder_repository::get_by_id(new_parent_id, &tx) {
        Ok(_) => {}
        Err(rusqlite::Error::QueryReturnedNoRows) => return Err(MoveFileError::FolderNotFound),
        Err(e) => return Err(db_error(e)),
    };
    file_repository::move_file(file_id, new_parent_id, &tx).map_err(db_error)?;
    let moved = file_repository::get_by_id(file_id, &tx).map_err(db_error)?;
    tx.commit().map_err(db_error)?;
    Ok(moved)
}

/// returns `false` if there was no file with that id
pub fn delete_file(file_id: u32, con: &Connection) -> Result<bool, DeleteFileError> {
    match file_repository::delete_by_id(file_id, con) {
        Ok(removed) => Ok(removed > 0),
        Err(e) => {
            log_db_error(&format!("Failed to delete file {file_id}"), &e);
            Err(DeleteFileError::DbError)
        }
    }
}
