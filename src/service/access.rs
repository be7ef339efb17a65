//! Ownership rules. The shared root is the only row without an owner: everyone may read it and
//! create things inside it, nobody may rename, move, or delete it.

use crate::model::repository::{FileRecord, Folder, ROOT_FOLDER_ID};

/// clients pass nothing (or `0`) when they mean the top of their tree
pub fn resolve_parent(parent_id: Option<u32>) -> u32 {
    match parent_id {
        None | Some(0) => ROOT_FOLDER_ID,
        Some(id) => id,
    }
}

/// whether `user_id` can list the folder or put things inside it
pub fn can_read_folder(folder: &Folder, user_id: u32) -> bool {
    folder.is_root() || folder.user_id == Some(user_id)
}

/// whether `user_id` can rename, move, or delete the folder
pub fn owns_folder(folder: &Folder, user_id: u32) -> bool {
    !folder.is_root() && folder.user_id == Some(user_id)
}

pub fn owns_file(file: &FileRecord, user_id: u32) -> bool {
    file.user_id == user_id
}
