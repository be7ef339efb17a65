use std::fs::{remove_dir_all, remove_file};
use std::path::Path;

use rusqlite::Connection;

use crate::guard::hash_credentials;
use crate::model::repository::{FileRecord, Folder, NewFile, Upload, ROOT_FOLDER_ID};
use crate::repository::{initialize_db, open_connection, user_repository};
use crate::store::external::upload_dir;
use crate::store::{file_store, folder_store};

mod folder_handler_tests;

/// username:password
pub static AUTH: &str = "Basic dXNlcm5hbWU6cGFzc3dvcmQ=";
/// other:password
pub static OTHER_AUTH: &str = "Basic b3RoZXI6cGFzc3dvcmQ=";

pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

/// starts the current test off with a brand-new database
pub fn init_db() {
    cleanup();
    initialize_db().unwrap();
}

pub fn cleanup() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
    remove_dir_all(Path::new(upload_dir().as_str())).unwrap_or(());
}

pub fn connection() -> Connection {
    open_connection().unwrap()
}

/// creates a user whose password is `password`, returning their id
pub fn create_user(username: &str) -> u32 {
    let con = connection();
    user_repository::create_user(username, &hash_credentials(username, "password"), &con).unwrap()
}

/// creates the users that [AUTH] and [OTHER_AUTH] log in as
pub fn create_users() -> (u32, u32) {
    (create_user("username"), create_user("other"))
}

pub fn create_folder(user_id: u32, name: &str, parent_id: Option<u32>) -> Folder {
    let mut con = connection();
    folder_store::create_folder(name, parent_id.unwrap_or(ROOT_FOLDER_ID), user_id, &mut con).unwrap()
}

pub fn create_file(user_id: u32, name: &str, content: &str, parent_id: Option<u32>) -> FileRecord {
    let mut con = connection();
    file_store::create_file(
        NewFile {
            name: name.to_string(),
            content: content.to_string(),
            parent_id: parent_id.unwrap_or(ROOT_FOLDER_ID),
            user_id,
            upload: None,
        },
        &mut con,
    )
    .unwrap()
}

/// creates an uploaded file whose external copy lives at `file_path` inside the upload directory
pub fn create_uploaded_file(
    user_id: u32,
    name: &str,
    content: &str,
    file_path: &str,
    parent_id: Option<u32>,
) -> FileRecord {
    let mut con = connection();
    file_store::create_file(
        NewFile {
            name: name.to_string(),
            content: content.to_string(),
            parent_id: parent_id.unwrap_or(ROOT_FOLDER_ID),
            user_id,
            upload: Some(Upload {
                file_path: file_path.to_string(),
                size: content.len() as u64,
            }),
        },
        &mut con,
    )
    .unwrap()
}

pub fn get_folder(id: u32) -> Folder {
    folder_store::get_folder(id, &connection()).unwrap()
}

/// the number of rows in `table`
pub fn count_rows(table: &str) -> u32 {
    connection()
        .query_row(format!("select count(id) from {table}").as_str(), [], |row| {
            row.get(0)
        })
        .unwrap()
}
