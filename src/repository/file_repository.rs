use std::rc::Rc;

use rusqlite::types::Value;
use rusqlite::{params, Connection};

use crate::model::repository::{FileContent, FileRecord};
use crate::repository::row_id;
use crate::util::now;

pub fn get_by_id(id: u32, con: &Connection) -> Result<FileRecord, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/file/get_file_by_id.sql"))?;
    pst.query_row([id], map_file)
}

/// returns the files owned by `user_id` directly inside `parent_id`, ordered by name
pub fn get_child_files(
    user_id: u32,
    parent_id: u32,
    con: &Connection,
) -> Result<Vec<FileRecord>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/file/get_child_files.sql"))?;
    let rows = pst.query_map(params![user_id, parent_id], map_file)?;
    rows.collect::<Result<Vec<FileRecord>, rusqlite::Error>>()
}

pub fn get_files_for_user(user_id: u32, con: &Connection) -> Result<Vec<FileRecord>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/file/get_files_for_user.sql"))?;
    let rows = pst.query_map([user_id], map_file)?;
    rows.collect::<Result<Vec<FileRecord>, rusqlite::Error>>()
}

/// saves a new file record. Name, type, and size must already be worked out by the caller
#[allow(clippy::too_many_arguments)]
pub fn create_file(
    name: &str,
    content: &FileContent,
    parent_id: u32,
    user_id: u32,
    file_type: &str,
    size: u64,
    con: &Connection,
) -> Result<FileRecord, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/file/create_file.sql"))?;
    let date = now();
    let id = row_id(pst.insert(params![
        name,
        content.text(),
        parent_id,
        user_id,
        file_type,
        size,
        content.external_path(),
        content.is_uploaded(),
        date
    ])?)?;
    Ok(FileRecord {
        id,
        name: name.to_string(),
        parent_id,
        user_id,
        file_type: file_type.to_string(),
        size,
        content: content.clone(),
        create_date: date,
        update_date: date,
    })
}

pub fn update_file_content(
    id: u32,
    content: &str,
    size: u64,
    con: &Connection,
) -> Result<usize, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/file/update_file_content.sql"))?;
    pst.execute(params![content, size, now(), id])
}

pub fn rename_file(
    id: u32,
    name: &str,
    file_type: &str,
    con: &Connection,
) -> Result<usize, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/file/rename_file.sql"))?;
    pst.execute(params![name, file_type, now(), id])
}

pub fn move_file(id: u32, parent_id: u32, con: &Connection) -> Result<usize, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/file/move_file.sql"))?;
    pst.execute(params![parent_id, now(), id])
}

/// removes the file with the passed id from the database, returning the number of rows removed
pub fn delete_by_id(id: u32, con: &Connection) -> Result<usize, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/file/delete_file_by_id.sql"))?;
    pst.execute([id])
}

/// removes every file whose parent is one of `folder_ids`
pub fn delete_files_in_folders(folder_ids: &[u32], con: &Connection) -> Result<usize, rusqlite::Error> {
    let ids: Rc<Vec<Value>> = Rc::new(
        folder_ids
            .iter()
            .map(|id| Value::Integer(i64::from(*id)))
            .collect(),
    );
    let mut pst = con.prepare(include_str!("../assets/queries/file/delete_files_in_folders.sql"))?;
    pst.execute([ids])
}

pub fn map_file(row: &rusqlite::Row) -> Result<FileRecord, rusqlite::Error> {
    let text: String = row.get(2)?;
    let file_path: Option<String> = row.get(7)?;
    let is_uploaded: bool = row.get(8)?;
    let content = match file_path {
        Some(path) if is_uploaded => FileContent::Mirrored { path, cached: text },
        _ => FileContent::Inline(text),
    };
    Ok(FileRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        parent_id: row.get(3)?,
        user_id: row.get(4)?,
        file_type: row.get(5)?,
        size: row.get(6)?,
        content,
        create_date: row.get(9)?,
        update_date: row.get(10)?,
    })
}
