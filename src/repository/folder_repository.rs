use rusqlite::{params, Connection};

use crate::model::repository::Folder;
use crate::repository::row_id;
use crate::util::now;

pub fn get_by_id(id: u32, con: &Connection) -> Result<Folder, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/get_folder_by_id.sql"))?;
    pst.query_row([id], map_folder)
}

/// returns the folders owned by `user_id` directly inside `parent_id`, ordered by name
pub fn get_child_folders(
    user_id: u32,
    parent_id: u32,
    con: &Connection,
) -> Result<Vec<Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/get_child_folders.sql"))?;
    let rows = pst.query_map(params![user_id, parent_id], map_folder)?;
    rows.collect::<Result<Vec<Folder>, rusqlite::Error>>()
}

/// every folder the user owns, at any depth. The shared root is not included
pub fn get_folders_for_user(user_id: u32, con: &Connection) -> Result<Vec<Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/get_folders_for_user.sql"))?;
    let rows = pst.query_map([user_id], map_folder)?;
    rows.collect::<Result<Vec<Folder>, rusqlite::Error>>()
}

/// the ids of the folders directly inside the folder with the passed id, regardless of owner
pub fn get_child_folder_ids(id: u32, con: &Connection) -> Result<Vec<u32>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/get_child_folder_ids.sql"))?;
    let rows = pst.query_map([id], |row| row.get(0))?;
    rows.collect::<Result<Vec<u32>, rusqlite::Error>>()
}

/// creates a folder record in the database.
/// This does not do any checks on the name, parent, or path, and that must be done before this function is called
pub fn create_folder(
    name: &str,
    parent_id: u32,
    user_id: u32,
    path: &str,
    con: &Connection,
) -> Result<Folder, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/create_folder.sql"))?;
    let date = now();
    let id = row_id(pst.insert(params![name, parent_id, user_id, path, date])?)?;
    Ok(Folder {
        id,
        name: name.to_string(),
        parent_id: Some(parent_id),
        user_id: Some(user_id),
        path: path.to_string(),
        create_date: date,
        update_date: date,
    })
}

pub fn rename_folder(id: u32, name: &str, path: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/rename_folder.sql"))?;
    pst.execute(params![name, path, now(), id])?;
    Ok(())
}

pub fn move_folder(
    id: u32,
    parent_id: u32,
    path: &str,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/move_folder.sql"))?;
    pst.execute(params![parent_id, path, now(), id])?;
    Ok(())
}

/// writes every `(id, path)` pair with a single prepared statement
pub fn update_folder_paths(paths: &[(u32, String)], con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/update_folder_path.sql"))?;
    let date = now();
    for (id, path) in paths {
        pst.execute(params![path, date, id])?;
    }
    Ok(())
}

/// counts the user's folders inside `parent_id` named `name`, ignoring the folder with `exclude_id`
pub fn count_siblings_with_name(
    user_id: u32,
    parent_id: u32,
    name: &str,
    exclude_id: u32,
    con: &Connection,
) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folder/count_siblings_with_name.sql"
    ))?;
    pst.query_row(params![user_id, parent_id, name, exclude_id], |row| row.get(0))
}

/// deletes the folder row only. Child rows must already be gone, or the foreign keys will reject this
pub fn delete_folder(id: u32, con: &Connection) -> Result<usize, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/delete_folder_by_id.sql"))?;
    pst.execute([id])
}

fn map_folder(row: &rusqlite::Row) -> Result<Folder, rusqlite::Error> {
    Ok(Folder {
        id: row.get(0)?,
        name: row.get(1)?,
        parent_id: row.get(2)?,
        user_id: row.get(3)?,
        path: row.get(4)?,
        create_date: row.get(5)?,
        update_date: row.get(6)?,
    })
}
