use rusqlite::{params, Connection};

use crate::repository::row_id;

/// returns the id of the user with the passed username and password hash
pub fn get_user_id(
    username: &str,
    password_hash: &str,
    con: &Connection,
) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/user/get_user_id_by_credentials.sql"
    ))?;
    pst.query_row(params![username, password_hash], |row| row.get(0))
}

/// user registration is handled outside of this server, this is only used to seed test users
#[cfg(test)]
pub fn create_user(
    username: &str,
    password_hash: &str,
    con: &Connection,
) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/user/create_user.sql"))?;
    row_id(pst.insert(params![username, password_hash])?)
}
