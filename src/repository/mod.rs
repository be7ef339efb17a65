use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

pub mod file_repository;
pub mod folder_repository;
pub mod user_repository;

/// how long a connection waits on another connection's write lock before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[cfg(not(test))]
fn db_location() -> String {
    crate::config::NOTE_SERVER_CONFIG.database.location.clone()
}

#[cfg(test)]
fn db_location() -> String {
    format!("{}.sqlite", crate::test::current_thread_name())
}

/// ids are handed out as `u32`, so a rowid past that range is an error rather than a silently wrapped id
pub fn row_id(id: i64) -> Result<u32, rusqlite::Error> {
    u32::try_from(id).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, id))
}

/// creates a new connection with foreign keys enforced and the `rarray` table function loaded
pub fn open_connection() -> Result<Connection, rusqlite::Error> {
    let con = Connection::open_with_flags(Path::new(db_location().as_str()), OpenFlags::default())?;
    con.busy_timeout(BUSY_TIMEOUT)?;
    con.pragma_update(None, "foreign_keys", true)?;
    rusqlite::vtab::array::load_module(&con)?;
    Ok(con)
}

/// runs init.sql on the database if the tables haven't been created yet
pub fn initialize_db() -> Result<(), rusqlite::Error> {
    let con = open_connection()?;
    let table_count: u32 = con.query_row(
        "select count(name) from sqlite_master where type = 'table' and name = 'Metadata'",
        [],
        |row| row.get(0),
    )?;
    if table_count == 0 {
        log::info!("No tables found, creating database...");
        con.execute_batch(include_str!("../assets/init.sql"))?;
    }
    Ok(())
}
