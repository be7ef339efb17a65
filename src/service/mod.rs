//! Request-facing orchestration of the tree. Every call here is scoped to the calling user and opens its own
//! connection; see [`access`] for the ownership rules.

use rusqlite::Connection;

use crate::repository::open_connection;
use crate::store::log_db_error;

pub mod access;
pub mod export_service;
pub mod file_service;
pub mod folder_service;

#[cfg(test)]
mod tests;

/// opens the connection a single service call runs on, turning a failure into the operation's own error
fn connect<E>(db_error: E) -> Result<Connection, E> {
    open_connection().map_err(|e| {
        log_db_error("Failed to open database connection", &e);
        db_error
    })
}
