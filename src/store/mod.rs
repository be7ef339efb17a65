//! Structural mutation of the folder/file tree.
//!
//! Everything that touches more than one row runs inside a single `BEGIN IMMEDIATE` transaction, so
//! a cascade either commits as a whole or not at all, and checks made inside it see the same snapshot
//! the writes land on. Ownership is not checked here; see [`crate::service::access`].

use std::backtrace::Backtrace;

use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::{Connection, Transaction, TransactionBehavior};

pub mod external;
pub mod file_store;
pub mod folder_store;
pub mod path;


//language=RegExp
static BANNED_NAME_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[/\\]").unwrap());

/// trims the passed name, returning `None` if it is empty, a relative path component, or contains a path separator
pub fn clean_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." || BANNED_NAME_CHARS.is_match(trimmed) {
        return None;
    }
    Some(trimmed.to_string())
}

/// logs a failed database call along with where it came from
pub fn log_db_error(context: &str, e: &rusqlite::Error) {
    log::error!("{context}. Error is {e:?}\n{}", Backtrace::force_capture());
}

/// takes the database write lock up front, so the whole transaction sees one consistent snapshot
fn begin(con: &mut Connection) -> Result<Transaction<'_>, rusqlite::Error> {
    con.transaction_with_behavior(TransactionBehavior::Immediate)
}
