use rocket::serde::{Deserialize, Serialize};

pub mod file_errors;
pub mod folder_errors;

/// the broad category an operation failure falls into. Every operation-specific error maps onto one of these,
/// and it is sent to the caller as the `kind` of the failure body
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub enum ErrorKind {
    /// bad input, such as an empty name
    Validation,
    /// the entity is missing, or belongs to another user
    NotFound,
    /// a move would make a folder its own ancestor
    Cycle,
    /// a move or rename targets where the entity already is
    NoChange,
    /// the database or the external file store failed
    Storage,
    /// missing or wrong credentials. Only raised before a request reaches an operation
    Unauthorized,
}

/// implemented by every operation error so the http layer can report it without knowing the operation
pub trait TreeError {
    fn kind(&self) -> ErrorKind;
    /// a message safe to show to the caller
    fn message(&self) -> &'static str;
}
