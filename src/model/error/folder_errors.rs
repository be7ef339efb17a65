use super::{ErrorKind, TreeError};

#[derive(PartialEq, Debug)]
pub enum GetFolderError {
    /// the folder does not exist, or is not owned by the caller
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum CreateFolderError {
    /// the name was empty or contained a path separator
    InvalidName,
    /// a folder with the name in the selected parent already exists
    AlreadyExists,
    /// the requested parent folder does not exist, or is not owned by the caller
    ParentNotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum RenameFolderError {
    InvalidName,
    /// a sibling folder already has the new name
    AlreadyExists,
    /// the new name is the same as the old one
    NoChange,
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum MoveFolderError {
    /// the folder being moved does not exist, or is not owned by the caller
    NotFound,
    /// the target parent does not exist, or is not owned by the caller
    ParentNotFound,
    /// the target parent is the folder itself or one of its descendants
    Cycle,
    /// the target parent is the current parent
    NoChange,
    /// the target parent already has a folder with the same name
    AlreadyExists,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteFolderError {
    NotFound,
    /// the delete was rolled back
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum ListChildrenError {
    /// the parent folder does not exist, or is not readable by the caller
    FolderNotFound,
    DbError,
}

impl TreeError for GetFolderError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound => ErrorKind::NotFound,
            Self::DbError => ErrorKind::Storage,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "The folder with the passed id could not be found.",
            Self::DbError => "Failed to pull folder info from database. Check server logs for details",
        }
    }
}

impl TreeError for CreateFolderError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName | Self::AlreadyExists => ErrorKind::Validation,
            Self::ParentNotFound => ErrorKind::NotFound,
            Self::DbError => ErrorKind::Storage,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::InvalidName => "The folder name cannot be empty or contain a slash.",
            Self::AlreadyExists => "A folder with that name already exists.",
            Self::ParentNotFound => "The parent folder with the passed id could not be found.",
            Self::DbError => "Failed to save folder info to the database. Check server logs for details",
        }
    }
}

impl TreeError for RenameFolderError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName | Self::AlreadyExists => ErrorKind::Validation,
            Self::NoChange => ErrorKind::NoChange,
            Self::NotFound => ErrorKind::NotFound,
            Self::DbError => ErrorKind::Storage,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::InvalidName => "The folder name cannot be empty or contain a slash.",
            Self::AlreadyExists => "A folder with that name already exists.",
            Self::NoChange => "The folder already has that name.",
            Self::NotFound => "The folder with the passed id could not be found.",
            Self::DbError => "Failed to rename folder. Check server logs for details",
        }
    }
}

impl TreeError for MoveFolderError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound | Self::ParentNotFound => ErrorKind::NotFound,
            Self::Cycle => ErrorKind::Cycle,
            Self::NoChange => ErrorKind::NoChange,
            Self::AlreadyExists => ErrorKind::Validation,
            Self::DbError => ErrorKind::Storage,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "The folder with the passed id could not be found.",
            Self::ParentNotFound => "The parent folder with the passed id could not be found.",
            Self::Cycle => "A folder cannot be moved into itself or one of its sub folders.",
            Self::NoChange => "The folder is already in that location.",
            Self::AlreadyExists => "A folder with that name already exists in the target folder.",
            Self::DbError => "Failed to move folder. Check server logs for details",
        }
    }
}

impl TreeError for DeleteFolderError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound => ErrorKind::NotFound,
            Self::DbError => ErrorKind::Storage,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "The folder with the passed id could not be found.",
            Self::DbError => "Failed to delete folder. Check server logs for details",
        }
    }
}

impl TreeError for ListChildrenError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::FolderNotFound => ErrorKind::NotFound,
            Self::DbError => ErrorKind::Storage,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::FolderNotFound => "The folder with the passed id could not be found.",
            Self::DbError => "Failed to retrieve the file tree. Check server logs for details",
        }
    }
}
