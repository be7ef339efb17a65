use super::{ErrorKind, TreeError};

#[derive(PartialEq, Debug)]
pub enum GetFileError {
    /// the file does not exist, or is not owned by the caller
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DownloadFileError {
    /// the file does not exist, or is not owned by the caller
    NotFound,
    /// the file was uploaded, but its bytes are gone from the external file store
    ContentMissing,
    /// the external file store could not be read
    ReadFailed,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum CreateFileError {
    /// the name was missing or empty
    InvalidName,
    ParentFolderNotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum UpdateFileError {
    /// an update has to carry the new content, leaving it out would wipe the file
    MissingContent,
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum RenameFileError {
    InvalidName,
    /// the new name is the same as the old one
    NoChange,
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum MoveFileError {
    NotFound,
    /// the target folder does not exist, or is not owned by the caller
    FolderNotFound,
    /// the target folder is the current parent
    NoChange,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteFileError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum ExportError {
    DbError,
}

impl TreeError for GetFileError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound => ErrorKind::NotFound,
            Self::DbError => ErrorKind::Storage,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "The file with the passed id could not be found.",
            Self::DbError => "Failed to pull file info from database. Check server logs for details",
        }
    }
}

impl TreeError for CreateFileError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName => ErrorKind::Validation,
            Self::ParentFolderNotFound => ErrorKind::NotFound,
            Self::DbError => ErrorKind::Storage,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::InvalidName => "The file name cannot be empty.",
            Self::ParentFolderNotFound => "The folder with the passed id could not be found.",
            Self::DbError => "Failed to save file. Check server logs for details",
        }
    }
}

impl TreeError for DownloadFileError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound | Self::ContentMissing => ErrorKind::NotFound,
            Self::ReadFailed | Self::DbError => ErrorKind::Storage,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "The file with the passed id could not be found.",
            Self::ContentMissing => "The contents of the file could not be found.",
            Self::ReadFailed => "Failed to read the uploaded file. Check server logs for details",
            Self::DbError => "Failed to pull file info from database. Check server logs for details",
        }
    }
}

impl TreeError for UpdateFileError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingContent => ErrorKind::Validation,
            Self::NotFound => ErrorKind::NotFound,
            Self::DbError => ErrorKind::Storage,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::MissingContent => "The new file content is required.",
            Self::NotFound => "The file with the passed id could not be found.",
            Self::DbError => "Failed to update file. Check server logs for details",
        }
    }
}

impl TreeError for RenameFileError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName => ErrorKind::Validation,
            Self::NoChange => ErrorKind::NoChange,
            Self::NotFound => ErrorKind::NotFound,
            Self::DbError => ErrorKind::Storage,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::InvalidName => "The file name cannot be empty.",
            Self::NoChange => "The file already has that name.",
            Self::NotFound => "The file with the passed id could not be found.",
            Self::DbError => "Failed to rename file. Check server logs for details",
        }
    }
}

impl TreeError for MoveFileError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound | Self::FolderNotFound => ErrorKind::NotFound,
            Self::NoChange => ErrorKind::NoChange,
            Self::DbError => ErrorKind::Storage,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "The file with the passed id could not be found.",
            Self::FolderNotFound => "The folder with the passed id could not be found.",
            Self::NoChange => "The file is already in that location.",
            Self::DbError => "Failed to move file. Check server logs for details",
        }
    }
}

impl TreeError for DeleteFileError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound => ErrorKind::NotFound,
            Self::DbError => ErrorKind::Storage,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "The file with the passed id could not be found.",
            Self::DbError => "Failed to delete file. Check server logs for details",
        }
    }
}

impl TreeError for ExportError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Storage
    }

    fn message(&self) -> &'static str {
        "Failed to export files. Check server logs for details"
    }
}
