use chrono::NaiveDateTime;

/// the id of the shared root folder every user's tree hangs off of. It is seeded by `init.sql`,
/// has no owner, no parent, and an empty path
pub const ROOT_FOLDER_ID: u32 = 1;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Folder {
    /// cannot be changed, and only retrieved from the database
    pub id: u32,
    pub name: String,
    /// only `None` for the shared root
    pub parent_id: Option<u32>,
    /// only `None` for the shared root
    pub user_id: Option<u32>,
    /// materialized ancestry, e.g. `/Work/Projects`. Always `parent.path + "/" + name`
    pub path: String,
    pub create_date: NaiveDateTime,
    pub update_date: NaiveDateTime,
}

impl Folder {
    pub fn is_root(&self) -> bool {
        self.id == ROOT_FOLDER_ID
    }
}

/// where the text of a file lives.
///
/// `Mirrored` files were uploaded, so their bytes live in the external file store at `path`.
/// For uploaded markdown, `cached` is the database copy of the text. Edits go to the database first
/// and the external copy is written best-effort, so the two can diverge until the next successful write.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FileContent {
    Inline(String),
    Mirrored { path: String, cached: String },
}

impl FileContent {
    /// the text as recorded in the database
    pub fn text(&self) -> &str {
        match self {
            FileContent::Inline(text) => text,
            FileContent::Mirrored { cached, .. } => cached,
        }
    }

    /// the external path, if the content is mirrored
    pub fn external_path(&self) -> Option<&str> {
        match self {
            FileContent::Inline(_) => None,
            FileContent::Mirrored { path, .. } => Some(path),
        }
    }

    pub fn is_uploaded(&self) -> bool {
        matches!(self, FileContent::Mirrored { .. })
    }

    /// same content source, different text
    pub fn with_text(&self, text: String) -> FileContent {
        match self {
            FileContent::Inline(_) => FileContent::Inline(text),
            FileContent::Mirrored { path, .. } => FileContent::Mirrored {
                path: path.clone(),
                cached: text,
            },
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FileRecord {
    pub id: u32,
    pub name: String,
    pub parent_id: u32,
    pub user_id: u32,
    /// lowercase extension of the name, including the dot (e.g. `.md`)
    pub file_type: String,
    /// byte length of the content
    pub size: u64,
    pub content: FileContent,
    pub create_date: NaiveDateTime,
    pub update_date: NaiveDateTime,
}

impl FileRecord {
    pub fn is_markdown(&self) -> bool {
        self.file_type == ".md" || self.name.to_lowercase().ends_with(".md")
    }

    /// uploaded markdown is the only kind of file whose edits are written to the external file store too
    pub fn is_mirrored_markdown(&self) -> bool {
        self.content.is_uploaded() && self.is_markdown()
    }
}

/// the data needed to insert a new file record
#[derive(Debug, Clone)]
pub struct NewFile {
    pub name: String,
    pub content: String,
    pub parent_id: u32,
    pub user_id: u32,
    /// the location in the external file store, for uploaded files
    pub upload: Option<Upload>,
}

/// what the upload collaborator hands over after persisting an uploaded file
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_path: String,
    /// byte length of the stored upload
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, file_type: &str, content: FileContent) -> FileRecord {
        let now = chrono::offset::Local::now().naive_local();
        FileRecord {
            id: 2,
            name: name.to_string(),
            parent_id: ROOT_FOLDER_ID,
            user_id: 1,
            file_type: file_type.to_string(),
            size: 0,
            content,
            create_date: now,
            update_date: now,
        }
    }

    #[test]
    fn mirrored_markdown_by_type() {
        let f = file(
            "notes",
            ".md",
            FileContent::Mirrored {
                path: "a".to_string(),
                cached: String::new(),
            },
        );
        assert!(f.is_mirrored_markdown());
    }

    #[test]
    fn mirrored_markdown_by_name_case_insensitive() {
        let f = file(
            "README.MD",
            "",
            FileContent::Mirrored {
                path: "a".to_string(),
                cached: String::new(),
            },
        );
        assert!(f.is_mirrored_markdown());
    }

    #[test]
    fn inline_markdown_is_not_mirrored() {
        let f = file("a.md", ".md", FileContent::Inline("hi".to_string()));
        assert!(!f.is_mirrored_markdown());
    }

    #[test]
    fn with_text_keeps_external_path() {
        let content = FileContent::Mirrored {
            path: "uploads/a.md".to_string(),
            cached: "old".to_string(),
        };
        let updated = content.with_text("new".to_string());
        assert_eq!(Some("uploads/a.md"), updated.external_path());
        assert_eq!("new", updated.text());
    }
}
