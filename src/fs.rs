//! The filesystem queries the lister needs, behind a trait so tests can
//! swap in an in-memory tree.

use std::fs;
use std::io;
use std::path::Path;

/// One direct child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_directory: bool,
}

#[cfg(test)]
impl DirectoryEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
        }
    }
}

pub trait FileSystem {
    /// Whether `path` exists. Symlinks are followed.
    fn exists(&self, path: &Path) -> bool;

    /// Direct children of `path`, in whatever order the backend yields them.
    fn list_children(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>>;
}

/// The host filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_children(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            // `is_dir` follows symlinks and reports `false` for dangling ones.
            let is_directory = entry.path().is_dir();
            children.push(DirectoryEntry { name, is_directory });
        }
        Ok(children)
    }
}
