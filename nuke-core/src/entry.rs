use std::path::PathBuf;

/// A discovered node_modules directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path to the directory (unique key)
    pub path: PathBuf,
    /// Human-readable size, or "?" when it could not be determined
    pub size: String,
    /// Whether the entry is marked for deletion
    pub selected: bool,
}

impl Entry {
    pub fn new(path: PathBuf, size: String) -> Self {
        Self {
            path,
            size,
            selected: false,
        }
    }
}
