use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NukeError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NukeError>;

/// Validate and canonicalize the scan root
pub fn validate_root(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(NukeError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(NukeError::NotADirectory(path.to_path_buf()));
    }
    Ok(path.canonicalize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_root_accepts_directory() {
        let temp = TempDir::new().unwrap();
        let root = validate_root(temp.path()).unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn test_validate_root_rejects_missing_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        assert!(matches!(
            validate_root(&missing),
            Err(NukeError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_io_errors_convert() {
        let err: NukeError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, NukeError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_validate_root_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            validate_root(&file),
            Err(NukeError::NotADirectory(_))
        ));
    }
}
