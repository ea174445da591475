use std::path::Path;
use std::process::Command;

use crate::size::format_size;

/// Sentinel shown when a directory's size cannot be determined
pub const UNKNOWN_SIZE: &str = "?";

/// Measure a directory's size as a human-readable string.
///
/// Shells out to `du -sh`, falling back to a native walk when `du` is
/// missing or fails. Never returns an error; on total failure the "?"
/// sentinel is returned so one unreadable directory cannot abort a scan.
pub fn dir_size(path: &Path) -> String {
    match du_size(path) {
        Some(size) => size,
        None => native_size(path)
            .map(format_size)
            .unwrap_or_else(|| UNKNOWN_SIZE.to_string()),
    }
}

/// Ask `du -sh` for the size, taking the first field of its output
fn du_size(path: &Path) -> Option<String> {
    let output = Command::new("du").arg("-sh").arg(path).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout.split_whitespace().next().map(str::to_string)
}

/// Sum file sizes under `path` with a parallel walk
fn native_size(path: &Path) -> Option<u64> {
    // An unreadable root has no meaningful size
    std::fs::read_dir(path).ok()?;

    let mut total = 0u64;
    for entry in jwalk::WalkDir::new(path).skip_hidden(false) {
        let Ok(entry) = entry else { continue };
        if entry.file_type().is_file()
            && let Ok(meta) = entry.metadata()
        {
            total += meta.len();
        }
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dir_size_reports_a_size() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("blob.bin"), vec![0u8; 4096]).unwrap();

        let size = dir_size(temp.path());
        assert!(!size.is_empty());
        assert_ne!(size, UNKNOWN_SIZE);
    }

    #[test]
    fn test_dir_size_missing_path_is_unknown() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone");
        assert_eq!(dir_size(&missing), UNKNOWN_SIZE);
    }

    #[test]
    fn test_native_size_sums_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "hello").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/b.txt"), "world!!").unwrap();

        assert_eq!(native_size(temp.path()), Some(12));
    }
}
