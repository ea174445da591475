use std::path::PathBuf;

/// Progress update during scanning
#[derive(Debug, Clone)]
pub enum ScanMessage {
    /// Progress update
    Progress(ScanProgress),
    /// Scan completed; the entry list is available from the join handle
    Completed,
}

/// Scanning progress statistics
#[derive(Debug, Clone, Default)]
pub struct ScanProgress {
    /// Number of directories walked
    pub dirs_walked: u64,
    /// Number of matches found so far
    pub matches_found: u64,
    /// Number of errors encountered
    pub errors: u64,
    /// Current directory being walked
    pub current_path: Option<PathBuf>,
}
