use std::ffi::OsStr;
use std::path::PathBuf;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use jwalk::WalkDir;

use super::progress::{ScanMessage, ScanProgress};
use crate::entry::Entry;
use crate::probe;

/// How often progress updates are sent to the UI
const PROGRESS_INTERVAL: Duration = Duration::from_millis(100);

/// Scanner configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory name to look for
    pub target_name: String,
    /// Number of parallel walk threads (0 = auto)
    pub num_threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target_name: "node_modules".to_string(),
            num_threads: 0, // auto
        }
    }
}

/// Filesystem scanner that finds directories matching a target name
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan a directory tree for matches.
    /// Returns a receiver for progress updates and spawns scanning in
    /// background; the finished entry list comes from the join handle.
    pub fn scan(self, root: PathBuf) -> (Receiver<ScanMessage>, JoinHandle<Vec<Entry>>) {
        let (tx, rx) = crossbeam_channel::unbounded();

        let handle = std::thread::spawn(move || self.scan_sync(root, tx));

        (rx, handle)
    }

    /// Synchronous scan (runs in thread)
    fn scan_sync(self, root: PathBuf, tx: Sender<ScanMessage>) -> Vec<Entry> {
        let target = self.config.target_name.clone();
        let target_for_filter = target.clone();

        // Matches are reported but never descended into, so only the
        // outermost occurrence along each path shows up. Clearing the
        // children of a read directory that is itself a match covers a
        // scan root named like the target.
        let walker = WalkDir::new(&root)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true) // stable order for a given filesystem state
            .process_read_dir(move |_depth, path, _read_dir_state, children| {
                if path.file_name() == Some(OsStr::new(&target_for_filter)) {
                    children.clear();
                    return;
                }
                for child in children.iter_mut().flatten() {
                    if child.file_type.is_dir() && child.file_name == target_for_filter.as_str() {
                        child.read_children_path = None;
                    }
                }
            });

        let walker = if self.config.num_threads > 0 {
            walker.parallelism(jwalk::Parallelism::RayonNewPool(self.config.num_threads))
        } else {
            walker
        };

        let mut entries = Vec::new();
        let mut progress = ScanProgress::default();
        let mut last_update = Instant::now();

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(_e) => {
                    progress.errors += 1;
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }
            progress.dirs_walked += 1;

            let path = entry.path();
            if path.file_name() == Some(OsStr::new(&target)) {
                let size = probe::dir_size(&path);
                entries.push(Entry::new(path.clone(), size));
                progress.matches_found += 1;
            }

            if last_update.elapsed() >= PROGRESS_INTERVAL {
                progress.current_path = Some(path);
                let _ = tx.send(ScanMessage::Progress(progress.clone()));
                last_update = Instant::now();
            }
        }

        let _ = tx.send(ScanMessage::Progress(progress.clone()));
        let _ = tx.send(ScanMessage::Completed);

        entries
    }
}
