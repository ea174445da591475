use std::path::PathBuf;

use nuke_core::{Entry, ScanProgress, filter_indices};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Scanning filesystem for matches
    Scanning,
    /// Browsing results
    Browsing,
    /// Editing the search term
    Searching,
    /// Terminal state: deletion pass finished (or run aborted)
    Report,
}

/// Outcome of one entry in the deletion pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeOutcome {
    pub path: PathBuf,
    /// None on success (or dry run); the OS error otherwise
    pub error: Option<String>,
}

/// Application state
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Root path being scanned
    pub root_path: PathBuf,
    /// Every entry found by the scan, in scan order
    pub entries: Vec<Entry>,
    /// Filtered view: indices into `entries`
    pub filtered: Vec<usize>,
    /// Cursor position within the filtered view
    pub cursor: usize,
    /// Active search term
    pub search_term: String,
    /// Preview deletions without removing anything
    pub dry_run: bool,
    /// Deletion pass record, written once at confirmation
    pub outcomes: Vec<PurgeOutcome>,
    /// Current scan progress
    pub progress: ScanProgress,
    /// Spinner frame for animation
    pub spinner_frame: usize,
    /// Whether app should quit
    pub should_quit: bool,
}

impl AppState {
    pub fn new(root_path: PathBuf, dry_run: bool) -> Self {
        Self {
            mode: AppMode::Scanning,
            root_path,
            entries: Vec::new(),
            filtered: Vec::new(),
            cursor: 0,
            search_term: String::new(),
            dry_run,
            outcomes: Vec::new(),
            progress: ScanProgress::default(),
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Install scan results and become interactive
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.filtered = (0..entries.len()).collect();
        self.entries = entries;
        self.cursor = 0;
        self.mode = AppMode::Browsing;
    }

    /// Update scan progress
    pub fn update_progress(&mut self, progress: ScanProgress) {
        self.progress = progress;
    }

    /// Advance spinner animation
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % 10;
    }

    /// Move cursor up
    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor down
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.filtered.len() {
            self.cursor += 1;
        }
    }

    /// Flip selection on the entry under the cursor.
    /// The view holds indices into `entries`, so the flip is visible in the
    /// full set without any re-sync step.
    pub fn toggle_selected(&mut self) {
        if let Some(&idx) = self.filtered.get(self.cursor) {
            self.entries[idx].selected = !self.entries[idx].selected;
        }
    }

    /// Enter search mode with a fresh term; the view is untouched until typing
    pub fn enter_search(&mut self) {
        self.mode = AppMode::Searching;
        self.search_term.clear();
    }

    /// Append a character to the search term and refilter
    pub fn search_push(&mut self, c: char) {
        self.search_term.push(c);
        self.refilter();
    }

    /// Remove the last character from the search term and refilter
    pub fn search_backspace(&mut self) {
        if self.search_term.pop().is_some() {
            self.refilter();
        }
    }

    /// Leave search mode, dropping the filter
    pub fn cancel_search(&mut self) {
        self.mode = AppMode::Browsing;
        self.search_term.clear();
        self.filtered = (0..self.entries.len()).collect();
        self.clamp_cursor();
    }

    /// Leave search mode, keeping the current filter and term
    pub fn accept_search(&mut self) {
        self.mode = AppMode::Browsing;
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(&self.entries, &self.search_term);
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.filtered.len() {
            self.cursor = self.filtered.len().saturating_sub(1);
        }
    }

    /// Run the deletion pass over every selected entry, in scan order.
    /// Each removal is attempted independently; a failure is recorded in
    /// that entry's outcome and never aborts the rest of the batch.
    pub fn confirm_purge(&mut self) {
        let mut outcomes = Vec::new();
        for entry in self.entries.iter().filter(|e| e.selected) {
            let error = if self.dry_run {
                None
            } else {
                std::fs::remove_dir_all(&entry.path)
                    .err()
                    .map(|e| e.to_string())
            };
            outcomes.push(PurgeOutcome {
                path: entry.path.clone(),
                error,
            });
        }
        self.outcomes = outcomes;
        self.mode = AppMode::Report;
        self.should_quit = true;
    }

    /// Abort without deleting anything
    pub fn quit(&mut self) {
        self.mode = AppMode::Report;
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn entry(path: &str) -> Entry {
        Entry::new(PathBuf::from(path), "1.0 MB".to_string())
    }

    fn browsing_state(paths: &[&str]) -> AppState {
        let mut state = AppState::new(PathBuf::from("/root"), false);
        state.set_entries(paths.iter().map(|p| entry(p)).collect());
        state
    }

    #[test]
    fn test_scan_complete_enters_browsing() {
        let state = browsing_state(&["/x/node_modules", "/y/node_modules"]);
        assert_eq!(state.mode, AppMode::Browsing);
        assert_eq!(state.filtered, vec![0, 1]);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut state = browsing_state(&["/x/node_modules", "/y/node_modules"]);
        state.move_up();
        assert_eq!(state.cursor, 0);
        state.move_down();
        state.move_down();
        state.move_down();
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_movement_on_empty_set_is_noop() {
        let mut state = browsing_state(&[]);
        state.move_down();
        state.move_up();
        assert_eq!(state.cursor, 0);
        state.toggle_selected();
        assert!(state.entries.is_empty());
    }

    #[test]
    fn test_toggle_through_filtered_view_hits_full_set() {
        let mut state = browsing_state(&["/x/node_modules", "/y/node_modules"]);
        state.enter_search();
        state.search_push('y');
        assert_eq!(state.filtered, vec![1]);

        state.toggle_selected();
        assert!(state.entries[1].selected);
        assert!(!state.entries[0].selected);
    }

    #[test]
    fn test_cancel_search_restores_view_and_selections() {
        let mut state = browsing_state(&["/x/node_modules", "/y/node_modules"]);
        state.enter_search();
        state.search_push('y');
        state.toggle_selected();
        state.cancel_search();

        assert_eq!(state.mode, AppMode::Browsing);
        assert!(state.search_term.is_empty());
        assert_eq!(state.filtered, vec![0, 1]);
        assert!(state.entries[1].selected);
    }

    #[test]
    fn test_accept_search_keeps_filter() {
        let mut state = browsing_state(&["/x/node_modules", "/y/node_modules"]);
        state.enter_search();
        state.search_push('y');
        state.accept_search();

        assert_eq!(state.mode, AppMode::Browsing);
        assert_eq!(state.search_term, "y");
        assert_eq!(state.filtered, vec![1]);
    }

    #[test]
    fn test_enter_search_leaves_view_untouched() {
        let mut state = browsing_state(&["/x/node_modules", "/y/node_modules"]);
        state.enter_search();
        state.search_push('y');
        state.accept_search();

        // Re-entering search resets the term but not yet the view
        state.enter_search();
        assert!(state.search_term.is_empty());
        assert_eq!(state.filtered, vec![1]);
    }

    #[test]
    fn test_cursor_clamps_when_filter_shrinks_view() {
        let mut state = browsing_state(&[
            "/a/node_modules",
            "/b/node_modules",
            "/c/node_modules",
        ]);
        state.cursor = 2;
        state.enter_search();
        state.search_push('a');
        assert_eq!(state.filtered, vec![0]);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_backspace_on_empty_term_is_noop() {
        let mut state = browsing_state(&["/x/node_modules", "/y/node_modules"]);
        state.enter_search();
        state.search_push('y');
        state.search_backspace();
        assert_eq!(state.filtered, vec![0, 1]);
        state.search_backspace();
        assert_eq!(state.filtered, vec![0, 1]);
        assert!(state.search_term.is_empty());
    }

    #[test]
    fn test_quit_leaves_outcomes_empty() {
        let mut state = browsing_state(&["/x/node_modules"]);
        state.entries[0].selected = true;
        state.quit();
        assert_eq!(state.mode, AppMode::Report);
        assert!(state.outcomes.is_empty());
        assert!(state.should_quit);
    }

    fn make_module_dir(root: &Path, rel: &str) -> PathBuf {
        let dir = root.join(rel);
        fs::create_dir_all(dir.join("pkg")).unwrap();
        fs::write(dir.join("pkg/index.js"), "x").unwrap();
        dir
    }

    #[test]
    fn test_dry_run_lists_selected_but_deletes_nothing() {
        let temp = TempDir::new().unwrap();
        let a = make_module_dir(temp.path(), "a/node_modules");
        let b = make_module_dir(temp.path(), "b/node_modules");

        let mut state = AppState::new(temp.path().to_path_buf(), true);
        state.set_entries(vec![
            Entry::new(a.clone(), "1.0 MB".to_string()),
            Entry::new(b.clone(), "1.0 MB".to_string()),
        ]);
        state.entries[0].selected = true;
        state.entries[1].selected = true;
        state.confirm_purge();

        assert_eq!(state.mode, AppMode::Report);
        let paths: Vec<_> = state.outcomes.iter().map(|o| o.path.clone()).collect();
        assert_eq!(paths, vec![a.clone(), b.clone()]);
        assert!(state.outcomes.iter().all(|o| o.error.is_none()));
        assert!(a.exists());
        assert!(b.exists());
    }

    #[test]
    fn test_purge_removes_exactly_the_selected_dirs() {
        let temp = TempDir::new().unwrap();
        let a = make_module_dir(temp.path(), "a/node_modules");
        let b = make_module_dir(temp.path(), "b/node_modules");
        let c = make_module_dir(temp.path(), "c/node_modules");

        let mut state = AppState::new(temp.path().to_path_buf(), false);
        state.set_entries(vec![
            Entry::new(a.clone(), "1.0 MB".to_string()),
            Entry::new(b.clone(), "1.0 MB".to_string()),
            Entry::new(c.clone(), "1.0 MB".to_string()),
        ]);
        state.entries[0].selected = true;
        state.entries[2].selected = true;
        state.confirm_purge();

        let paths: Vec<_> = state.outcomes.iter().map(|o| o.path.clone()).collect();
        assert_eq!(paths, vec![a.clone(), c.clone()]);
        assert!(state.outcomes.iter().all(|o| o.error.is_none()));
        assert!(!a.exists());
        assert!(b.exists());
        assert!(!c.exists());
    }

    #[test]
    fn test_purge_failure_is_recorded_and_does_not_stop_the_batch() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("vanished/node_modules");
        let real = make_module_dir(temp.path(), "real/node_modules");

        let mut state = AppState::new(temp.path().to_path_buf(), false);
        state.set_entries(vec![
            Entry::new(gone.clone(), "?".to_string()),
            Entry::new(real.clone(), "1.0 MB".to_string()),
        ]);
        state.entries[0].selected = true;
        state.entries[1].selected = true;
        state.confirm_purge();

        assert_eq!(state.outcomes.len(), 2);
        assert!(state.outcomes[0].error.is_some());
        assert!(state.outcomes[1].error.is_none());
        assert!(!real.exists());
    }
}
