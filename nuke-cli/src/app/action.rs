/// User actions that can be performed in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up
    MoveUp,
    /// Move cursor down
    MoveDown,
    /// Toggle selection on the entry under the cursor
    Toggle,
    /// Confirm deletion of all selected entries
    Confirm,
    /// Enter search mode
    EnterSearch,
    /// Append a character to the search term
    SearchChar(char),
    /// Remove the last character from the search term
    SearchBackspace,
    /// Leave search mode, dropping the filter
    SearchCancel,
    /// Leave search mode, keeping the filter
    SearchAccept,
    /// Quit without deleting anything
    Quit,
    /// No action (for tick events)
    Tick,
}
