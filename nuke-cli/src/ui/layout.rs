use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main application layout
pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub list: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, searching: bool) -> Self {
        // The search input line only takes space while the user is typing
        let search_height = if searching { 1 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),             // Header (title + dry-run banner)
                Constraint::Length(search_height), // Search input
                Constraint::Min(3),                // Entry list
                Constraint::Length(1),             // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            search: chunks[1],
            list: chunks[2],
            footer: chunks[3],
        }
    }
}
