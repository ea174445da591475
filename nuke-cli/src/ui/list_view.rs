use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::AppState;

use super::theme::Theme;
use super::truncate::truncate_left;

/// One row per filtered entry: cursor marker, selection marker, label,
/// size and path
pub struct ListView<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> ListView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for ListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        if self.state.filtered.is_empty() {
            buf.set_string(
                area.x + 1,
                area.y,
                "No matching folders.",
                Style::default().fg(self.theme.fg_muted),
            );
            return;
        }

        // Keep the cursor on screen without tracking scroll state
        let height = area.height as usize;
        let offset = self
            .state
            .cursor
            .saturating_sub(height.saturating_sub(1));

        for (i, &idx) in self
            .state
            .filtered
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
        {
            let entry = &self.state.entries[idx];
            let y = area.y + (i - offset) as u16;

            if i == self.state.cursor {
                buf.set_string(
                    area.x + 1,
                    y,
                    ">",
                    Style::default()
                        .fg(self.theme.pink)
                        .add_modifier(Modifier::BOLD),
                );
            }

            let mark = if entry.selected { "[x]" } else { "[ ]" };
            let mark_style = if entry.selected {
                Style::default()
                    .fg(self.theme.green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.fg_dim)
            };
            buf.set_string(area.x + 3, y, mark, mark_style);

            buf.set_string(
                area.x + 7,
                y,
                format!("{:<15}", "node_modules"),
                Style::default().fg(self.theme.fg),
            );
            buf.set_string(
                area.x + 23,
                y,
                format!("{:>8}", entry.size),
                Style::default().fg(self.theme.yellow),
            );

            let path = entry.path.to_string_lossy();
            let max_path = (area.width as usize).saturating_sub(34);
            let display_path = truncate_left(&path, max_path);
            buf.set_string(
                area.x + 33,
                y,
                &display_path,
                Style::default().fg(self.theme.fg_dim),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuke_core::Entry;
    use std::path::PathBuf;

    #[test]
    fn test_non_ascii_entry_paths_render_without_panic() {
        let theme = Theme::default();
        let mut state = AppState::new(PathBuf::from("/root"), false);
        state.set_entries(vec![Entry::new(
            PathBuf::from(format!("/säg/{}/node_modules", "ö".repeat(80))),
            "1.0 MB".to_string(),
        )]);
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 4));
        let area = buf.area;

        ListView::new(&state, &theme).render(area, &mut buf);
    }
}
