use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use nuke_core::format_count;

use crate::app::{AppMode, AppState};

use super::scan_view::progress_indicator;
use super::theme::Theme;
use super::truncate::truncate_left;

/// Header widget showing title, scan root, dry-run banner and status
pub struct Header<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        // Title
        let title = "NUKE";
        let title_style = Style::default()
            .fg(self.theme.blue)
            .add_modifier(Modifier::BOLD);
        buf.set_string(area.x + 1, area.y, title, title_style);

        // Separator
        buf.set_string(
            area.x + 6,
            area.y,
            "─",
            Style::default().fg(self.theme.border),
        );

        // Scan root
        let root = self.state.root_path.to_string_lossy();
        let max_path_len = area.width.saturating_sub(30) as usize;
        let display_path = truncate_left(&root, max_path_len);

        buf.set_string(
            area.x + 8,
            area.y,
            &display_path,
            Style::default().fg(self.theme.fg),
        );

        // Status (right-aligned)
        let status = if self.state.mode == AppMode::Scanning {
            progress_indicator(&self.state.progress, self.state.spinner_frame)
        } else {
            format!(
                "{} of {} folders",
                format_count(self.state.filtered.len() as u64),
                format_count(self.state.entries.len() as u64)
            )
        };

        // Right-align by display width, not byte length (the spinner is
        // multi-byte)
        let status_width = status.chars().count() as u16;
        let status_x = (area.x + area.width).saturating_sub(status_width + 2);
        let status_style = if self.state.mode == AppMode::Scanning {
            Style::default().fg(self.theme.yellow)
        } else {
            Style::default().fg(self.theme.fg_dim)
        };
        buf.set_string(status_x, area.y, &status, status_style);

        // Dry-run banner
        if self.state.dry_run && area.height > 1 {
            buf.set_string(
                area.x + 1,
                area.y + 1,
                "DRY RUN MODE — nothing will be deleted",
                Style::default()
                    .fg(self.theme.yellow)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_non_ascii_root_renders_without_panic() {
        let theme = Theme::default();
        let state = AppState::new(PathBuf::from("/ö/äü".repeat(20)), false);
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 2));
        let area = buf.area;

        Header::new(&state, &theme).render(area, &mut buf);
    }
}
