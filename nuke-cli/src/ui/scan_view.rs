use nuke_core::{ScanProgress, format_count};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Widget},
};

use super::theme::Theme;
use super::truncate::truncate_left;

/// Braille spinner characters
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Loading banner shown while the scan runs
pub struct ScanView<'a> {
    progress: &'a ScanProgress,
    spinner_frame: usize,
    theme: &'a Theme,
}

impl<'a> ScanView<'a> {
    pub fn new(progress: &'a ScanProgress, spinner_frame: usize, theme: &'a Theme) -> Self {
        Self {
            progress,
            spinner_frame,
            theme,
        }
    }
}

impl Widget for ScanView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Draw border
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width < 20 {
            return;
        }

        // Spinner
        let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
        let spinner_style = Style::default()
            .fg(self.theme.blue)
            .add_modifier(Modifier::BOLD);

        buf.set_string(inner.x, inner.y, spinner.to_string(), spinner_style);
        buf.set_string(
            inner.x + 2,
            inner.y,
            " Scanning for node_modules folders...",
            Style::default().fg(self.theme.fg),
        );

        // Current path (truncated)
        if let Some(path) = &self.progress.current_path {
            let path_str = path.to_string_lossy();
            let max_len = inner.width.saturating_sub(2) as usize;
            let display_path = truncate_left(&path_str, max_len);

            buf.set_string(
                inner.x,
                inner.y + 1,
                &display_path,
                Style::default().fg(self.theme.fg_dim),
            );
        }

        // Stats line
        let stats = format!(
            "{} dirs walked  {} found  {} errors",
            format_count(self.progress.dirs_walked),
            format_count(self.progress.matches_found),
            format_count(self.progress.errors),
        );

        buf.set_string(
            inner.x,
            inner.y + 2,
            &stats,
            Style::default().fg(self.theme.fg_muted),
        );
    }
}

/// Compact progress indicator for the header
pub fn progress_indicator(progress: &ScanProgress, spinner_frame: usize) -> String {
    let spinner = SPINNER[spinner_frame % SPINNER.len()];
    format!(
        "{} {} dirs, {} found",
        spinner,
        format_count(progress.dirs_walked),
        format_count(progress.matches_found)
    )
}
