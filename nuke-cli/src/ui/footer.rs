use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::AppMode;

use super::theme::Theme;

/// Footer widget showing keyboard hints for the current mode
pub struct Footer<'a> {
    mode: AppMode,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(mode: AppMode, theme: &'a Theme) -> Self {
        Self { mode, theme }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let hints: Vec<(&str, &str)> = match self.mode {
            AppMode::Scanning => vec![("q", "Quit")],
            AppMode::Browsing => vec![
                ("↑↓/jk", "Move"),
                ("Space", "Select"),
                ("Enter", "Delete selected"),
                ("/", "Search"),
                ("q", "Quit"),
            ],
            AppMode::Searching => vec![
                ("type", "Filter"),
                ("Enter", "Apply"),
                ("Esc", "Cancel"),
            ],
            AppMode::Report => vec![],
        };

        let key_style = Style::default()
            .fg(self.theme.fg)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(self.theme.fg_dim);
        let sep_style = Style::default().fg(self.theme.border);

        let mut x = area.x + 1;
        for (i, (key, desc)) in hints.iter().enumerate() {
            // Key; advance by display width, the arrow hints are multi-byte
            buf.set_string(x, area.y, *key, key_style);
            x += key.chars().count() as u16 + 1;

            // Description
            buf.set_string(x, area.y, *desc, desc_style);
            x += desc.chars().count() as u16;

            // Separator
            if i < hints.len() - 1 {
                buf.set_string(x, area.y, "  │  ", sep_style);
                x += 5;
            }

            if x >= area.x + area.width - 5 {
                break;
            }
        }
    }
}
