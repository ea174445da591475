use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::theme::Theme;

/// Search input line, shown only while the user is typing a term
pub struct SearchBar<'a> {
    term: &'a str,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(term: &'a str, theme: &'a Theme) -> Self {
        Self { term, theme }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let input = format!("/{}", self.term);
        buf.set_string(
            area.x + 1,
            area.y,
            &input,
            Style::default()
                .fg(self.theme.green)
                .add_modifier(Modifier::BOLD),
        );
    }
}
