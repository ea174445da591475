use ratatui::style::Color;

/// Catppuccin Mocha-inspired dark theme with 24-bit RGB colors.
/// Read-only style table handed to every widget; no global mutable state.
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub fg_muted: Color,

    // Accent colors
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub pink: Color,

    // UI elements
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Catppuccin Mocha base
            bg: Color::Rgb(30, 30, 46),          // Base
            fg: Color::Rgb(205, 214, 244),       // Text
            fg_dim: Color::Rgb(166, 173, 200),   // Subtext0
            fg_muted: Color::Rgb(127, 132, 156), // Overlay0

            // Accent colors
            blue: Color::Rgb(137, 180, 250),   // Blue
            green: Color::Rgb(166, 227, 161),  // Green
            yellow: Color::Rgb(249, 226, 175), // Yellow
            pink: Color::Rgb(245, 194, 231),   // Pink

            // UI
            border: Color::Rgb(88, 91, 112), // Surface2
        }
    }
}
