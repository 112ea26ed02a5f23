use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub status_bg: Color,
    pub selected: Color,  // Magenta, current algorithm
    pub active: Color,    // Cyan, current order
    pub highlight: Color, // Bars touched by the last step
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    selected: Color::Rgb(245, 194, 231),
    active: Color::Rgb(148, 226, 213),
    highlight: Color::Rgb(249, 226, 175),
};
