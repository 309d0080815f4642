use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub comment: Color,   // Grey
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub identifier: Color,
    pub number: Color,
    pub operator: Color,
    pub delimiter: Color,
    pub string: Color,
    pub nonterminal: Color, // Stack nonterminals in the trace
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),      // Blue for keywords
    identifier: Color::Rgb(205, 214, 244),   // Plain foreground
    number: Color::Rgb(250, 179, 135),       // Orange for numbers
    operator: Color::Rgb(148, 226, 213),     // Teal for operators
    delimiter: Color::Rgb(205, 214, 244),    // Plain foreground
    string: Color::Rgb(250, 179, 135),       // Orange for strings
    nonterminal: Color::Rgb(245, 194, 231),  // Pink for E G T S F
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
};
