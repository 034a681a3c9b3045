use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_normal: Color,
    pub status_bg: Color,
    pub screen_label: Color,   // The "S C R E E N" banner
    pub seat_free: Color,      // '.' cells
    pub seat_occupied: Color,  // '#' cells
    pub seat_tentative: Color, // 'o' overlay cells
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_normal: Color::Rgb(108, 112, 134), // Grey border
    status_bg: Color::Rgb(50, 50, 70),        // Slightly lighter BG for the bar
    screen_label: Color::Rgb(249, 226, 175),  // Yellow
    seat_free: Color::Rgb(108, 112, 134),     // Grey
    seat_occupied: Color::Rgb(243, 139, 168), // Red
    seat_tentative: Color::Rgb(166, 227, 161), // Green
};
