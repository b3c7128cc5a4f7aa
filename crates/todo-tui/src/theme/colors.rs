use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const ARCHIVE_BORDER: Color = Color::Yellow;
pub const SELECTED_BG: Color = Color::Blue;

pub const TITLE_TEXT: Color = Color::Cyan;
pub const DONE_TEXT: Color = Color::DarkGray;
pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;

// RGB endpoints for the fade-out transition
pub const FADE_NORMAL_RGB: (u8, u8, u8) = (255, 255, 255);
pub const FADE_DONE_RGB: (u8, u8, u8) = (128, 128, 128);
pub const FADE_TARGET_RGB: (u8, u8, u8) = (32, 32, 32);
