use super::colors::*;
use ratatui::style::{Color, Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn archive_border() -> Style {
    Style::default().fg(ARCHIVE_BORDER)
}

pub fn title_text() -> Style {
    Style::default()
        .fg(TITLE_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn done_text() -> Style {
    Style::default()
        .fg(DONE_TEXT)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

/// Blends `from` toward the fade target. `opacity` 1.0 is `from` unchanged,
/// 0.0 is the target.
pub fn fade_color(from: (u8, u8, u8), opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    let blend = |a: u8, b: u8| -> u8 {
        (b as f32 + (a as f32 - b as f32) * opacity).round() as u8
    };
    Color::Rgb(
        blend(from.0, FADE_TARGET_RGB.0),
        blend(from.1, FADE_TARGET_RGB.1),
        blend(from.2, FADE_TARGET_RGB.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_color_endpoints() {
        assert_eq!(fade_color(FADE_NORMAL_RGB, 1.0), Color::Rgb(255, 255, 255));
        assert_eq!(fade_color(FADE_NORMAL_RGB, 0.0), Color::Rgb(32, 32, 32));
    }

    #[test]
    fn test_fade_color_clamps_opacity() {
        assert_eq!(fade_color(FADE_DONE_RGB, 3.0), Color::Rgb(128, 128, 128));
        assert_eq!(fade_color(FADE_DONE_RGB, -1.0), Color::Rgb(32, 32, 32));
    }
}
