use crate::app::{App, AppMode};
use crate::components::*;
use crate::theme::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;
use todo_domain::ViewMode;

pub const PLACEHOLDER: &str = "Add a task...";

pub fn render(app: &App, frame: &mut Frame) {
    render_at(app, frame, Instant::now());
}

/// Renders the whole screen with fades evaluated at `now`.
pub fn render_at(app: &App, frame: &mut Frame, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_input(app, frame, chunks[1]);
    render_tasks_panel(app, frame, chunks[2], now);
    render_footer(app, frame, chunks[3]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title =
        Paragraph::new(Span::styled("To-Do List", title_text())).alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let is_editing = app.mode == AppMode::Insert;

    let content = if app.input.is_empty() && !is_editing {
        Line::from(Span::styled(PLACEHOLDER, label_text()))
    } else {
        Line::from(Span::styled(app.input.as_str().to_string(), normal_text()))
    };

    let (scroll_x, cursor_x) = input_viewport(area, app.input.cursor_column());

    let config = PanelConfig::new("New task").focused(is_editing);
    render_panel(
        frame,
        area,
        &config,
        Paragraph::new(content).scroll((0, scroll_x)),
    );

    if is_editing {
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

/// Horizontal scroll of the input field and the terminal column of its
/// cursor. Long input scrolls so the cursor stays inside the borders.
pub fn input_viewport(area: Rect, cursor_column: usize) -> (u16, u16) {
    let inner_width = usize::from(area.width.saturating_sub(2));
    let offset = scroll_offset(Some(cursor_column), inner_width);
    let column = to_u16(cursor_column - offset);
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(column)
        .min(area.right().saturating_sub(2));
    (to_u16(offset), cursor_x)
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

pub fn build_tasks_panel_title(app: &App) -> String {
    let view_mode = app.store.view_mode();
    match view_mode {
        ViewMode::Active => {
            let done = app.store.tasks().iter().filter(|t| t.completed).count();
            format!(
                "{} ({}/{} done)",
                view_mode.title(),
                done,
                app.store.tasks().len()
            )
        }
        ViewMode::Archived => format!(
            "{} ({})",
            view_mode.title(),
            app.store.archived_tasks().len()
        ),
    }
}

fn render_tasks_panel(app: &App, frame: &mut Frame, area: Rect, now: Instant) {
    let view_mode = app.store.view_mode();
    let visible = app.store.visible_tasks();
    let selected = app.selection.get();

    let mut lines = vec![];

    if visible.is_empty() {
        let message = match view_mode {
            ViewMode::Active => "No tasks yet. Press 'i' to add one!",
            ViewMode::Archived => "No removed tasks.",
        };
        lines.push(Line::from(Span::styled(message, label_text())));
    } else {
        for (idx, task) in visible.iter().enumerate() {
            let archived_at = match view_mode {
                ViewMode::Archived => app.store.archived_tasks().get(idx).map(|a| a.archived_at),
                ViewMode::Active => None,
            };
            lines.push(render_task_list_item(TaskListItemConfig {
                task,
                is_selected: selected == Some(idx) && app.mode == AppMode::Normal,
                opacity: app.fades.opacity(task.id, now),
                archived_at,
            }));
        }
    }

    let viewport = area.height.saturating_sub(2) as usize;
    let scroll = scroll_offset(selected, viewport);

    let title = build_tasks_panel_title(app);
    let mut config = PanelConfig::new(&title).focused(app.mode == AppMode::Normal);
    if view_mode == ViewMode::Archived {
        config = config.with_border_style(archive_border());
    }

    let content = Paragraph::new(lines).scroll((to_u16(scroll), 0));
    render_panel(frame, area, &config, content);
}

/// First visible row so that the selected row stays on screen.
pub fn scroll_offset(selected: Option<usize>, viewport: usize) -> usize {
    match selected {
        Some(idx) if viewport > 0 && idx >= viewport => idx - viewport + 1,
        _ => 0,
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = match (app.mode, app.store.view_mode()) {
        (AppMode::Insert, _) => "Enter: add | Esc: done typing | ←/→: move cursor",
        (AppMode::Normal, ViewMode::Active) => {
            "i: new | j/k: move | Space: complete | d: remove | v: archive | q: quit"
        }
        (AppMode::Normal, ViewMode::Archived) => {
            "j/k: navigate | D: delete forever | v: back to tasks | q: quit"
        }
    };

    let footer = Paragraph::new(help_text)
        .style(label_text())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(None, 5), 0);
        assert_eq!(scroll_offset(Some(4), 5), 0);
        assert_eq!(scroll_offset(Some(5), 5), 1);
        assert_eq!(scroll_offset(Some(12), 5), 8);
        assert_eq!(scroll_offset(Some(3), 0), 0);
        assert_eq!(scroll_offset(Some(usize::MAX), 5), usize::MAX - 4);
    }

    #[test]
    fn test_input_viewport_short_text() {
        let area = Rect::new(0, 1, 20, 3);
        assert_eq!(input_viewport(area, 0), (0, 1));
        assert_eq!(input_viewport(area, 5), (0, 6));
    }

    #[test]
    fn test_input_viewport_scrolls_long_text() {
        // 18 columns inside the borders
        let area = Rect::new(0, 1, 20, 3);
        assert_eq!(input_viewport(area, 17), (0, 18));
        assert_eq!(input_viewport(area, 18), (1, 18));
        assert_eq!(input_viewport(area, 40), (23, 18));
    }

    #[test]
    fn test_input_viewport_saturates() {
        let area = Rect::new(10, 1, 20, 3);
        assert_eq!(input_viewport(area, usize::MAX), (u16::MAX, 28));
        assert_eq!(input_viewport(Rect::new(0, 0, 1, 3), 70_000), (0, 0));
    }
}
