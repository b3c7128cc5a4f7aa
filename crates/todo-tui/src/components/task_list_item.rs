use crate::theme::*;
use chrono::{DateTime, Local, Utc};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use todo_domain::Task;

pub struct TaskListItemConfig<'a> {
    pub task: &'a Task,
    pub is_selected: bool,
    /// Set while the task is fading out.
    pub opacity: Option<f32>,
    pub archived_at: Option<DateTime<Utc>>,
}

pub fn render_task_list_item(config: TaskListItemConfig) -> Line<'static> {
    let is_done = config.task.completed;

    let (checkbox, fade_from) = if is_done {
        ("[x]", FADE_DONE_RGB)
    } else {
        ("[ ]", FADE_NORMAL_RGB)
    };

    let faded = config
        .opacity
        .map(|opacity| Style::default().fg(fade_color(fade_from, opacity)));

    let mut base_style = match faded {
        Some(style) => style,
        None if is_done => Style::default().fg(DONE_TEXT),
        None => normal_text(),
    };
    let mut text_style = match faded {
        Some(style) if is_done => style.add_modifier(Modifier::CROSSED_OUT),
        None if is_done => done_text(),
        _ => base_style,
    };

    if config.is_selected {
        base_style = base_style.bg(SELECTED_BG);
        text_style = text_style.bg(SELECTED_BG);
    }

    let indicator = if config.is_selected { "► " } else { "  " };

    let mut spans = vec![
        Span::styled(format!("{}{} ", indicator, checkbox), base_style),
        Span::styled(config.task.text.clone(), text_style),
    ];

    if let Some(archived_at) = config.archived_at {
        let mut suffix_style = label_text();
        if config.is_selected {
            suffix_style = suffix_style.bg(SELECTED_BG);
        }
        let local: DateTime<Local> = archived_at.into();
        spans.push(Span::styled(
            format!(" (removed {})", local.format("%Y-%m-%d %H:%M")),
            suffix_style,
        ));
    }

    Line::from(spans)
}
