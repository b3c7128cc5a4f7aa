use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::time::Instant;
use todo_tui::{ui, App};

fn draw(app: &App, now: Instant) -> Buffer {
    let backend = TestBackend::new(80, 14);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| ui::render_at(app, frame, now))
        .unwrap();
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn add(app: &mut App, text: &str, now: Instant) {
    app.handle_key_event(KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE), now);
    for c in text.chars() {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), now);
    }
    app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), now);
    app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), now);
}

#[test]
fn test_empty_screen_shows_title_and_placeholder() {
    let app = App::default();
    let text = screen_text(&draw(&app, Instant::now()));

    assert!(text.contains("To-Do List"));
    assert!(text.contains(ui::PLACEHOLDER));
    assert!(text.contains("No tasks yet."));
    assert!(text.contains("Tasks (0/0 done)"));
}

#[test]
fn test_tasks_render_with_checkboxes() {
    let mut app = App::default();
    let now = Instant::now();
    add(&mut app, "Buy milk", now);
    add(&mut app, "Walk dog", now);
    app.toggle_selected();

    let text = screen_text(&draw(&app, now));
    assert!(text.contains("[ ] Buy milk"));
    assert!(text.contains("[x] Walk dog"));
    assert!(text.contains("Tasks (1/2 done)"));
}

#[test]
fn test_archive_view_title() {
    let mut app = App::default();
    let now = Instant::now();
    app.toggle_view();

    let text = screen_text(&draw(&app, now));
    assert!(text.contains("Archive (0)"));
    assert!(text.contains("No removed tasks."));
    assert!(text.contains("D: delete forever"));
}

#[test]
fn test_fading_task_is_still_drawn() {
    let mut app = App::default();
    let now = Instant::now();
    add(&mut app, "Fading", now);
    app.remove_selected(now);

    let text = screen_text(&draw(&app, now));
    assert!(text.contains("Fading"));
}

#[test]
fn test_long_input_scrolls_to_keep_cursor_visible() {
    let mut app = App::default();
    let now = Instant::now();
    app.handle_key_event(KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE), now);
    let typed = format!("{}END", "a".repeat(100));
    for c in typed.chars() {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), now);
    }

    let mut terminal = Terminal::new(TestBackend::new(80, 14)).unwrap();
    terminal
        .draw(|frame| ui::render_at(&app, frame, now))
        .unwrap();

    let text = screen_text(terminal.backend().buffer());
    assert!(text.contains("aaaEND"));

    let cursor = terminal.get_cursor_position().unwrap();
    assert_eq!((cursor.x, cursor.y), (78, 2));
}
