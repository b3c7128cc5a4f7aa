use crossterm::event::KeyCode;
use todo_core::InputState;

pub enum InputAction {
    None,
    Cancel,
    Submit,
}

/// Applies an editing key to the input buffer.
///
/// Submitting is always reported; whether blank text adds a task is the
/// store's call.
pub fn handle_input_key(input: &mut InputState, key_code: KeyCode) -> InputAction {
    match key_code {
        KeyCode::Esc => InputAction::Cancel,
        KeyCode::Enter => InputAction::Submit,
        KeyCode::Char(c) => {
            input.insert_char(c);
            InputAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            InputAction::None
        }
        KeyCode::Delete => {
            input.delete();
            InputAction::None
        }
        KeyCode::Left => {
            input.move_left();
            InputAction::None
        }
        KeyCode::Right => {
            input.move_right();
            InputAction::None
        }
        KeyCode::Home => {
            input.move_home();
            InputAction::None
        }
        KeyCode::End => {
            input.move_end();
            InputAction::None
        }
        _ => InputAction::None,
    }
}
