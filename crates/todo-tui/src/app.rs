use crate::{
    animation::FadeTracker,
    events::{Event, EventHandler},
    input_handler::{handle_input_key, InputAction},
    selection::SelectionState,
    state::StateManager,
    ui,
};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use todo_core::{AppConfig, InputState, TodoResult};
use todo_domain::commands::{
    AddTask, BeginRemoveTask, Command, CommitRemoveTask, DeleteArchivedTask, SetViewMode,
    ToggleTask,
};
use todo_domain::{TaskId, TaskListStore, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Navigating the list
    Normal,
    /// Typing into the "Add a task..." field
    Insert,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub input: InputState,
    pub store: TaskListStore,
    pub selection: SelectionState,
    pub fades: FadeTracker,
    state_manager: StateManager,
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            input: InputState::new(),
            store: TaskListStore::new(),
            selection: SelectionState::new(),
            fades: FadeTracker::new(config.effective_fade_duration()),
            state_manager: StateManager::new(),
            config,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        let idx = self.selection.get()?;
        self.store.visible_tasks().get(idx).map(|t| t.id)
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.mode {
            AppMode::Insert => self.handle_insert_key(key.code),
            AppMode::Normal => self.handle_normal_key(key.code, now),
        }
    }

    fn handle_insert_key(&mut self, key_code: KeyCode) {
        match handle_input_key(&mut self.input, key_code) {
            InputAction::Submit => self.submit_input(),
            InputAction::Cancel => self.mode = AppMode::Normal,
            InputAction::None => {}
        }
    }

    fn handle_normal_key(&mut self, key_code: KeyCode, now: Instant) {
        let len = self.store.visible_len();
        let archived = self.store.view_mode() == ViewMode::Archived;

        match key_code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('i') | KeyCode::Char('a') => {
                if !archived {
                    self.mode = AppMode::Insert;
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.selection.next(len),
            KeyCode::Char('k') | KeyCode::Up => self.selection.prev(len),
            KeyCode::Char('g') | KeyCode::Home => self.selection.jump_to_first(len),
            KeyCode::Char('G') | KeyCode::End => self.selection.jump_to_last(len),
            KeyCode::Char(' ') | KeyCode::Enter if !archived => self.toggle_selected(),
            KeyCode::Char('d') if !archived => self.remove_selected(now),
            KeyCode::Char('D') if archived => self.delete_selected(),
            KeyCode::Char('x') => {
                if archived {
                    self.delete_selected();
                } else {
                    self.remove_selected(now);
                }
            }
            KeyCode::Char('v') | KeyCode::Tab => self.toggle_view(),
            _ => {}
        }
    }

    /// Adds the typed task. The input is cleared only when a task was
    /// actually created, so whitespace stays in the field.
    pub fn submit_input(&mut self) {
        if self.input.is_blank() {
            return;
        }
        let command = AddTask {
            text: self.input.as_str().to_string(),
        };
        if let Some(id) = self.execute(&command).flatten() {
            tracing::info!("Created task: {}", id);
            self.input.clear();
            if self.store.view_mode() == ViewMode::Active {
                self.selection.jump_to_last(self.store.visible_len());
            }
        }
    }

    pub fn toggle_selected(&mut self) {
        if self.store.view_mode() != ViewMode::Active {
            return;
        }
        if let Some(task_id) = self.selected_task_id() {
            self.execute(&ToggleTask { task_id });
        }
    }

    /// Starts the fade for the selected task. The removal itself lands in
    /// [`App::tick`] once the fade is over.
    pub fn remove_selected(&mut self, now: Instant) {
        if self.store.view_mode() != ViewMode::Active {
            return;
        }
        if let Some(task_id) = self.selected_task_id() {
            self.begin_remove(task_id, now);
        }
    }

    pub fn begin_remove(&mut self, task_id: TaskId, now: Instant) {
        if self.store.is_removing(task_id) {
            return;
        }
        self.execute(&BeginRemoveTask { task_id });
        if self.store.is_removing(task_id) {
            self.fades.start(task_id, now);
        }
    }

    pub fn delete_selected(&mut self) {
        if self.store.view_mode() != ViewMode::Archived {
            return;
        }
        if let Some(task_id) = self.selected_task_id() {
            self.execute(&DeleteArchivedTask { task_id });
            tracing::info!("Permanently deleted task: {}", task_id);
            self.selection.clamp(self.store.visible_len());
        }
    }

    pub fn toggle_view(&mut self) {
        let view_mode = self.store.view_mode().toggled();
        self.execute(&SetViewMode { view_mode });
        self.mode = AppMode::Normal;
        self.selection.clear();
        self.selection.clamp(self.store.visible_len());
    }

    /// Commits every removal whose fade has finished.
    pub fn tick(&mut self, now: Instant) {
        let finished = self.fades.take_finished(now);
        if finished.is_empty() {
            return;
        }

        let selected = self.selected_task_id();
        for task_id in finished {
            self.execute(&CommitRemoveTask { task_id });
            tracing::info!("Removed task: {}", task_id);
        }

        // Keep the cursor on the same task when it survived, otherwise
        // leave it at the same row.
        let position = selected.and_then(|id| {
            self.store
                .visible_tasks()
                .iter()
                .position(|task| task.id == id)
        });
        if position.is_some() {
            self.selection.set(position);
        }
        self.selection.clamp(self.store.visible_len());
    }

    fn execute(&mut self, command: &dyn Command) -> Option<Option<TaskId>> {
        match self.state_manager.execute(&mut self.store, command) {
            Ok(created) => Some(created),
            Err(e) => {
                tracing::error!("Command failed ({}): {}", command.description(), e);
                None
            }
        }
    }

    pub async fn run(&mut self) -> TodoResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new(self.config.effective_tick_rate());

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> TodoResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key, Instant::now()),
                Some(Event::Tick) => self.tick(Instant::now()),
                None => break,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
