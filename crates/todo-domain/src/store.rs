//! In-memory task list state.
//!
//! [`TaskListStore`] owns the active list, the archive of removed completed
//! tasks and the current [`ViewMode`]. Its methods are the only way to
//! mutate that state. None of them fail: empty text and unknown ids
//! degrade to no-ops.
//!
//! Removal is split in two so the UI can animate it:
//! [`begin_remove`](TaskListStore::begin_remove) only marks the task as
//! fading, and [`commit_remove`](TaskListStore::commit_remove) applies the
//! change once the animation is over. Whether a task is archived or
//! discarded is decided at commit time.

use std::collections::HashSet;

use crate::{ArchivedTask, Task, TaskId, ViewMode};

#[derive(Debug, Clone, Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    archived_tasks: Vec<ArchivedTask>,
    view_mode: ViewMode,
    removing: HashSet<TaskId>,
}

impl TaskListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new incomplete task. Whitespace-only text is ignored.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }
        let task = Task::new(text.to_string());
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.toggle_completed();
        Some(task.completed)
    }

    /// Marks a task as fading out. Returns false when the task is unknown
    /// or already fading.
    pub fn begin_remove(&mut self, id: TaskId) -> bool {
        if !self.tasks.iter().any(|t| t.id == id) {
            return false;
        }
        self.removing.insert(id)
    }

    /// Takes the task out of the active list, archiving it if completed.
    ///
    /// Returns the removed task's completed flag, or `None` if nothing was
    /// removed.
    pub fn commit_remove(&mut self, id: TaskId) -> Option<bool> {
        self.removing.remove(&id);
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(pos);
        let completed = task.completed;
        if completed {
            self.archived_tasks.push(ArchivedTask::new(task));
        }
        Some(completed)
    }

    /// Removes a task without any transition in between.
    pub fn remove(&mut self, id: TaskId) -> Option<bool> {
        self.begin_remove(id);
        self.commit_remove(id)
    }

    pub fn permanently_delete(&mut self, id: TaskId) -> bool {
        let before = self.archived_tasks.len();
        self.archived_tasks.retain(|a| a.id() != id);
        self.archived_tasks.len() != before
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        match self.view_mode {
            ViewMode::Active => self.tasks.iter().collect(),
            ViewMode::Archived => self.archived_tasks.iter().map(|a| a.task_ref()).collect(),
        }
    }

    pub fn visible_len(&self) -> usize {
        match self.view_mode {
            ViewMode::Active => self.tasks.len(),
            ViewMode::Archived => self.archived_tasks.len(),
        }
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn archived_tasks(&self) -> &[ArchivedTask] {
        &self.archived_tasks
    }

    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn is_removing(&self, id: TaskId) -> bool {
        self.removing.contains(&id)
    }

    pub fn removing_count(&self) -> usize {
        self.removing.len()
    }
}
