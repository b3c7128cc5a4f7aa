use serde::Serialize;
use todo_core::{TodoError, TodoResult};
use todo_domain::commands::{
    AddTask, BeginRemoveTask, Command, CommandContext, CommitRemoveTask, DeleteArchivedTask,
    SetViewMode, ToggleTask,
};
use todo_domain::{ArchivedTask, Task, TaskId, TaskListStore, ViewMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayAction {
    Add(String),
    Toggle(usize),
    Remove(usize),
    Delete(usize),
    View(ViewMode),
}

#[derive(Serialize)]
pub struct ReplaySummary<'a> {
    pub view_mode: ViewMode,
    pub tasks: &'a [Task],
    pub archived_tasks: &'a [ArchivedTask],
    pub visible: Vec<&'a Task>,
}

impl<'a> ReplaySummary<'a> {
    pub fn from_store(store: &'a TaskListStore) -> Self {
        Self {
            view_mode: store.view_mode(),
            tasks: store.tasks(),
            archived_tasks: store.archived_tasks(),
            visible: store.visible_tasks(),
        }
    }
}

fn parse_position(verb: &str, arg: &str) -> TodoResult<usize> {
    let position: usize = arg.trim().parse().map_err(|_| {
        TodoError::validation(format!("{} expects a position, got '{}'", verb, arg.trim()))
    })?;
    if position == 0 {
        return Err(TodoError::validation("positions start at 1"));
    }
    Ok(position)
}

/// Parses one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> TodoResult<Option<ReplayAction>> {
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    let action = match verb {
        // Text after the verb is kept verbatim
        "add" => ReplayAction::Add(rest.to_string()),
        "toggle" => ReplayAction::Toggle(parse_position(verb, rest)?),
        "remove" => ReplayAction::Remove(parse_position(verb, rest)?),
        "delete" => ReplayAction::Delete(parse_position(verb, rest)?),
        "view" => ReplayAction::View(rest.parse()?),
        other => return Err(TodoError::validation(format!("unknown action '{}'", other))),
    };
    Ok(Some(action))
}

pub fn parse_script(script: &str) -> TodoResult<Vec<ReplayAction>> {
    let mut actions = Vec::new();
    for (idx, line) in script.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(action)) => actions.push(action),
            Ok(None) => {}
            Err(TodoError::Validation(message)) => {
                return Err(TodoError::validation(format!("line {}: {}", idx + 1, message)));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(actions)
}

fn active_id(store: &TaskListStore, position: usize) -> Option<TaskId> {
    store.tasks().get(position - 1).map(|t| t.id)
}

fn archived_id(store: &TaskListStore, position: usize) -> Option<TaskId> {
    store.archived_tasks().get(position - 1).map(|a| a.id())
}

fn execute(store: &mut TaskListStore, command: &dyn Command) -> TodoResult<()> {
    tracing::debug!("Replaying: {}", command.description());
    let mut context = CommandContext::new(store);
    command.execute(&mut context)
}

/// Applies one action. Positions past the end of a list are ignored the
/// same way unknown ids are.
pub fn apply(store: &mut TaskListStore, action: &ReplayAction) -> TodoResult<()> {
    match action {
        ReplayAction::Add(text) => execute(store, &AddTask { text: text.clone() }),
        ReplayAction::Toggle(position) => match active_id(store, *position) {
            Some(task_id) => execute(store, &ToggleTask { task_id }),
            None => Ok(()),
        },
        ReplayAction::Remove(position) => match active_id(store, *position) {
            Some(task_id) => {
                execute(store, &BeginRemoveTask { task_id })?;
                execute(store, &CommitRemoveTask { task_id })
            }
            None => Ok(()),
        },
        ReplayAction::Delete(position) => match archived_id(store, *position) {
            Some(task_id) => execute(store, &DeleteArchivedTask { task_id }),
            None => Ok(()),
        },
        ReplayAction::View(view_mode) => execute(
            store,
            &SetViewMode {
                view_mode: *view_mode,
            },
        ),
    }
}

pub fn run(script: &str) -> TodoResult<TaskListStore> {
    let actions = parse_script(script)?;
    let mut store = TaskListStore::new();
    for action in &actions {
        apply(&mut store, action)?;
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_variants() {
        assert_eq!(
            parse_line("add Buy milk").unwrap(),
            Some(ReplayAction::Add("Buy milk".to_string()))
        );
        assert_eq!(parse_line("toggle 2").unwrap(), Some(ReplayAction::Toggle(2)));
        assert_eq!(parse_line("remove 1").unwrap(), Some(ReplayAction::Remove(1)));
        assert_eq!(parse_line("delete 3").unwrap(), Some(ReplayAction::Delete(3)));
        assert_eq!(
            parse_line("view archived").unwrap(),
            Some(ReplayAction::View(ViewMode::Archived))
        );
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# setup").unwrap(), None);
    }

    #[test]
    fn test_bare_add_parses_to_empty_text() {
        assert_eq!(
            parse_line("add").unwrap(),
            Some(ReplayAction::Add(String::new()))
        );
    }

    #[test]
    fn test_invalid_lines() {
        assert!(parse_line("toggle").is_err());
        assert!(parse_line("toggle two").is_err());
        assert!(parse_line("remove 0").is_err());
        assert!(parse_line("view everything").is_err());
        assert!(parse_line("archive 1").is_err());
    }

    #[test]
    fn test_parse_script_reports_line_number() {
        let err = parse_script("add A\n\nbogus").unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_example_scenario() {
        let store = run("add A\nadd B\ntoggle 1\nremove 1\n").unwrap();
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].text, "B");
        assert_eq!(store.archived_tasks().len(), 1);
        assert_eq!(store.archived_tasks()[0].task.text, "A");

        let store = run("add A\nadd B\ntoggle 1\nremove 1\ndelete 1\n").unwrap();
        assert!(store.archived_tasks().is_empty());
    }

    #[test]
    fn test_out_of_range_positions_are_ignored() {
        let store = run("add A\ntoggle 5\nremove 9\ndelete 1\n").unwrap();
        assert_eq!(store.tasks().len(), 1);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_summary_visible_follows_view() {
        let store = run("add A\ntoggle 1\nremove 1\nadd B\nview archived\n").unwrap();
        let summary = ReplaySummary::from_store(&store);
        assert_eq!(summary.view_mode, ViewMode::Archived);
        assert_eq!(summary.visible.len(), 1);
        assert_eq!(summary.visible[0].text, "A");
    }
}
