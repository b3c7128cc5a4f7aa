use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn todo() -> Command {
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.env_remove("TODO_DEBUG_LOG");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

fn texts(items: &Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| {
            item.get("task")
                .unwrap_or(item)
                .get("text")
                .unwrap()
                .as_str()
                .unwrap()
                .to_string()
        })
        .collect()
}

mod replay_tests {
    use super::*;

    #[test]
    fn test_replay_from_stdin() {
        let output = todo()
            .arg("replay")
            .write_stdin("add A\nadd B\ntoggle 1\nremove 1\n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["view_mode"], "active");
        assert_eq!(texts(&json["data"]["tasks"]), vec!["B"]);
        assert_eq!(texts(&json["data"]["archived_tasks"]), vec!["A"]);
        assert_eq!(texts(&json["data"]["visible"]), vec!["B"]);
    }

    #[test]
    fn test_replay_from_file() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("script.txt");
        fs::write(
            &script,
            "# example\nadd A\nadd B\ntoggle 1\nremove 1\nview archived\n",
        )
        .unwrap();

        let output = todo()
            .args(["replay", script.to_str().unwrap()])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["data"]["view_mode"], "archived");
        assert_eq!(texts(&json["data"]["visible"]), vec!["A"]);
    }

    #[test]
    fn test_incomplete_removed_task_is_discarded() {
        let output = todo()
            .arg("replay")
            .write_stdin("add A\nremove 1\n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert!(texts(&json["data"]["tasks"]).is_empty());
        assert!(texts(&json["data"]["archived_tasks"]).is_empty());
    }

    #[test]
    fn test_whitespace_add_is_ignored() {
        let output = todo()
            .arg("replay")
            .write_stdin("add    \nadd Real\n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(texts(&json["data"]["tasks"]), vec!["Real"]);
    }

    #[test]
    fn test_malformed_script_fails_with_error_envelope() {
        todo()
            .arg("replay")
            .write_stdin("add A\ntoggle first\n")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("\"success\":false"))
            .stderr(predicate::str::contains("line 2"));
    }

    #[test]
    fn test_missing_script_file_fails() {
        let dir = tempdir().unwrap();
        todo()
            .args(["replay", dir.path().join("nope.txt").to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read script"));
    }
}

mod misc_tests {
    use super::*;

    #[test]
    fn test_help_lists_subcommands() {
        todo()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("replay"))
            .stdout(predicate::str::contains("--fade-ms"));
    }

    #[test]
    fn test_completions_bash() {
        todo()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("todo"));
    }
}
