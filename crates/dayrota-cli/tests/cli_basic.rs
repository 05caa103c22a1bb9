//! CLI end-to-end tests.
//!
//! Tests invoke the CLI via cargo run and parse its output. Every test
//! gets its own data directory through DAYROTA_DATA_DIR, so state never
//! leaks between tests. Assertions avoid anything that depends on the
//! wall clock, such as blocking verdicts with stored preferences.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

const PLAN_JSON: &str = r#"{
    "language": "en",
    "project_title": "Write a short story",
    "tasks": [
        {"task_title": "Outline the plot", "subtasks_text": "- pick a theme\n- sketch characters"},
        {"task_title": "Draft the opening"},
        {"task_title": "Revise and trim"}
    ]
}"#;

const ALL_DAYS: &str = "Mon,Tue,Wed,Thu,Fri,Sat,Sun";

struct TestEnv {
    data_dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            data_dir: TempDir::new().expect("create temp data dir"),
        }
    }

    /// Run the CLI and return (stdout, stderr, exit code).
    fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new("cargo")
            .args(["run", "-p", "dayrota-cli", "--"])
            .args(args)
            .env("DAYROTA_DATA_DIR", self.data_dir.path())
            .output()
            .expect("failed to execute CLI command");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);

        (stdout, stderr, code)
    }

    /// Run the CLI and expect success.
    fn run_ok(&self, args: &[&str]) -> String {
        let (stdout, stderr, code) = self.run(args);
        assert_eq!(code, 0, "command {args:?} failed with code {code}: {stderr}");
        stdout
    }

    /// Write a plan file into the data dir and return its path.
    fn write_plan(&self, contents: &str) -> String {
        let path = self.data_dir.path().join("plan.json");
        std::fs::write(&path, contents).expect("write plan file");
        path.to_str().expect("utf-8 path").to_string()
    }
}

fn json(s: &str) -> serde_json::Value {
    serde_json::from_str(s).unwrap_or_else(|e| panic!("invalid JSON output: {e}\n{s}"))
}

#[test]
fn prefs_set_and_show_round_trip() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&[
        "prefs",
        "set",
        "--tasks-per-day",
        "2",
        "--days",
        ALL_DAYS,
        "--type-order",
        "study,work,life",
    ]);
    assert!(stdout.contains("Preferences saved"));

    let shown = json(&env.run_ok(&["prefs", "show"]));
    assert_eq!(shown["tasks_per_day"], 2);
    assert_eq!(shown["blocking_enabled"], true);
    assert_eq!(shown["type_priority_order"][0], "study");
    assert_eq!(shown["active_days"].as_array().unwrap().len(), 7);
}

#[test]
fn prefs_show_before_set_explains_itself() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["prefs", "show"]);
    assert!(stdout.contains("No preferences stored yet"));
}

#[test]
fn prefs_set_rejects_zero_tasks_per_day() {
    let env = TestEnv::new();
    let (_, stderr, code) = env.run(&["prefs", "set", "--tasks-per-day", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
}

#[test]
fn ensure_without_preferences_reports_not_onboarded() {
    let env = TestEnv::new();
    let outcome = json(&env.run_ok(&["today", "ensure"]));
    assert_eq!(outcome["outcome"], "not_onboarded");
}

#[test]
fn plan_import_creates_project_and_ordered_tasks() {
    let env = TestEnv::new();
    let path = env.write_plan(PLAN_JSON);
    let stdout = env.run_ok(&[
        "plan",
        "import",
        &path,
        "--due",
        "2030-01-15",
        "--project-type",
        "study",
    ]);
    assert!(stdout.contains("Imported project:"));
    assert!(stdout.contains("(3 tasks)"));

    let projects = json(&env.run_ok(&["project", "list"]));
    let projects = projects.as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["title"], "Write a short story");
    assert_eq!(projects[0]["project_type"], "study");
    assert_eq!(projects[0]["due_date"], "2030-01-15");
    assert_eq!(projects[0]["tasks_total"], 3);
    assert_eq!(projects[0]["tasks_completed"], 0);
    assert_eq!(projects[0]["progress_percent"], 0);

    let tasks = json(&env.run_ok(&["task", "list"]));
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 3);
    for (index, task) in tasks.iter().enumerate() {
        assert_eq!(task["order_index"], index as i64 + 1);
        assert_eq!(task["status"], "pending");
    }
    assert_eq!(tasks[0]["title"], "Outline the plot");
}

#[test]
fn plan_import_reads_stdin() {
    let env = TestEnv::new();
    let mut child = Command::new("cargo")
        .args(["run", "-p", "dayrota-cli", "--", "plan", "import", "-"])
        .env("DAYROTA_DATA_DIR", env.data_dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn CLI");
    child
        .stdin
        .as_mut()
        .expect("child stdin")
        .write_all(PLAN_JSON.as_bytes())
        .expect("pipe plan JSON");
    let output = child.wait_with_output().expect("wait for CLI");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("(3 tasks)"));
}

#[test]
fn plan_import_rejects_an_empty_task_list() {
    let env = TestEnv::new();
    let path = env.write_plan(r#"{"project_title": "Empty", "tasks": []}"#);
    let (_, stderr, code) = env.run(&["plan", "import", &path]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
}

#[test]
fn ensure_fills_quota_and_reruns_report_quota_met() {
    let env = TestEnv::new();
    env.run_ok(&["prefs", "set", "--tasks-per-day", "2", "--days", ALL_DAYS]);
    let path = env.write_plan(PLAN_JSON);
    env.run_ok(&["plan", "import", &path]);

    let outcome = json(&env.run_ok(&["today", "ensure"]));
    assert_eq!(outcome["outcome"], "planned");
    assert_eq!(outcome["inserted"], 2);
    assert_eq!(outcome["skipped"], 0);

    let view = json(&env.run_ok(&["today", "show"]));
    let assigned = view["tasks"].as_array().unwrap();
    assert_eq!(assigned.len(), 2);
    // Same project, so manual order decides.
    assert_eq!(assigned[0]["task"]["order_index"], 1);
    assert_eq!(assigned[1]["task"]["order_index"], 2);

    let rerun = json(&env.run_ok(&["today", "ensure"]));
    assert_eq!(rerun["outcome"], "quota_met");
    assert_eq!(rerun["assigned"], 2);
}

#[test]
fn manual_add_swap_and_eligible_flow() {
    let env = TestEnv::new();
    let path = env.write_plan(PLAN_JSON);
    env.run_ok(&["plan", "import", &path]);

    let tasks = json(&env.run_ok(&["task", "list"]));
    let first = tasks[0]["id"].as_str().unwrap().to_string();
    let second = tasks[1]["id"].as_str().unwrap().to_string();

    let stdout = env.run_ok(&["today", "add", &first]);
    assert!(stdout.contains("Assigned for"));

    let eligible = json(&env.run_ok(&["today", "eligible"]));
    let eligible_ids: Vec<&str> = eligible
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["task"]["id"].as_str().unwrap())
        .collect();
    assert_eq!(eligible_ids.len(), 2);
    assert!(!eligible_ids.contains(&first.as_str()));

    let view = json(&env.run_ok(&["today", "show"]));
    let assignment_id = view["tasks"][0]["assignment"]["id"].as_str().unwrap().to_string();

    env.run_ok(&["today", "swap", &assignment_id, &second]);
    let view = json(&env.run_ok(&["today", "show"]));
    assert_eq!(view["tasks"][0]["task"]["id"], second.as_str());

    // The swapped-out task is assignable again.
    let eligible = json(&env.run_ok(&["today", "eligible"]));
    let eligible_ids: Vec<&str> = eligible
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["task"]["id"].as_str().unwrap())
        .collect();
    assert!(eligible_ids.contains(&first.as_str()));
    assert!(!eligible_ids.contains(&second.as_str()));
}

#[test]
fn adding_an_unknown_task_fails() {
    let env = TestEnv::new();
    let (_, stderr, code) = env.run(&["today", "add", "no-such-task"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
}

#[test]
fn adding_the_same_task_twice_fails() {
    let env = TestEnv::new();
    let path = env.write_plan(PLAN_JSON);
    env.run_ok(&["plan", "import", &path]);

    let tasks = json(&env.run_ok(&["task", "list"]));
    let first = tasks[0]["id"].as_str().unwrap().to_string();

    env.run_ok(&["today", "add", &first]);
    let (_, stderr, code) = env.run(&["today", "add", &first]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
}

#[test]
fn task_done_is_terminal() {
    let env = TestEnv::new();
    let path = env.write_plan(PLAN_JSON);
    env.run_ok(&["plan", "import", &path]);

    let tasks = json(&env.run_ok(&["task", "list"]));
    let id = tasks[0]["id"].as_str().unwrap().to_string();

    env.run_ok(&["task", "start", &id]);
    env.run_ok(&["task", "done", &id]);
    let (_, _, code) = env.run(&["task", "start", &id]);
    assert_ne!(code, 0);
    let (_, _, code) = env.run(&["task", "done", &id]);
    assert_ne!(code, 0);
}

#[test]
fn status_filter_and_progress_follow_completion() {
    let env = TestEnv::new();
    let path = env.write_plan(PLAN_JSON);
    env.run_ok(&["plan", "import", &path]);

    let tasks = json(&env.run_ok(&["task", "list"]));
    let id = tasks[0]["id"].as_str().unwrap().to_string();
    env.run_ok(&["task", "done", &id]);

    let completed = json(&env.run_ok(&["task", "list", "--status", "completed"]));
    let completed = completed.as_array().unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0]["id"], id.as_str());

    let pending = json(&env.run_ok(&["task", "list", "--status", "pending"]));
    assert_eq!(pending.as_array().unwrap().len(), 2);

    let projects = json(&env.run_ok(&["project", "list"]));
    assert_eq!(projects[0]["tasks_completed"], 1);
    assert_eq!(projects[0]["progress_percent"], 33);
}

#[test]
fn blocking_status_without_preferences_allows() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["blocking", "status"]);
    assert!(stdout.contains("ALLOW"), "stdout: {stdout}");

    let report = json(&env.run_ok(&["blocking", "status", "--json"]));
    assert_eq!(report["enabled"], false);
    assert_eq!(report["block"], false);
}

#[test]
fn blocking_report_counts_open_assignments() {
    let env = TestEnv::new();
    env.run_ok(&["prefs", "set", "--tasks-per-day", "1", "--days", ALL_DAYS]);
    let path = env.write_plan(PLAN_JSON);
    env.run_ok(&["plan", "import", &path]);
    env.run_ok(&["today", "ensure"]);

    let report = json(&env.run_ok(&["blocking", "status", "--json"]));
    assert_eq!(report["enabled"], true);
    assert_eq!(report["assigned_today"], 1);
    assert_eq!(report["incomplete_remaining"], 1);

    let view = json(&env.run_ok(&["today", "show"]));
    let task_id = view["tasks"][0]["task"]["id"].as_str().unwrap().to_string();
    env.run_ok(&["task", "done", &task_id]);

    let report = json(&env.run_ok(&["blocking", "status", "--json"]));
    assert_eq!(report["incomplete_remaining"], 0);
}
