use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a database file
fn pw_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pw").expect("Failed to find pw binary");
    cmd.env_remove("PATHWAY_GENERATOR_URL")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

fn create_sample_plan(db_path: &Path) {
    pw_cmd(db_path)
        .args([
            "plan",
            "create",
            "--step",
            "Prepare:Pick a quit date;Tell a friend",
            "--step",
            "Reflect",
            "--step",
            "Follow through:Throw away cigarettes",
            "--addictions",
            "smoking",
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_create_plan_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pw_cmd(&db_path)
        .args(["plan", "create", "--step", "Prepare:Pick a quit date"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1"))
        .stdout(predicate::str::contains("# 1. Your Personalized Plan"))
        .stdout(predicate::str::contains("### Step 1: Prepare"));
}

#[test]
fn test_cli_create_plan_requires_a_step() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pw_cmd(&db_path)
        .args(["plan", "create", "--title", "Nothing"])
        .assert()
        .failure();
}

#[test]
fn test_cli_list_empty_plans() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pw_cmd(&db_path)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_default_command_lists_plans() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_sample_plan(&db_path);

    pw_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Personalized Plan (ID: 1) (0/3)"));
}

#[test]
fn test_cli_walks_tasks_across_empty_step() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_sample_plan(&db_path);

    pw_cmd(&db_path)
        .args(["task", "current", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("> Pick a quit date"))
        .stdout(predicate::str::contains("Previous Task").not());

    pw_cmd(&db_path)
        .args(["task", "next", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("> Tell a friend"));

    pw_cmd(&db_path)
        .args(["task", "next", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Step 3: Follow through"))
        .stdout(predicate::str::contains("**Completed!**"))
        .stdout(predicate::str::contains("Progress: 2 of 3 tasks completed"));

    pw_cmd(&db_path)
        .args(["task", "next", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already at the last task."));

    pw_cmd(&db_path)
        .args(["task", "prev", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("> Tell a friend"));
}

#[test]
fn test_cli_task_on_missing_plan_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pw_cmd(&db_path)
        .args(["task", "current", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("42"));
}

#[test]
fn test_cli_show_plan_marks_progress() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_sample_plan(&db_path);

    pw_cmd(&db_path).args(["task", "next", "1"]).assert().success();

    pw_cmd(&db_path)
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- ✓ Pick a quit date"))
        .stdout(predicate::str::contains("- ➤ Tell a friend"))
        .stdout(predicate::str::contains("- ○ Throw away cigarettes"))
        .stdout(predicate::str::contains("_No tasks in this step._"));
}

#[test]
fn test_cli_import_plan_document() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let document = temp_dir.path().join("plan.json");
    std::fs::write(
        &document,
        r#"{
            "plan": [{"title": "Week one", "tasks": ["Drink water"]}],
            "formData": {"addictions": "sugar", "struggles": "cravings"},
            "story": "A saved story.",
            "info": "Saved information."
        }"#,
    )
    .unwrap();

    pw_cmd(&db_path)
        .args(["plan", "import"])
        .arg(&document)
        .args(["--title", "Sugar plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Sugar plan"));

    // The saved narrative is served without a generator configured.
    pw_cmd(&db_path)
        .args(["story", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A saved story."))
        .stdout(predicate::str::contains("Saved information."))
        .stdout(predicate::str::contains(
            "You are strong and capable of overcoming any challenge.",
        ));
}

#[test]
fn test_cli_story_without_generator_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_sample_plan(&db_path);

    pw_cmd(&db_path)
        .args(["story", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PATHWAY_GENERATOR_URL"));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_sample_plan(&db_path);

    pw_cmd(&db_path)
        .args(["plan", "delete", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("without --confirm"));

    pw_cmd(&db_path)
        .args(["plan", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted plan 'Your Personalized Plan' (ID: 1)",
        ));

    pw_cmd(&db_path)
        .args(["plan", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 1 not found"));
}

#[test]
fn test_cli_rejects_zero_generator_timeout() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pw_cmd(&db_path)
        .args(["--generator-timeout", "0", "plan", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--generator-timeout"));

    pw_cmd(&db_path)
        .args(["--generator-timeout", "5", "plan", "list"])
        .assert()
        .success();
}
