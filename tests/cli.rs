use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "budget";

fn budget_command(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BUDGET_TRACKER_DATA_DIR", data_dir.path());
    cmd
}

fn run(data_dir: &TempDir, args: &[&str]) -> String {
    let output = budget_command(data_dir)
        .args(args)
        .output()
        .expect("command runs");
    assert!(output.status.success(), "budget {:?} failed", args);
    String::from_utf8(output.stdout).expect("utf-8 output")
}

/// Pull the `exp-xxxxxxxx` id out of an "Added expense: ..." line
fn added_id(stdout: &str) -> String {
    let start = stdout.find("(exp-").expect("id in output") + 1;
    let end = start + stdout[start..].find(')').expect("closing paren");
    stdout[start..end].to_string()
}

#[test]
fn status_without_budget_explains_next_step() {
    let dir = TempDir::new().unwrap();
    budget_command(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("No budget defined"));
}

#[test]
fn set_budget_then_add_expense() {
    let dir = TempDir::new().unwrap();
    budget_command(&dir)
        .args(["set", "100"])
        .assert()
        .success()
        .stdout(contains("Budget set to $100.00"));

    budget_command(&dir)
        .args(["expense", "add", "-n", "Coffee", "-a", "5", "-c", "food"])
        .assert()
        .success()
        .stdout(contains("Added expense: Coffee").and(contains("Remaining budget: $95.00")));

    budget_command(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("$95.00"));
}

#[test]
fn expense_over_budget_is_rejected() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["set", "10"]);

    budget_command(&dir)
        .args(["expense", "add", "-n", "Dinner", "-a", "25", "-c", "food"])
        .assert()
        .failure()
        .stderr(contains("Budget exceeded"));

    budget_command(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("No expenses."));
}

#[test]
fn add_without_budget_is_rejected() {
    let dir = TempDir::new().unwrap();
    budget_command(&dir)
        .args(["expense", "add", "-n", "Coffee", "-a", "5", "-c", "food"])
        .assert()
        .failure()
        .stderr(contains("Budget exceeded"));
}

#[test]
fn empty_name_is_incomplete() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["set", "100"]);

    budget_command(&dir)
        .args(["expense", "add", "-n", "  ", "-a", "5", "-c", "food"])
        .assert()
        .failure()
        .stderr(contains("All fields are required"));
}

#[test]
fn unknown_category_is_reported() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["set", "100"]);

    budget_command(&dir)
        .args(["expense", "add", "-n", "Coffee", "-a", "5", "-c", "gadgets"])
        .assert()
        .failure()
        .stderr(contains("Category not found: gadgets"));
}

#[test]
fn list_filters_by_category() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["set", "200"]);
    run(&dir, &["expense", "add", "-n", "Coffee", "-a", "5", "-c", "food"]);
    run(&dir, &["expense", "add", "-n", "Gym", "-a", "40", "-c", "health"]);

    budget_command(&dir)
        .args(["expense", "list", "-c", "food"])
        .assert()
        .success()
        .stdout(contains("Coffee").and(contains("Gym").not()));

    budget_command(&dir)
        .args(["expense", "list", "-c", "savings"])
        .assert()
        .success()
        .stdout(contains("No expenses."));

    budget_command(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("Coffee").and(contains("Gym")));
}

#[test]
fn edit_checks_budget_against_previous_amount() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["set", "100"]);
    run(&dir, &["expense", "add", "-n", "Groceries", "-a", "50", "-c", "food"]);
    let stdout = run(&dir, &["expense", "add", "-n", "Rent", "-a", "20", "-c", "home"]);
    let id = added_id(&stdout);

    // 30 left; raising Rent by 25 fits, raising it by 40 does not
    budget_command(&dir)
        .args(["expense", "edit", &id, "-a", "45"])
        .assert()
        .success()
        .stdout(contains("Updated expense: Rent").and(contains("$5.00")));

    budget_command(&dir)
        .args(["expense", "edit", &id, "-a", "60"])
        .assert()
        .failure()
        .stderr(contains("Budget exceeded"));

    budget_command(&dir)
        .args(["expense", "show", &id])
        .assert()
        .success()
        .stdout(contains("$45.00"));
}

#[test]
fn delete_expense_by_id() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["set", "100"]);
    let stdout = run(&dir, &["expense", "add", "-n", "Coffee", "-a", "5", "-c", "food"]);
    let id = added_id(&stdout);

    budget_command(&dir)
        .args(["expense", "delete", &id])
        .assert()
        .success()
        .stdout(contains("Deleted expense: Coffee"));

    budget_command(&dir)
        .args(["expense", "show", &id])
        .assert()
        .failure()
        .stderr(contains("Expense not found"));
}

#[test]
fn reset_requires_force() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["set", "100"]);
    run(&dir, &["expense", "add", "-n", "Coffee", "-a", "5", "-c", "food"]);

    budget_command(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("--force"));
    budget_command(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("Coffee"));

    budget_command(&dir)
        .args(["reset", "--force"])
        .assert()
        .success()
        .stdout(contains("1 expenses removed"));
    budget_command(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("No budget defined"));
}

#[test]
fn history_records_changes() {
    let dir = TempDir::new().unwrap();
    budget_command(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(contains("No history recorded yet."));

    run(&dir, &["set", "100"]);
    run(&dir, &["expense", "add", "-n", "Coffee", "-a", "5", "-c", "food"]);

    budget_command(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(contains("Coffee"));
}

#[test]
fn category_list_shows_catalog() {
    let dir = TempDir::new().unwrap();
    budget_command(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(
            contains("Savings")
                .and(contains("Food"))
                .and(contains("Subscriptions")),
        );
}

#[test]
fn add_after_unfinished_edit_appends() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["set", "100"]);
    run(&dir, &["expense", "add", "-n", "Coffee", "-a", "5", "-c", "food"]);

    // a state file left behind by an older build mid-edit
    let state_file = dir.path().join("data").join("budget.json");
    let mut state: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&state_file).unwrap()).unwrap();
    let coffee_id = state["expenses"][0]["id"].clone();
    state["editing_id"] = coffee_id;
    std::fs::write(&state_file, serde_json::to_string(&state).unwrap()).unwrap();

    budget_command(&dir)
        .args(["expense", "add", "-n", "Taxi", "-a", "12", "-c", "leisure"])
        .assert()
        .success()
        .stdout(contains("Added expense: Taxi").and(contains("Remaining budget: $83.00")));

    budget_command(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("Coffee").and(contains("Taxi")));

    let saved = std::fs::read_to_string(&state_file).unwrap();
    assert!(!saved.contains("editing_id"));
}
