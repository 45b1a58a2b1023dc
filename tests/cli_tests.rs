use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pocketbudget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocketbudget").unwrap();
    cmd.env("POCKETBUDGET_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn read_document(dir: &TempDir) -> serde_json::Value {
    let contents = fs::read_to_string(dir.path().join("data").join("data.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn no_command_prints_intro() {
    let dir = TempDir::new().unwrap();
    pocketbudget(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("pocketbudget --help"));
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    pocketbudget(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized PocketBudget"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").is_dir());
}

#[test]
fn income_category_expense_flow_writes_document() {
    let dir = TempDir::new().unwrap();

    pocketbudget(&dir)
        .args(["income", "set", "3000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$3000.00"));
    pocketbudget(&dir)
        .args(["category", "add", "Rent", "40"])
        .assert()
        .success();
    pocketbudget(&dir)
        .args(["category", "add", "Food", "20"])
        .assert()
        .success();
    pocketbudget(&dir)
        .args(["expense", "add", "Food", "Groceries", "150.50"])
        .assert()
        .success();

    let doc = read_document(&dir);
    assert_eq!(doc["monthly_income"], 3000.0);
    assert_eq!(doc["categories"][0]["name"], "Rent");
    assert_eq!(doc["categories"][1]["percentage"], 20.0);
    assert_eq!(doc["categories"][1]["sub"][0]["name"], "Groceries");
    assert_eq!(doc["categories"][1]["sub"][0]["amount"], 150.5);

    pocketbudget(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$449.50"))
        .stdout(predicate::str::contains("40.0% unallocated"));
}

#[test]
fn over_allocation_is_rejected() {
    let dir = TempDir::new().unwrap();
    pocketbudget(&dir)
        .args(["category", "add", "Rent", "60"])
        .assert()
        .success();
    pocketbudget(&dir)
        .args(["category", "add", "Food", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("110.0%"));
}

#[test]
fn non_positive_expense_is_rejected() {
    let dir = TempDir::new().unwrap();
    pocketbudget(&dir)
        .args(["category", "add", "Food", "20"])
        .assert()
        .success();
    pocketbudget(&dir)
        .args(["expense", "add", "Food", "X", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn edit_unknown_category_is_not_found() {
    let dir = TempDir::new().unwrap();
    pocketbudget(&dir)
        .args(["category", "edit", "Ghost", "--percentage", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: Ghost"));
}

#[test]
fn edit_category_renames_in_place() {
    let dir = TempDir::new().unwrap();
    pocketbudget(&dir)
        .args(["category", "add", "Rent", "30"])
        .assert()
        .success();
    pocketbudget(&dir)
        .args(["expense", "add", "Rent", "March", "900"])
        .assert()
        .success();
    pocketbudget(&dir)
        .args(["category", "edit", "Rent", "--name", "Housing", "--percentage", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated category: Housing (40.0%)"));

    let doc = read_document(&dir);
    assert_eq!(doc["categories"][0]["name"], "Housing");
    assert_eq!(doc["categories"][0]["sub"][0]["name"], "March");
}

#[test]
fn edit_expense_renames_with_name_flag() {
    let dir = TempDir::new().unwrap();
    pocketbudget(&dir)
        .args(["category", "add", "Food", "20"])
        .assert()
        .success();
    pocketbudget(&dir)
        .args(["expense", "add", "Food", "Lunch", "12"])
        .assert()
        .success();
    pocketbudget(&dir)
        .args(["expense", "edit", "Food", "Lunch", "-n", "Dinner", "--amount", "25"])
        .assert()
        .success();

    let doc = read_document(&dir);
    assert_eq!(doc["categories"][0]["sub"][0]["name"], "Dinner");
    assert_eq!(doc["categories"][0]["sub"][0]["amount"], 25.0);
}

#[test]
fn add_category_defaults_to_unallocated_remainder() {
    let dir = TempDir::new().unwrap();
    pocketbudget(&dir)
        .args(["category", "add", "Rent", "65"])
        .assert()
        .success();
    pocketbudget(&dir)
        .args(["category", "add", "Savings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created category: Savings (35.0%)"));

    let doc = read_document(&dir);
    assert_eq!(doc["categories"][1]["percentage"], 35.0);

    pocketbudget(&dir)
        .args(["category", "add", "Fun"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than 0"));
}

#[test]
fn deleting_unknown_category_succeeds() {
    let dir = TempDir::new().unwrap();
    pocketbudget(&dir)
        .args(["category", "delete", "Ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to delete"));
}

#[test]
fn corrupt_document_warns_and_starts_empty() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data").join("data.json"), "{ nope").unwrap();

    pocketbudget(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be read"))
        .stdout(predicate::str::contains("No categories found."));
}

#[test]
fn history_lists_changes() {
    let dir = TempDir::new().unwrap();
    pocketbudget(&dir)
        .args(["category", "add", "Food", "20"])
        .assert()
        .success();
    pocketbudget(&dir)
        .args(["category", "delete", "Food"])
        .assert()
        .success();

    pocketbudget(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Category Food"))
        .stdout(predicate::str::contains("DELETE Category Food"));
}

#[test]
fn data_dir_flag_overrides_environment() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    pocketbudget(&env_dir)
        .arg("--data-dir")
        .arg(flag_dir.path())
        .args(["income", "set", "100"])
        .assert()
        .success();

    assert!(flag_dir.path().join("data").join("data.json").exists());
    assert!(!env_dir.path().join("data").exists());
}
