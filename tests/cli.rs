use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn billetera(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("billetera").unwrap();
    cmd.env("BILLETERA_DATA_DIR", data_dir.path())
        .env_remove("BILLETERA_SKIP_AUTH")
        .env_remove("RUST_LOG");
    cmd
}

fn stored_ids(data_dir: &TempDir) -> Vec<String> {
    let path = data_dir.path().join("data").join("expenses.json");
    let contents = std::fs::read_to_string(path).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&contents).unwrap();
    records
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_requires_authentication() {
    let dir = TempDir::new().unwrap();

    billetera(&dir)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Biometrics unavailable"))
        .stderr(predicate::str::contains("--skip-auth"));
}

#[test]
fn test_skip_auth_from_environment() {
    let dir = TempDir::new().unwrap();

    billetera(&dir)
        .env("BILLETERA_SKIP_AUTH", "true")
        .args(["list", "--period", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses for May 2024"))
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn test_add_list_stats_delete() {
    let dir = TempDir::new().unwrap();

    billetera(&dir)
        .args(["--skip-auth", "add", "Coffee", "3.50"])
        .args(["--date", "2024-05-01", "--category", "Food", "--period", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded: Coffee $3.50"));

    billetera(&dir)
        .args(["--skip-auth", "add", "Bus", "1.20"])
        .args(["--date", "2024-05-02", "--category", "transport", "--period", "2024-05"])
        .assert()
        .success();

    billetera(&dir)
        .args(["--skip-auth", "list", "--period", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Bus"))
        .stdout(predicate::str::contains("Total: $4.70"));

    billetera(&dir)
        .args(["--skip-auth", "stats", "--period", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spent: $4.70"))
        .stdout(predicate::str::contains("74.5%"))
        .stdout(predicate::str::contains("25.5%"));

    let ids = stored_ids(&dir);
    assert_eq!(ids.len(), 2);
    let bus = ids[0].as_str();

    billetera(&dir)
        .args(["--skip-auth", "delete", bus])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm deletion"));
    assert_eq!(stored_ids(&dir).len(), 2);

    billetera(&dir)
        .args(["--skip-auth", "delete", bus, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense: Bus"));
    assert_eq!(stored_ids(&dir).len(), 1);

    billetera(&dir)
        .args(["--skip-auth", "stats", "--period", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spent: $3.50"))
        .stdout(predicate::str::contains("100.0%"));

    billetera(&dir)
        .args(["--skip-auth", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("DELETE"));
}

#[test]
fn test_invalid_input_is_rejected() {
    let dir = TempDir::new().unwrap();

    billetera(&dir)
        .args(["--skip-auth", "add", "   ", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense name is required"));

    billetera(&dir)
        .args(["--skip-auth", "add", "Lunch", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a number greater than 0"));

    billetera(&dir)
        .args(["--skip-auth", "add", "Yacht", "50000000000000000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not exceed 1000000000000"));

    assert!(!dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn test_periods_include_current_month() {
    let dir = TempDir::new().unwrap();

    billetera(&dir)
        .args(["--skip-auth", "add", "Book", "20", "--period", "2023-11"])
        .assert()
        .success();

    billetera(&dir)
        .args(["--skip-auth", "periods"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-11  November 2023"))
        .stdout(predicate::str::contains("(current)"));
}

#[test]
fn test_config_does_not_need_authentication() {
    let dir = TempDir::new().unwrap();

    billetera(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:  $"));
}
