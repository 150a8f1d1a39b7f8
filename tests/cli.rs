use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bot(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-bot").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_creates_workbook() {
    let data_dir = TempDir::new().unwrap();

    bot(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("workbook").join("Expenses.csv").exists());
    assert!(data_dir.path().join("workbook").join("Salary.csv").exists());
}

#[test]
fn send_records_expense_and_balance() {
    let data_dir = TempDir::new().unwrap();

    bot(&data_dir)
        .args(["send", "/addsalary", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary Added: ₹1000.00"));

    bot(&data_dir)
        .args(["send", "food", "250", "lunch", "via", "UPI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: Food"))
        .stdout(predicate::str::contains("Payment: UPI"))
        .stdout(predicate::str::contains("Remaining Balance: ₹750.00"));

    bot(&data_dir)
        .args(["send", "/balance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance: *₹750.00*"));

    let sheet =
        std::fs::read_to_string(data_dir.path().join("workbook").join("Expenses.csv")).unwrap();
    assert!(sheet.starts_with("Date,Category,Amount,Description,Payment Method"));
    assert!(sheet.contains(",Food,250.00,lunch,UPI"));
}

#[test]
fn send_invalid_amount_explains_format() {
    let data_dir = TempDir::new().unwrap();

    bot(&data_dir)
        .args(["send", "food", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid amount. Please enter a positive number"))
        .stdout(predicate::str::contains("food 250 lunch via UPI"));
}

#[test]
fn report_writes_chart_to_outbox() {
    let data_dir = TempDir::new().unwrap();

    bot(&data_dir).args(["send", "travel", "60"]).assert().success();
    bot(&data_dir)
        .args(["send", "/report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📊 Expense Report (₹)"))
        .stdout(predicate::str::contains(".svg"));

    let charts = std::fs::read_dir(data_dir.path().join("outbox")).unwrap().count();
    assert_eq!(charts, 1);
}

#[test]
fn chat_reads_messages_from_stdin() {
    let data_dir = TempDir::new().unwrap();

    bot(&data_dir)
        .args(["chat", "--in-memory"])
        .write_stdin("food 100\n/today\n/unknown\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Today's Total: ₹100.00"))
        .stdout(predicate::str::contains("Send /help"));
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    bot(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Tracker Configuration"))
        .stdout(predicate::str::contains("Expenses sheet:    Expenses"));
}
