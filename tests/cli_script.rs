use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cli() -> Command {
    Command::cargo_bin("cheque_core_cli").unwrap()
}

#[test]
fn words_command_spells_the_amount() {
    cli()
        .args(["words", "1500"])
        .assert()
        .success()
        .stdout(contains("ONE THOUSAND, FIVE HUNDRED ***"));
}

#[test]
fn banks_command_lists_the_registry() {
    cli()
        .arg("banks")
        .assert()
        .success()
        .stdout(contains("Equity Bank (178mm x 99mm)"));
}

#[test]
fn stylesheet_command_emits_the_print_block() {
    cli()
        .args(["stylesheet", "Equity Bank"])
        .assert()
        .success()
        .stdout(contains("width: 178mm;"))
        .stdout(contains(".print-amount-figures"));
}

#[test]
fn stylesheet_for_an_unknown_bank_reports_instead_of_failing() {
    cli()
        .args(["stylesheet", "Equit Bank"])
        .assert()
        .success()
        .stdout(contains("No print layout available"))
        .stdout(contains("Equity Bank"));
}

#[test]
fn save_then_list_shows_the_record() {
    let home = TempDir::new().unwrap();
    let form = r#"{
        "payee": "Kenya Power",
        "amount": "1500",
        "date": "2026-08-07",
        "bank": "Equity Bank",
        "memo": "Invoice #1024"
    }"#;

    cli()
        .env("CHEQUE_CORE_HOME", home.path())
        .arg("save")
        .write_stdin(form)
        .assert()
        .success()
        .stdout(contains("Record saved successfully"));

    cli()
        .env("CHEQUE_CORE_HOME", home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Kenya Power"))
        .stdout(contains("1,500"));
}

#[test]
fn save_rejects_an_incomplete_form() {
    let home = TempDir::new().unwrap();
    let form = r#"{
        "payee": "",
        "amount": "1500",
        "date": "2026-08-07",
        "bank": "Equity Bank",
        "memo": ""
    }"#;

    cli()
        .env("CHEQUE_CORE_HOME", home.path())
        .arg("save")
        .write_stdin(form)
        .assert()
        .failure()
        .stderr(contains("payee, amount, and bank"));
}

#[test]
fn unknown_command_prints_usage() {
    cli()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(contains("Usage: cheque_core_cli"));
}
