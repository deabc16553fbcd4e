mod common;
use common::TestEnv;
use predicates::prelude::*;
use std::fs;

#[test]
fn init_creates_config_and_database() {
    let env = TestEnv::new();

    env.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    assert!(env.path("zeitkonto.conf").exists());
    assert!(std::path::Path::new(&env.db).exists());

    let conf = fs::read_to_string(env.path("zeitkonto.conf")).unwrap();
    assert!(conf.contains("week_start: sunday"));
}

#[test]
fn add_prints_canonical_record() {
    let env = TestEnv::new();

    env.cmd()
        .args(["add", "2025-03-10", "--start", "08:00", "--end", "16:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-10 08:00–16:30 (8.50 h)"));
}

#[test]
fn end_before_start_is_refused() {
    let env = TestEnv::new();

    env.cmd()
        .args(["add", "2025-03-10", "--start", "16:00", "--end", "08:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("end time must be after start time"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No work days"));
}

#[test]
fn list_all_shows_total() {
    let env = TestEnv::new();
    env.seed();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("All entries"))
        .stdout(predicate::str::contains("01.09.2025"))
        .stdout(predicate::str::contains("Total: 18.50 hours"));
}

#[test]
fn list_month_filters_one_based_month() {
    let env = TestEnv::new();
    env.seed();

    env.cmd()
        .args(["list", "--period", "month", "--year", "2025", "--month", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("September 2025"))
        .stdout(predicate::str::contains("Total: 16.50 hours"))
        .stdout(predicate::str::contains("01.10.2025").not());
}

#[test]
fn list_week_uses_sunday_start() {
    let env = TestEnv::new();
    env.add("2025-09-13", "08:00", "09:00"); // Saturday before
    env.add("2025-09-14", "08:00", "10:00"); // Sunday
    env.add("2025-09-20", "08:00", "12:00"); // Saturday

    env.cmd()
        .args(["list", "--period", "week", "--week-of", "2025-09-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14.09.2025 – 20.09.2025"))
        .stdout(predicate::str::contains("Total: 6.00 hours"));
}

#[test]
fn invalid_month_is_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["list", "--period", "month", "--year", "2025", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("month must be between 1 and 12"));
}

#[test]
fn invalid_date_argument_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["add", "2025-02-30", "--start", "08:00", "--end", "09:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2025-02-30"));
}

#[test]
fn edit_replaces_record() {
    let env = TestEnv::new();
    let id = env.add("2025-03-10", "08:00", "16:00");

    env.cmd()
        .args([
            "add", "2025-03-10", "--start", "09:00", "--end", "12:00", "--edit", &id,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 3.00 hours"));
}

#[test]
fn delete_with_yes_removes_record() {
    let env = TestEnv::new();
    let id = env.add("2025-03-10", "08:00", "16:00");
    env.add("2025-03-11", "08:00", "10:00");

    env.cmd().args(["del", &id, "--yes"]).assert().success();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()).not())
        .stdout(predicate::str::contains("Total: 2.00 hours"));
}

#[test]
fn delete_unknown_id_fails() {
    let env = TestEnv::new();
    env.add("2025-03-10", "08:00", "16:00");

    env.cmd()
        .args(["del", "does-not-exist", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn delete_declined_keeps_record() {
    let env = TestEnv::new();
    let id = env.add("2025-03-10", "08:00", "16:00");

    env.cmd()
        .args(["del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled"));

    env.cmd()
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("Total: 8.00 hours"));
}

#[test]
fn config_check_and_migrate() {
    let env = TestEnv::new();
    fs::write(env.path("zeitkonto.conf"), "backend: local\n").unwrap();

    env.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("week_start"));

    env.cmd().args(["config", "--migrate"]).assert().success();

    env.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is complete"));
}

#[test]
fn remote_backend_without_settings_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--backend", "remote", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("remote.endpoint"));
}

#[test]
fn week_of_alone_selects_that_week() {
    let env = TestEnv::new();
    env.add("2025-09-13", "08:00", "09:00");
    env.add("2025-09-14", "08:00", "10:00");

    env.cmd()
        .args(["list", "--week-of", "2025-09-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14.09.2025 – 20.09.2025"))
        .stdout(predicate::str::contains("Total: 2.00 hours"));
}

#[test]
fn month_flag_with_all_period_fails() {
    let env = TestEnv::new();
    env.add("2025-09-14", "08:00", "10:00");

    env.cmd()
        .args(["list", "--period", "all", "--month", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only apply to a month period"));
}
