use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ANA, MANAGER, full_day, init_db_with_staff, punch, rpo, setup_test_db};

#[test]
fn test_punch_full_day_sequence() {
    let db_path = setup_test_db("punch_full_day");
    init_db_with_staff(&db_path);

    punch(&db_path, ANA, "2026-03-02", "08:00")
        .success()
        .stdout(contains("Entry registered at 08:00"))
        .stdout(contains("Next punch: Lunch out"));

    punch(&db_path, ANA, "2026-03-02", "12:00")
        .success()
        .stdout(contains("Lunch out registered at 12:00"));

    punch(&db_path, ANA, "2026-03-02", "13:00")
        .success()
        .stdout(contains("Lunch return registered at 13:00"));

    punch(&db_path, ANA, "2026-03-02", "17:00")
        .success()
        .stdout(contains("Exit registered at 17:00"))
        .stdout(contains("8.00h"));

    punch(&db_path, ANA, "2026-03-02", "18:00")
        .success()
        .stdout(contains("All punches for the day are already registered"));
}

#[test]
fn test_lunch_return_too_early_is_refused() {
    let db_path = setup_test_db("punch_lunch_too_early");
    init_db_with_staff(&db_path);

    punch(&db_path, ANA, "2026-03-02", "08:00").success();
    punch(&db_path, ANA, "2026-03-02", "12:00").success();

    punch(&db_path, ANA, "2026-03-02", "12:30")
        .success()
        .stdout(contains("Minimum lunch break: 60 minutes"))
        .stdout(contains("30 min left"))
        .stdout(contains("13:00"));

    // nothing was written: still at lunch
    rpo()
        .args(["--db", &db_path, "status", ANA, "--date", "2026-03-02", "--at", "12:30"])
        .assert()
        .success()
        .stdout(contains("at lunch"))
        .stdout(contains("Lunch return allowed from 13:00"));
}

#[test]
fn test_sunday_uses_short_lunch_minimum() {
    let db_path = setup_test_db("punch_sunday_lunch");
    init_db_with_staff(&db_path);

    // 2026-03-01 is a Sunday
    punch(&db_path, ANA, "2026-03-01", "09:00").success();
    punch(&db_path, ANA, "2026-03-01", "12:00").success();

    punch(&db_path, ANA, "2026-03-01", "12:20")
        .success()
        .stdout(contains("Minimum lunch break: 30 minutes"));

    punch(&db_path, ANA, "2026-03-01", "12:30")
        .success()
        .stdout(contains("Lunch return registered at 12:30"));
}

#[test]
fn test_explicit_exit_without_lunch() {
    let db_path = setup_test_db("punch_exit_without_lunch");
    init_db_with_staff(&db_path);

    punch(&db_path, ANA, "2026-03-03", "08:00").success();

    rpo()
        .args([
            "--db", &db_path, "punch", ANA, "--kind", "exit", "--date", "2026-03-03", "--at",
            "14:00",
        ])
        .assert()
        .success()
        .stdout(contains("Exit registered at 14:00"))
        .stdout(contains("6.00h"));
}

#[test]
fn test_first_punch_must_be_entry() {
    let db_path = setup_test_db("punch_first_not_entry");
    init_db_with_staff(&db_path);

    rpo()
        .args([
            "--db", &db_path, "punch", ANA, "--kind", "lunch-in", "--date", "2026-03-04", "--at",
            "13:00",
        ])
        .assert()
        .success()
        .stdout(contains("Cannot register 'lunch-in' while the day is 'no record'"));
}

#[test]
fn test_punch_before_previous_is_refused() {
    let db_path = setup_test_db("punch_before_previous");
    init_db_with_staff(&db_path);

    punch(&db_path, ANA, "2026-03-05", "09:00").success();
    punch(&db_path, ANA, "2026-03-05", "08:30")
        .success()
        .stdout(contains("earlier than the previous punch (09:00)"));
}

#[test]
fn test_unknown_employee_fails() {
    let db_path = setup_test_db("punch_unknown_employee");
    init_db_with_staff(&db_path);

    punch(&db_path, "nobody@example.com", "2026-03-02", "08:00")
        .failure()
        .stderr(contains("No employee with email"));

    punch(&db_path, "999", "2026-03-02", "08:00")
        .failure()
        .stderr(contains("Employee 999 not found"));
}

#[test]
fn test_invalid_time_fails() {
    let db_path = setup_test_db("punch_invalid_time");
    init_db_with_staff(&db_path);

    punch(&db_path, ANA, "2026-03-02", "8h")
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_manager_correction() {
    let db_path = setup_test_db("punch_manager_correction");
    init_db_with_staff(&db_path);

    full_day(&db_path, ANA, "2026-03-02");

    // a regular employee cannot correct
    rpo()
        .args([
            "--db", &db_path, "correct", ANA, "2026-03-02", "--exit", "18:00", "--by", ANA,
        ])
        .assert()
        .failure()
        .stderr(contains("is not a manager"));

    rpo()
        .args([
            "--db",
            &db_path,
            "correct",
            ANA,
            "2026-03-02",
            "--exit",
            "18:00",
            "--by",
            MANAGER,
            "--reason",
            "forgot to punch out",
        ])
        .assert()
        .success()
        .stdout(contains("corrected by Administrator"))
        .stdout(contains("9.00h"));

    rpo()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("edit"))
        .stdout(contains("forgot to punch out"))
        .stdout(contains("08:00 / 12:00 / 13:00 / 17:00 => 08:00 / 12:00 / 13:00 / 18:00"));
}

#[test]
fn test_correction_rejects_inconsistent_punches() {
    let db_path = setup_test_db("punch_correction_inconsistent");
    init_db_with_staff(&db_path);

    full_day(&db_path, ANA, "2026-03-02");

    rpo()
        .args([
            "--db", &db_path, "correct", ANA, "2026-03-02", "--lunch-in", "none", "--by",
            MANAGER,
        ])
        .assert()
        .failure()
        .stderr(contains("inconsistent punch sequence"));

    // clearing both lunch punches is fine: 08:00-17:00 without lunch
    rpo()
        .args([
            "--db",
            &db_path,
            "correct",
            ANA,
            "2026-03-02",
            "--lunch-out",
            "none",
            "--lunch-in",
            "none",
            "--by",
            MANAGER,
        ])
        .assert()
        .success()
        .stdout(contains("9.00h").and(contains("--:--")));
}
