mod common;
use common::{ANA, full_day, init_db_with_staff, rpo, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_month_csv() {
    let db_path = setup_test_db("export_month_csv");
    init_db_with_staff(&db_path);
    full_day(&db_path, ANA, "2026-03-02");
    full_day(&db_path, ANA, "2026-03-03");

    let out = temp_out("export_month_csv", "csv");

    rpo()
        .args([
            "--db", &db_path, "export", ANA, "--month", "2026-03", "--today", "2026-03-31",
            "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,day_type,entry,lunch_out,lunch_in,exit,hours,status,note"));
    assert!(content.contains("2026-03-02,normal,08:00,12:00,13:00,17:00,8.0,complete"));
    assert!(content.contains("2026-03-03"));
    assert!(content.contains("worked_hours,16.00"));
    assert!(content.contains("banked_balance,"));
}

#[test]
fn test_export_month_json() {
    let db_path = setup_test_db("export_month_json");
    init_db_with_staff(&db_path);
    full_day(&db_path, ANA, "2026-03-02");

    let out = temp_out("export_month_json", "json");

    rpo()
        .args([
            "--db", &db_path, "export", ANA, "--month", "2026-03", "--format", "json", "--file",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(v["employee"], "Ana");
    assert_eq!(v["records"][0]["date"], "2026-03-02");
    assert_eq!(v["totals"]["worked_hours"], 8.0);
}

#[test]
fn test_export_month_xlsx() {
    let db_path = setup_test_db("export_month_xlsx");
    init_db_with_staff(&db_path);
    full_day(&db_path, ANA, "2026-03-02");

    let out = temp_out("export_month_xlsx", "xlsx");

    rpo()
        .args([
            "--db", &db_path, "export", ANA, "--month", "2026-03", "--format", "xlsx", "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    // xlsx is a zip container
    let bytes = fs::read(&out).expect("read exported xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_staff(&db_path);

    rpo()
        .args([
            "--db", &db_path, "export", ANA, "--format", "json", "--file", "relative.json",
        ])
        .assert()
        .failure();
}

#[test]
fn test_export_force_overwrites() {
    let db_path = setup_test_db("export_force");
    init_db_with_staff(&db_path);

    let out = temp_out("export_force", "json");
    fs::write(&out, "old").expect("write placeholder");

    rpo()
        .args([
            "--db", &db_path, "export", ANA, "--month", "2026-03", "--format", "json", "--file",
            &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"totals\""));
}
