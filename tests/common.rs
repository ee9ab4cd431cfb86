#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const MANAGER: &str = "admin@rponto.local";
pub const ANA: &str = "ana@example.com";
pub const BRUNO: &str = "bruno@example.com";

pub fn rpo() -> Command {
    cargo_bin_cmd!("rponto")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rponto.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rponto_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB (schema, holidays, default manager) and add two employees.
pub fn init_db_with_staff(db_path: &str) {
    rpo()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (name, email) in [("Ana", ANA), ("Bruno", BRUNO)] {
        rpo()
            .args(["--db", db_path, "employee", "add", name, email])
            .assert()
            .success();
    }
}

/// Register a punch for `employee` on `date` at `at` (next natural kind).
pub fn punch(db_path: &str, employee: &str, date: &str, at: &str) -> assert_cmd::assert::Assert {
    rpo()
        .args(["--db", db_path, "punch", employee, "--date", date, "--at", at])
        .assert()
}

/// A full normal day: 08:00, lunch 12:00-13:00, exit 17:00 (8h).
pub fn full_day(db_path: &str, employee: &str, date: &str) {
    for at in ["08:00", "12:00", "13:00", "17:00"] {
        punch(db_path, employee, date, at).success();
    }
}
