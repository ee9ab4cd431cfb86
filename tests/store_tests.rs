use chrono::{NaiveDate, NaiveTime};
use rponto::core::calculator::LunchPolicy;
use rponto::core::employee::EmployeeLogic;
use rponto::core::justify::JustifyLogic;
use rponto::core::punch::{Advisory, PunchLogic, PunchOutcome};
use rponto::core::report::ReportLogic;
use rponto::core::store::AttendanceStore;
use rponto::db::store::SqliteStore;
use rponto::errors::AppError;
use rponto::models::employee::Employee;
use rponto::models::justification::{JustificationKind, JustificationStatus};
use rponto::models::punch::{PunchKind, PunchStage};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn setup() -> (SqliteStore, i64, i64) {
    let mut store = SqliteStore::in_memory().expect("in-memory store");

    let mut boss = Employee::new(0, "Boss", "boss@example.com");
    boss.is_manager = true;
    let boss = EmployeeLogic::add(&mut store, boss).unwrap();
    let ana = EmployeeLogic::add(&mut store, Employee::new(0, "Ana", "ana@example.com")).unwrap();

    (store, ana.id, boss.id)
}

fn punch_day(store: &mut SqliteStore, emp: i64, date: &str, times: &[&str]) {
    let policy = LunchPolicy::default();
    for at in times {
        let out = PunchLogic::register(store, &policy, emp, d(date), t(at), None).unwrap();
        assert!(matches!(out, PunchOutcome::Recorded { .. }), "{date} {at}: {out:?}");
    }
}

#[test]
fn scenario_full_day_is_eight_hours() {
    let (mut store, ana, _) = setup();
    punch_day(&mut store, ana, "2026-03-02", &["08:00", "12:00", "13:00", "17:00"]);

    let rec = store.punch_record(ana, d("2026-03-02")).unwrap().unwrap();
    assert_eq!(rec.hours, 8.0);
    assert_eq!(rec.punches.stage(), PunchStage::Complete);
}

#[test]
fn scenario_short_lunch_refused_without_writing() {
    let (mut store, ana, _) = setup();
    let policy = LunchPolicy::default();
    punch_day(&mut store, ana, "2026-03-02", &["08:00", "12:00"]);

    let before = store.punch_record(ana, d("2026-03-02")).unwrap().unwrap();
    let out = PunchLogic::register(&mut store, &policy, ana, d("2026-03-02"), t("12:15"), None)
        .unwrap();

    match out {
        PunchOutcome::Refused(Advisory::LunchTooShort {
            minimum,
            remaining,
            earliest,
        }) => {
            assert_eq!(minimum, 60);
            assert_eq!(remaining, 45);
            assert_eq!(earliest, t("13:00"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    let after = store.punch_record(ana, d("2026-03-02")).unwrap().unwrap();
    assert_eq!(before.punches, after.punches);
    assert_eq!(before.hours, after.hours);
}

#[test]
fn in_progress_hours_use_the_punch_time() {
    let (mut store, ana, _) = setup();
    punch_day(&mut store, ana, "2026-03-02", &["08:00", "12:00", "13:00"]);

    let rec = store.punch_record(ana, d("2026-03-02")).unwrap().unwrap();
    assert_eq!(rec.hours, 4.0);

    let status = PunchLogic::day_status(
        &store,
        &LunchPolicy::default(),
        ana,
        d("2026-03-02"),
        t("15:30"),
    )
    .unwrap();
    assert_eq!(status.hours, 6.5);
    assert_eq!(status.next, Some(PunchKind::Exit));
}

#[test]
fn scenario_weekly_overtime_over_ceiling() {
    let (mut store, ana, _) = setup();

    // Mon..Fri 9h15 of work, Sat 0h → 46.25h; the ceiling is 40
    for date in ["2026-03-02", "2026-03-03", "2026-03-04", "2026-03-05", "2026-03-06"] {
        punch_day(&mut store, ana, date, &["08:00", "12:00", "13:00", "18:15"]);
    }

    let report = ReportLogic::week(&store, ana, d("2026-03-04")).unwrap();
    assert_eq!(report.week.summary.total, 46.25);
    assert_eq!(report.week.summary.normal_portion, 40.0);
    assert_eq!(report.week.summary.overtime, 6.25);
    assert_eq!(report.week.summary.days_worked, 5);
}

#[test]
fn scenario_overlapping_justifications_credit_days_once() {
    let (mut store, ana, boss) = setup();

    JustifyLogic::create(
        &mut store,
        ana,
        d("2026-03-02"),
        d("2026-03-04"),
        JustificationKind::Medical,
        "",
        None,
        Some(boss),
    )
    .unwrap();
    JustifyLogic::create(
        &mut store,
        ana,
        d("2026-03-03"),
        d("2026-03-05"),
        JustificationKind::Leave,
        "",
        None,
        Some(boss),
    )
    .unwrap();

    let report = ReportLogic::month(&store, ana, d("2026-03-01"), d("2026-03-31"), d("2026-03-31"))
        .unwrap();
    assert_eq!(report.balance.justified_days, 4);
    assert_eq!(report.balance.justified_hours, 32.0);
    assert_eq!(report.justifications.len(), 2);
}

#[test]
fn pending_justification_earns_no_credit_until_approved() {
    let (mut store, ana, boss) = setup();

    let j = JustifyLogic::create(
        &mut store,
        ana,
        d("2026-03-09"),
        d("2026-03-09"),
        JustificationKind::Absence,
        "dentist",
        Some("/tmp/note.pdf"),
        Some(ana),
    )
    .unwrap();
    assert_eq!(j.status, JustificationStatus::Pending);

    let month = |s: &SqliteStore| {
        ReportLogic::month(s, ana, d("2026-03-01"), d("2026-03-31"), d("2026-03-31")).unwrap()
    };
    assert_eq!(month(&store).balance.justified_hours, 0.0);

    let j = JustifyLogic::resolve(&mut store, j.id, true, boss).unwrap();
    assert_eq!(j.approved_by, Some(boss));
    assert_eq!(month(&store).balance.justified_hours, 8.0);

    let stored = store.justification(j.id).unwrap().unwrap();
    assert_eq!(stored.attachment.as_deref(), Some("/tmp/note.pdf"));
    assert!(matches!(
        JustifyLogic::resolve(&mut store, j.id, false, boss),
        Err(AppError::InvalidTransition(_))
    ));
}

#[test]
fn straddling_week_counts_all_its_hours() {
    let (mut store, ana, _) = setup();

    // week of Mon 2026-03-30 .. Sun 2026-04-05 straddles March/April
    for date in ["2026-03-30", "2026-03-31", "2026-04-01", "2026-04-02", "2026-04-03"] {
        punch_day(&mut store, ana, date, &["07:00", "12:00", "13:00", "16:00"]);
    }

    let april = ReportLogic::month(&store, ana, d("2026-04-01"), d("2026-04-30"), d("2026-04-30"))
        .unwrap();
    // 5 x 8h = 40h, no overtime, but only 3 days fall in April
    assert_eq!(april.balance.worked_hours, 24.0);
    assert_eq!(april.balance.days_worked, 3);
    assert_eq!(april.records.len(), 3);
    let first = &april.balance.weeks[0];
    assert_eq!(first.start, d("2026-03-30"));
    assert_eq!(first.worked, 40.0);
    assert_eq!(april.balance.overtime_hours, 0.0);
}

#[test]
fn correction_creates_missing_record_and_keeps_day_type() {
    let (mut store, ana, boss) = setup();
    store.save_holiday(d("2026-03-19"), "Sao Jose").unwrap();

    let rec = PunchLogic::correct(
        &mut store,
        ana,
        d("2026-03-19"),
        [Some(t("08:00")), None, None, Some(t("14:00"))],
        boss,
        "forgotten punches",
        Some("manual"),
        t("20:00"),
    )
    .unwrap();

    assert_eq!(rec.hours, 6.0);
    assert!(rec.day_type.is_special());
    assert_eq!(rec.edited_by, Some(boss));

    // removing the holiday afterwards does not reclassify the stored day
    store.delete_holiday(d("2026-03-19")).unwrap();
    let stored = store.punch_record(ana, d("2026-03-19")).unwrap().unwrap();
    assert!(stored.day_type.is_special());
    assert_eq!(stored.note, "manual");
    assert_eq!(stored.edit_reason, "forgotten punches");
}

#[test]
fn dashboard_reports_pending_and_absentees() {
    let (mut store, ana, _) = setup();
    let bruno =
        EmployeeLogic::add(&mut store, Employee::new(0, "Bruno", "bruno@example.com")).unwrap();

    punch_day(&mut store, ana, "2026-03-02", &["08:00"]);
    JustifyLogic::create(
        &mut store,
        bruno.id,
        d("2026-03-10"),
        d("2026-03-10"),
        JustificationKind::Other,
        "",
        None,
        None,
    )
    .unwrap();

    let dash = ReportLogic::dashboard(&store, d("2026-03-02")).unwrap();
    assert_eq!(dash.rows.len(), 3);
    assert_eq!(dash.pending.len(), 1);
    let absent: Vec<i64> = dash.absentees.iter().map(|e| e.id).collect();
    assert_eq!(absent, vec![bruno.id]);

    let ana_row = dash.rows.iter().find(|r| r.employee.id == ana).unwrap();
    assert!(ana_row.today.is_some());
}

#[test]
fn unknown_employee_is_an_error() {
    let (mut store, _, _) = setup();
    let res = PunchLogic::register(
        &mut store,
        &LunchPolicy::default(),
        999,
        d("2026-03-02"),
        t("08:00"),
        None,
    );
    assert!(matches!(res, Err(AppError::EmployeeNotFound(999))));
}

#[test]
fn unreadable_stored_punches_do_not_break_reports() {
    let (mut store, ana, boss) = setup();
    punch_day(&mut store, ana, "2026-03-02", &["08:00", "12:00", "13:00", "17:00"]);
    store
        .conn()
        .execute(
            "INSERT INTO punch_records (employee_id, date, entry_time) VALUES (?1, '2026-03-03', '8h')",
            [ana],
        )
        .unwrap();

    let month = ReportLogic::month(&store, ana, d("2026-03-01"), d("2026-03-31"), d("2026-03-31")).unwrap();
    assert_eq!(month.balance.worked_hours, 8.0);
    assert_eq!(month.balance.days_worked, 1);

    let week = ReportLogic::week(&store, ana, d("2026-03-03")).unwrap();
    assert_eq!(week.week.summary.total, 8.0);

    let dash = ReportLogic::dashboard(&store, d("2026-03-03")).unwrap();
    let ana_row = dash.rows.iter().find(|r| r.employee.id == ana).unwrap();
    assert!(ana_row.today.is_none());

    // a correction replaces the unreadable row
    let rec = PunchLogic::correct(
        &mut store,
        ana,
        d("2026-03-03"),
        [Some(t("08:00")), None, None, Some(t("16:00"))],
        boss,
        "garbled import",
        None,
        t("20:00"),
    )
    .unwrap();
    assert_eq!(rec.hours, 8.0);
    let month = ReportLogic::month(&store, ana, d("2026-03-01"), d("2026-03-31"), d("2026-03-31")).unwrap();
    assert_eq!(month.balance.worked_hours, 16.0);
}

#[test]
fn employee_rules_have_typed_errors() {
    let (mut store, ana, _) = setup();

    let dup = EmployeeLogic::add(&mut store, Employee::new(0, "Other Ana", "ana@example.com"));
    assert!(matches!(dup, Err(AppError::DuplicateEmail(ref email)) if email == "ana@example.com"));

    let missing = EmployeeLogic::resolve(&store, "ghost@example.com");
    assert!(matches!(missing, Err(AppError::EmployeeEmailNotFound(_))));

    let not_boss = EmployeeLogic::require_manager(&store, &ana.to_string());
    assert!(matches!(not_boss, Err(AppError::NotAManager(ref name)) if name == "Ana"));

    let blank = EmployeeLogic::add(&mut store, Employee::new(0, " ", "blank@example.com"));
    assert!(matches!(blank, Err(AppError::InvalidEmployee(_))));
}
