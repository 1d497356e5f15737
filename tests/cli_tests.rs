use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ADMIN, TestStation, read};

#[test]
fn init_seeds_the_roster() {
    let st = TestStation::new();

    st.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Ready: 3 staff member(s), 0 log entries."));

    let staff = st.slot("staff_data");
    assert!(staff.contains("Ana García"));
    assert!(staff.contains("\"currentWorkStatus\":\"OUT\""));
    assert_eq!(st.slot("logs_data").trim(), "[]");
}

#[test]
fn staff_list_shows_active_members() {
    let st = TestStation::new();
    st.init();

    st.cmd()
        .args(["staff", "list"])
        .assert()
        .success()
        .stdout(contains("Ana García"))
        .stdout(contains("Carlos Ruiz"))
        .stdout(contains("Elena Beltrán"));

    st.cmd()
        .args(["staff", "list", "--search", "gerente"])
        .assert()
        .success()
        .stdout(contains("Elena Beltrán"))
        .stdout(contains("Ana García").not());
}

#[test]
fn clock_in_then_out() {
    let st = TestStation::new();
    st.init();

    st.cmd()
        .args(["clock", "in", "1"])
        .assert()
        .success()
        .stdout(contains("registered for Ana García"))
        .stdout(contains("1 working now"));

    assert!(st.slot("staff_data").contains("\"currentWorkStatus\":\"IN\""));

    st.clock("out", "1");

    let logs = st.slot("logs_data");
    let out_at = logs.find("\"type\":\"OUT\"").unwrap();
    let in_at = logs.find("\"type\":\"IN\"").unwrap();
    assert!(out_at < in_at, "newest entry must come first");
    assert!(!st.slot("staff_data").contains("\"currentWorkStatus\":\"IN\""));
}

#[test]
fn clock_rejects_unknown_staff_and_bad_kind() {
    let st = TestStation::new();
    st.init();

    st.cmd()
        .args(["clock", "in", "42"])
        .assert()
        .failure()
        .stderr(contains("Staff member not found"));

    st.cmd().args(["clock", "maybe", "1"]).assert().failure();
    assert_eq!(st.slot("logs_data").trim(), "[]");
}

#[test]
fn inactive_staff_cannot_clock() {
    let st = TestStation::new();
    st.init();

    st.cmd()
        .args(["--admin-pass", ADMIN, "staff", "deactivate", "2"])
        .assert()
        .success();

    for kind in ["in", "out"] {
        st.cmd()
            .args(["clock", kind, "2"])
            .assert()
            .failure()
            .stderr(contains("Carlos Ruiz is inactive"));
    }
    assert_eq!(st.slot("logs_data").trim(), "[]");

    st.cmd()
        .args(["--admin-pass", ADMIN, "staff", "activate", "2"])
        .assert()
        .success();
    st.clock("in", "2");
    assert!(st.slot("logs_data").contains("\"staffId\":\"2\""));
}

#[test]
fn clock_attaches_location_and_tolerates_missing_photo() {
    let st = TestStation::new();
    st.init();

    st.cmd()
        .args(["clock", "in", "2", "--lat", "40.4168", "--lng=-3.7038"])
        .args(["--photo", st.path("missing.png").to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("missing.png"))
        .stdout(contains("registered for Carlos Ruiz"));

    let logs = st.slot("logs_data");
    assert!(logs.contains("\"location\":{\"lat\":40.4168,\"lng\":-3.7038}"));
    assert!(!logs.contains("\"photo\""));
}

#[test]
fn clock_attaches_photo_as_data_url() {
    let st = TestStation::new();
    st.init();
    let photo = st.path("face.png");
    std::fs::write(&photo, [0x89, b'P', b'N', b'G']).unwrap();

    st.cmd()
        .args(["clock", "in", "3", "--photo", photo.to_str().unwrap()])
        .assert()
        .success();

    assert!(st.slot("logs_data").contains("data:image/png;base64,"));
}

#[test]
fn history_lists_newest_first_and_filters() {
    let st = TestStation::new();
    st.init();
    st.clock("in", "1").clock("in", "2").clock("out", "1");

    st.cmd()
        .args(["history", "--staff", "2"])
        .assert()
        .success()
        .stdout(contains("Carlos Ruiz"))
        .stdout(contains("Ana García").not())
        .stdout(contains("1 of 3 entries shown."));

    st.cmd()
        .args(["history", "-n", "2"])
        .assert()
        .success()
        .stdout(contains("2 of 3 entries shown."));
}

#[test]
fn admin_commands_require_the_passphrase() {
    let st = TestStation::new();
    st.init();

    st.cmd()
        .args(["staff", "add", "Diego", "QA"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));

    st.cmd()
        .args(["--admin-pass", "nope", "staff", "add", "Diego", "QA"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));

    assert!(!st.slot("staff_data").contains("Diego"));
}

#[test]
fn add_deactivate_and_remove_staff() {
    let st = TestStation::new();
    st.init();

    st.cmd()
        .args(["--admin-pass", ADMIN, "staff", "add", "  Diego  ", "QA"])
        .assert()
        .success()
        .stdout(contains("Registered Diego (QA)"));

    st.cmd()
        .env("STAFFCLOCK_ADMIN_PASS", ADMIN)
        .args(["staff", "deactivate", "2"])
        .assert()
        .success()
        .stdout(contains("Staff 2 is now inactive."));

    st.cmd()
        .args(["staff", "list"])
        .assert()
        .success()
        .stdout(contains("Diego"))
        .stdout(contains("Carlos Ruiz").not());

    st.cmd()
        .args(["staff", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Carlos Ruiz"));

    st.clock("in", "3");
    st.cmd()
        .args(["--admin-pass", ADMIN, "staff", "remove", "3", "--yes"])
        .assert()
        .success()
        .stdout(contains("Removed Elena Beltrán"));

    assert!(!st.slot("staff_data").contains("Elena"));
    assert!(st.slot("logs_data").contains("Elena Beltrán"));
}

#[test]
fn history_clear_needs_confirmation() {
    let st = TestStation::new();
    st.init();
    st.clock("in", "1");

    // No answer on stdin: nothing is removed.
    st.cmd()
        .args(["--admin-pass", ADMIN, "history", "clear"])
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));
    assert!(st.slot("logs_data").contains("Ana García"));

    st.cmd()
        .args(["--admin-pass", ADMIN, "history", "clear"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("1 entries removed"));

    assert_eq!(st.slot("logs_data").trim(), "[]");
    assert!(st.slot("staff_data").contains("\"currentWorkStatus\":\"IN\""));
}

#[test]
fn summary_shows_counts_and_seven_days() {
    let st = TestStation::new();
    st.init();
    st.clock("in", "1").clock("in", "2").clock("out", "2");

    st.cmd()
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Staff members:"))
        .stdout(contains("Last 7 days"))
        .stdout(contains("2 in"))
        .stdout(contains("1 out"));
}

#[test]
fn analyze_reports_open_shifts() {
    let st = TestStation::new();
    st.init();
    st.clock("in", "1");

    st.cmd()
        .arg("analyze")
        .assert()
        .success()
        .stdout(contains("Possibly forgot to clock out"))
        .stdout(contains("Ana García"));
}

#[test]
fn check_detects_and_repairs_presence() {
    let st = TestStation::new();
    st.init();
    st.clock("in", "1");

    let staff = st.slot("staff_data").replace("\"IN\"", "\"OUT\"");
    std::fs::write(st.data_dir().join("staff_data.json"), staff).unwrap();

    st.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(contains("1 mismatch(es) found"));

    st.cmd()
        .args(["--admin-pass", ADMIN, "check", "--repair"])
        .assert()
        .success()
        .stdout(contains("Repaired presence for 1 staff member(s)."));

    st.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(contains("matches the attendance log"));
}

#[test]
fn corrupt_storage_falls_back_to_seed() {
    let st = TestStation::new();
    std::fs::create_dir_all(st.data_dir()).unwrap();
    std::fs::write(st.data_dir().join("staff_data.json"), "{broken").unwrap();

    st.cmd()
        .args(["staff", "list"])
        .assert()
        .success()
        .stdout(contains("Ana García"));
}

#[test]
fn export_csv_and_json() {
    let st = TestStation::new();
    st.init();
    st.clock("in", "1").clock("out", "1");

    let csv = st.path("history.csv");
    st.cmd()
        .args(["export", "--file", csv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));
    let content = read(&csv);
    assert!(content.starts_with("id,staff_id,staff_name,kind"));
    assert_eq!(content.lines().count(), 3);

    let json = st.path("history.json");
    st.cmd()
        .args(["export", "--format", "json", "--file", json.to_str().unwrap()])
        .assert()
        .success();
    let parsed: serde_json::Value = serde_json::from_str(&read(&json)).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn backup_plain_and_compressed() {
    let st = TestStation::new();
    st.init();
    st.clock("in", "1");

    let plain = st.path("backup.json");
    st.cmd()
        .args(["backup", "--file", plain.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Backup of"));
    let bundle: serde_json::Value = serde_json::from_str(&read(&plain)).unwrap();
    assert_eq!(bundle["staff_data"].as_array().unwrap().len(), 3);
    assert_eq!(bundle["logs_data"].as_array().unwrap().len(), 1);

    st.cmd()
        .args(["backup", "--file", plain.to_str().unwrap(), "--compress"])
        .assert()
        .success();
    assert!(st.path("backup.zip").exists());
}

#[test]
fn sqlite_backend_persists_between_runs() {
    let st = TestStation::new();

    st.cmd()
        .args(["--storage", "sqlite", "--test", "init"])
        .assert()
        .success();
    st.cmd()
        .args(["--storage", "sqlite", "clock", "in", "2"])
        .assert()
        .success();

    assert!(st.data_dir().join("staffclock.sqlite").exists());

    st.cmd()
        .args(["--storage", "sqlite", "history"])
        .assert()
        .success()
        .stdout(contains("Carlos Ruiz"));
}

#[test]
fn unreadable_sqlite_store_starts_from_seed() {
    let st = TestStation::new();
    let db = st.data_dir().join("staffclock.sqlite");
    std::fs::create_dir_all(st.data_dir()).unwrap();
    let garbage = "not a database\n".repeat(64);
    std::fs::write(&db, &garbage).unwrap();

    st.cmd()
        .args(["--storage", "sqlite", "staff", "list"])
        .assert()
        .success()
        .stdout(contains("Storage migration error"))
        .stdout(contains("initial roster"))
        .stdout(contains("Ana García"));

    st.cmd()
        .args(["--storage", "sqlite", "clock", "in", "1"])
        .assert()
        .success()
        .stdout(contains("registered for Ana García"));

    assert_eq!(read(&db), garbage);
}
