// Integration testing drives the compiled binary the way a user would.
use assert_cmd::Command;

#[test]
fn scaffold_mvp() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("proj");

    let mut cmd = Command::cargo_bin("flaskit").unwrap();

    cmd.arg("mvp").arg(&destination);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("layout.html"))
        .stdout(predicates::str::contains("13 created, 0 skipped"));

    assert!(destination.join("app/templates/layout.html").is_file());
    assert!(destination.join("app/static/images").is_dir());
}

#[test]
fn scaffold_mvp_rerun_reports_skips() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("proj");

    Command::cargo_bin("flaskit")
        .unwrap()
        .arg("mvp")
        .arg(&destination)
        .assert()
        .success();

    Command::cargo_bin("flaskit")
        .unwrap()
        .arg("mvp")
        .arg(&destination)
        .assert()
        .success()
        .stdout(predicates::str::contains("0 created, 13 skipped"));
}

#[test]
fn scaffold_saas() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("shop");

    let mut cmd = Command::cargo_bin("flaskit").unwrap();

    cmd.arg("saas")
        .arg(&destination)
        .arg("--database")
        .arg("postgres");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("28 created, 0 skipped"));

    assert!(destination.join("run.py").is_file());
    assert!(destination.join("app/auth/routes.py").is_file());
    assert!(destination.join("app/Feature3/services.py").is_file());

    let requirements = std::fs::read_to_string(destination.join("requirements.txt")).unwrap();
    assert_eq!(requirements, "Flask\nFlask_SQLAlchemy\n");
}
